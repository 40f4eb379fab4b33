// app/foodshare_flow/src/lib.rs

//! # FoodShare Flow
//!
//! Screen-navigation and session state machine of the **FoodShare** app,
//! which matches food donors (shops, restaurants) with receiving NGOs.
//! A user moves through the auth screens to `Home`, and from there into
//! registration, browsing and donation screens:
//!
//! | Phase          | Screens                                              |
//! |----------------|------------------------------------------------------|
//! | Auth           | `Welcome`, `Login`, `Register`, `ForgotPassword`     |
//! | Verification   | `Otp`, `ResetPassword`                               |
//! | Dashboard      | `Home`, `Settings`, `Activity`, `Account`            |
//! | Registration   | `RegisterEntity` (donor or receiver tab)             |
//! | Browsing       | `ViewMoreDonors`, `ViewMoreReceivers`, `ReceiverDetails`, `AvailableFoodItems` |
//! | Donation       | `FoodDonation`                                       |
//!
//! ## Architecture
//!
//! Rules live in [`transition`], which is pure. State lives in
//! [`session`]. [`Navigator`] is the only thing that mutates either: it
//! commits each accepted step atomically and manages the resend-countdown
//! lease ([`countdown`]). The crate has no I/O and no clock; the host
//! delivers actions and ticks one at a time.
//!
//! ```
//! use foodshare_flow::{Action, Navigator, Screen};
//!
//! let mut nav = Navigator::new();
//! nav.dispatch(&Action::Next);
//! nav.dispatch(&Action::SubmitLogin {
//!     contact: "donor@example.org".into(),
//!     password: "secret".into(),
//! });
//! assert_eq!(nav.current(), Screen::Home);
//! assert!(nav.session().is_authenticated());
//! ```

pub mod action;
pub mod countdown;
pub mod errors;
pub mod navigator;
pub mod screens;
pub mod session;
pub mod transition;
pub mod types;
pub mod validators;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_countdown;
#[cfg(test)]
mod test_session;

pub use action::{Action, ActionKind};
pub use countdown::TimerCommand;
pub use errors::{FlowError, Rejection, SessionDecodeError};
pub use navigator::{Dispatched, Navigator, Outcome};
pub use screens::{Screen, ScreenProps, ScreenView};
pub use session::{OtpDigits, SessionState, OTP_LENGTH, RESEND_COOLDOWN_SECS};
pub use types::{
    DonationForm, DonorRecord, EntityKind, FoodListingRecord, ImageRef, OtpFlow, ReceiverId,
    ReceiverRecord,
};
