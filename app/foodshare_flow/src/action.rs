//! Actions a rendered screen can dispatch.
//!
//! [`Action`] carries the payload; [`ActionKind`] is the bare name used by
//! the screen registry and in error reports. On the wire an action is a
//! JSON object tagged by `action`:
//!
//! ```json
//! { "action": "submit_login", "contact": "a@b.org", "password": "pw" }
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{DonationForm, DonorRecord, EntityKind, ReceiverId, ReceiverRecord};

/// Every action the state machine understands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    // Welcome
    Next,

    // Login
    SubmitLogin {
        contact: String,
        password: String,
    },
    GoToRegister,
    ForgotPassword,

    // Register
    SubmitRegistration {
        name: String,
        contact: String,
        password: String,
        confirm: String,
    },
    GoToLogin,

    // ForgotPassword
    SendOtp {
        contact: String,
    },

    // Otp
    EnterDigit {
        index: usize,
        value: String,
    },
    Verify,
    Resend,

    // ResetPassword
    ConfirmReset {
        new_password: String,
        confirm: String,
    },

    // Home
    Logout,
    SettingsPress,
    ActivityPress,
    AccountPress,
    RegisterPress,
    ShopRegisterPress,
    NgoRegisterPress,
    ViewMoreDonorsPress,
    ViewMoreReceiversPress,
    DonateFoodPress,

    // RegisterEntity
    SelectEntityKind {
        kind: EntityKind,
    },
    DonorSubmit(DonorRecord),
    ReceiverSubmit(ReceiverRecord),

    // Settings
    ToggleDarkMode,

    // ViewMoreReceivers
    ViewDetails {
        receiver: ReceiverId,
    },

    // ViewMoreDonors
    AvailablePress,

    // FoodDonation
    Donate(DonationForm),

    // Shared by every secondary screen
    GoBack,
}

/// Payload-free name of an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Next,
    SubmitLogin,
    GoToRegister,
    ForgotPassword,
    SubmitRegistration,
    GoToLogin,
    SendOtp,
    EnterDigit,
    Verify,
    Resend,
    ConfirmReset,
    Logout,
    SettingsPress,
    ActivityPress,
    AccountPress,
    RegisterPress,
    ShopRegisterPress,
    NgoRegisterPress,
    ViewMoreDonorsPress,
    ViewMoreReceiversPress,
    DonateFoodPress,
    SelectEntityKind,
    DonorSubmit,
    ReceiverSubmit,
    ToggleDarkMode,
    ViewDetails,
    AvailablePress,
    Donate,
    GoBack,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Next => ActionKind::Next,
            Action::SubmitLogin { .. } => ActionKind::SubmitLogin,
            Action::GoToRegister => ActionKind::GoToRegister,
            Action::ForgotPassword => ActionKind::ForgotPassword,
            Action::SubmitRegistration { .. } => ActionKind::SubmitRegistration,
            Action::GoToLogin => ActionKind::GoToLogin,
            Action::SendOtp { .. } => ActionKind::SendOtp,
            Action::EnterDigit { .. } => ActionKind::EnterDigit,
            Action::Verify => ActionKind::Verify,
            Action::Resend => ActionKind::Resend,
            Action::ConfirmReset { .. } => ActionKind::ConfirmReset,
            Action::Logout => ActionKind::Logout,
            Action::SettingsPress => ActionKind::SettingsPress,
            Action::ActivityPress => ActionKind::ActivityPress,
            Action::AccountPress => ActionKind::AccountPress,
            Action::RegisterPress => ActionKind::RegisterPress,
            Action::ShopRegisterPress => ActionKind::ShopRegisterPress,
            Action::NgoRegisterPress => ActionKind::NgoRegisterPress,
            Action::ViewMoreDonorsPress => ActionKind::ViewMoreDonorsPress,
            Action::ViewMoreReceiversPress => ActionKind::ViewMoreReceiversPress,
            Action::DonateFoodPress => ActionKind::DonateFoodPress,
            Action::SelectEntityKind { .. } => ActionKind::SelectEntityKind,
            Action::DonorSubmit(_) => ActionKind::DonorSubmit,
            Action::ReceiverSubmit(_) => ActionKind::ReceiverSubmit,
            Action::ToggleDarkMode => ActionKind::ToggleDarkMode,
            Action::ViewDetails { .. } => ActionKind::ViewDetails,
            Action::AvailablePress => ActionKind::AvailablePress,
            Action::Donate(_) => ActionKind::Donate,
            Action::GoBack => ActionKind::GoBack,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
