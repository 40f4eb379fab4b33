//! # Screen Registry
//!
//! The closed set of screens, the actions each one may emit, and the slice
//! of session state each one is rendered with. Purely declarative: nothing
//! here changes state.
//!
//! ```text
//! Welcome ─► Login ─┬─────────────────────────────► Home
//!                   ├─► Register ───────► Otp ─────► Home
//!                   └─► ForgotPassword ─► Otp ─► ResetPassword ─► Login
//!
//! Home ─┬─► Settings / Activity / Account / RegisterEntity ─► Home
//!       ├─► ViewMoreDonors ─► AvailableFoodItems ─► Home
//!       ├─► ViewMoreReceivers ⇄ ReceiverDetails
//!       └─► FoodDonation ─► ViewMoreDonors
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::ActionKind;
use crate::session::{OtpDigits, SessionState};
use crate::types::{DonorRecord, EntityKind, FoodListingRecord, ReceiverId, ReceiverRecord};

/// A mutually exclusive UI mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Register,
    ForgotPassword,
    Otp,
    ResetPassword,
    Home,
    Settings,
    Activity,
    Account,
    RegisterEntity,
    ViewMoreDonors,
    ViewMoreReceivers,
    ReceiverDetails,
    FoodDonation,
    AvailableFoodItems,
}

impl Screen {
    /// Every screen, in flow order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Welcome,
            Screen::Login,
            Screen::Register,
            Screen::ForgotPassword,
            Screen::Otp,
            Screen::ResetPassword,
            Screen::Home,
            Screen::Settings,
            Screen::Activity,
            Screen::Account,
            Screen::RegisterEntity,
            Screen::ViewMoreDonors,
            Screen::ViewMoreReceivers,
            Screen::ReceiverDetails,
            Screen::FoodDonation,
            Screen::AvailableFoodItems,
        ]
    }

    /// Stable snake_case identifier, identical to the serde name.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::ForgotPassword => "forgot_password",
            Screen::Otp => "otp",
            Screen::ResetPassword => "reset_password",
            Screen::Home => "home",
            Screen::Settings => "settings",
            Screen::Activity => "activity",
            Screen::Account => "account",
            Screen::RegisterEntity => "register_entity",
            Screen::ViewMoreDonors => "view_more_donors",
            Screen::ViewMoreReceivers => "view_more_receivers",
            Screen::ReceiverDetails => "receiver_details",
            Screen::FoodDonation => "food_donation",
            Screen::AvailableFoodItems => "available_food_items",
        }
    }

    /// Heading shown by the renderer.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Login",
            Screen::Register => "Create New Account",
            Screen::ForgotPassword => "Forgot Password",
            Screen::Otp => "Verification",
            Screen::ResetPassword => "Reset Password",
            Screen::Home => "Home",
            Screen::Settings => "Settings",
            Screen::Activity => "Activity",
            Screen::Account => "Account",
            Screen::RegisterEntity => "Register",
            Screen::ViewMoreDonors => "Donors",
            Screen::ViewMoreReceivers => "Receivers",
            Screen::ReceiverDetails => "Receiver Details",
            Screen::FoodDonation => "Donate Food",
            Screen::AvailableFoodItems => "Available Food",
        }
    }

    /// The actions this screen may emit. Each one has a rule in the
    /// transition table for this screen.
    pub fn actions(&self) -> &'static [ActionKind] {
        use ActionKind as A;
        match self {
            Screen::Welcome => &[A::Next],
            Screen::Login => &[A::SubmitLogin, A::GoToRegister, A::ForgotPassword],
            Screen::Register => &[A::SubmitRegistration, A::GoToLogin],
            Screen::ForgotPassword => &[A::SendOtp, A::GoBack],
            Screen::Otp => &[A::EnterDigit, A::Verify, A::Resend, A::GoBack],
            Screen::ResetPassword => &[A::ConfirmReset],
            Screen::Home => &[
                A::Logout,
                A::SettingsPress,
                A::ActivityPress,
                A::AccountPress,
                A::RegisterPress,
                A::ShopRegisterPress,
                A::NgoRegisterPress,
                A::ViewMoreDonorsPress,
                A::ViewMoreReceiversPress,
                A::DonateFoodPress,
            ],
            Screen::Settings => &[A::ToggleDarkMode, A::GoBack],
            Screen::Activity | Screen::Account | Screen::AvailableFoodItems => &[A::GoBack],
            Screen::RegisterEntity => &[
                A::SelectEntityKind,
                A::DonorSubmit,
                A::ReceiverSubmit,
                A::GoBack,
            ],
            Screen::ViewMoreDonors => &[A::AvailablePress, A::GoBack],
            Screen::ViewMoreReceivers => &[A::ViewDetails, A::GoBack],
            Screen::ReceiverDetails => &[A::GoBack],
            Screen::FoodDonation => &[A::Donate, A::GoBack],
        }
    }

    pub fn offers(&self, action: ActionKind) -> bool {
        self.actions().contains(&action)
    }

    /// Cut the slice of `session` this screen is rendered with.
    pub fn render(&self, session: &SessionState) -> ScreenProps {
        match self {
            Screen::Welcome => ScreenProps::Welcome,
            Screen::Login => ScreenProps::Login,
            Screen::Register => ScreenProps::Register,
            Screen::ForgotPassword => ScreenProps::ForgotPassword,
            Screen::Otp => ScreenProps::Otp {
                contact: session.pending_contact().to_string(),
                digits: session.otp_digits().clone(),
                resend_cooldown_secs: session.resend_cooldown_secs(),
                can_resend: session.can_resend(),
            },
            Screen::ResetPassword => ScreenProps::ResetPassword {
                contact: session.pending_contact().to_string(),
            },
            Screen::Home => ScreenProps::Home {
                donor_count: session.donors().len(),
                receiver_count: session.receivers().len(),
                listing_count: session.food_listings().len(),
            },
            Screen::Settings => ScreenProps::Settings,
            Screen::Activity => ScreenProps::Activity {
                listings: session.food_listings().to_vec(),
            },
            Screen::Account => ScreenProps::Account {
                contact: session.pending_contact().to_string(),
                is_authenticated: session.is_authenticated(),
            },
            Screen::RegisterEntity => ScreenProps::RegisterEntity {
                form: session.entity_form(),
            },
            Screen::ViewMoreDonors => ScreenProps::ViewMoreDonors {
                donors: session.donors().to_vec(),
            },
            Screen::ViewMoreReceivers => ScreenProps::ViewMoreReceivers {
                receivers: session
                    .receivers()
                    .iter()
                    .enumerate()
                    .map(|(i, r)| ReceiverEntry {
                        id: ReceiverId(i),
                        receiver: r.clone(),
                    })
                    .collect(),
            },
            Screen::ReceiverDetails => ScreenProps::ReceiverDetails {
                receiver: session.selected_receiver().and_then(|id| {
                    session.receiver(id).map(|r| ReceiverEntry {
                        id,
                        receiver: r.clone(),
                    })
                }),
            },
            Screen::FoodDonation => ScreenProps::FoodDonation,
            Screen::AvailableFoodItems => ScreenProps::AvailableFoodItems {
                listings: session.food_listings().to_vec(),
            },
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A receiver together with the id a renderer passes back in `ViewDetails`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReceiverEntry {
    pub id: ReceiverId,
    #[serde(flatten)]
    pub receiver: ReceiverRecord,
}

/// Per-screen render data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenProps {
    Welcome,
    Login,
    Register,
    ForgotPassword,
    Otp {
        contact: String,
        digits: OtpDigits,
        resend_cooldown_secs: u8,
        can_resend: bool,
    },
    ResetPassword {
        contact: String,
    },
    Home {
        donor_count: usize,
        receiver_count: usize,
        listing_count: usize,
    },
    Settings,
    Activity {
        listings: Vec<FoodListingRecord>,
    },
    Account {
        contact: String,
        is_authenticated: bool,
    },
    RegisterEntity {
        form: EntityKind,
    },
    ViewMoreDonors {
        donors: Vec<DonorRecord>,
    },
    ViewMoreReceivers {
        receivers: Vec<ReceiverEntry>,
    },
    ReceiverDetails {
        receiver: Option<ReceiverEntry>,
    },
    FoodDonation,
    AvailableFoodItems {
        listings: Vec<FoodListingRecord>,
    },
}

/// Everything the renderer needs to draw the current screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub screen: Screen,
    pub title: &'static str,
    pub is_dark_mode: bool,
    pub actions: &'static [ActionKind],
    pub props: ScreenProps,
}

impl ScreenView {
    pub fn of(screen: Screen, session: &SessionState) -> Self {
        Self {
            screen,
            title: screen.title(),
            is_dark_mode: session.is_dark_mode(),
            actions: screen.actions(),
            props: screen.render(session),
        }
    }
}
