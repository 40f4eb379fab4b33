//! # Transition Table
//!
//! `(current screen, action, session) → (next screen, session patch)`.
//!
//! [`transition`] is pure: it reads the session to evaluate gates but never
//! writes it. The outer match is over [`Screen`] with no wildcard, so a new
//! screen does not compile until it has a rule set. Within a screen, any
//! action the screen does not offer is [`FlowError::NotOffered`].
//!
//! Gated actions that fail their validator return [`FlowError::Rejected`];
//! the caller treats both errors as a no-op.

use crate::action::Action;
use crate::errors::{FlowError, Rejection, Result};
use crate::screens::Screen;
use crate::session::{SessionChange, SessionPatch, SessionState, OTP_LENGTH};
use crate::types::{
    DonationForm, DonorRecord, EntityKind, FoodListingRecord, OtpFlow, ReceiverRecord,
};
use crate::validators::{
    all_non_empty, non_empty, otp_complete, parse_expiry_date, passwords_match,
    positive_quantity, single_char_or_empty,
};

/// The result of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub next: Screen,
    pub patch: SessionPatch,
}

impl Step {
    fn to(next: Screen) -> Self {
        Self {
            next,
            patch: SessionPatch::new(),
        }
    }

    fn with(mut self, change: SessionChange) -> Self {
        self.patch.push(change);
        self
    }
}

fn require(ok: bool, rejection: Rejection) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(FlowError::Rejected(rejection))
    }
}

fn not_offered(screen: Screen, action: &Action) -> FlowError {
    FlowError::NotOffered {
        screen,
        action: action.kind(),
    }
}

/// Compute the step for `action` dispatched on `current`.
pub fn transition(current: Screen, action: &Action, session: &SessionState) -> Result<Step> {
    match current {
        Screen::Welcome => welcome(action),
        Screen::Login => login(action),
        Screen::Register => register(action),
        Screen::ForgotPassword => forgot_password(action),
        Screen::Otp => otp(action, session),
        Screen::ResetPassword => reset_password(action),
        Screen::Home => home(action),
        Screen::Settings => settings(action),
        Screen::Activity | Screen::Account | Screen::AvailableFoodItems => {
            back_to_home(current, action)
        }
        Screen::RegisterEntity => register_entity(action),
        Screen::ViewMoreDonors => view_more_donors(action),
        Screen::ViewMoreReceivers => view_more_receivers(action, session),
        Screen::ReceiverDetails => receiver_details(action),
        Screen::FoodDonation => food_donation(action),
    }
}

// ─────────────────────────────────────────────────────────
// Auth flow
// ─────────────────────────────────────────────────────────

fn welcome(action: &Action) -> Result<Step> {
    match action {
        Action::Next => Ok(Step::to(Screen::Login)),
        other => Err(not_offered(Screen::Welcome, other)),
    }
}

fn login(action: &Action) -> Result<Step> {
    match action {
        // Login goes straight to Home; OTP is only required after
        // Register and ForgotPassword.
        Action::SubmitLogin { contact, password } => {
            require(
                all_non_empty(&[contact.as_str(), password.as_str()]),
                Rejection::EmptyField,
            )?;
            Ok(Step::to(Screen::Home)
                .with(SessionChange::SetPendingContact(contact.clone()))
                .with(SessionChange::SetAuthenticated(true)))
        }
        Action::GoToRegister => Ok(Step::to(Screen::Register)),
        Action::ForgotPassword => Ok(Step::to(Screen::ForgotPassword)),
        other => Err(not_offered(Screen::Login, other)),
    }
}

fn register(action: &Action) -> Result<Step> {
    match action {
        Action::SubmitRegistration {
            name,
            contact,
            password,
            confirm,
        } => {
            require(
                all_non_empty(&[
                    name.as_str(),
                    contact.as_str(),
                    password.as_str(),
                    confirm.as_str(),
                ]),
                Rejection::EmptyField,
            )?;
            require(passwords_match(password, confirm), Rejection::PasswordMismatch)?;
            Ok(Step::to(Screen::Otp)
                .with(SessionChange::SetPendingContact(contact.clone()))
                .with(SessionChange::BeginOtp(OtpFlow::Register)))
        }
        Action::GoToLogin => Ok(Step::to(Screen::Login)),
        other => Err(not_offered(Screen::Register, other)),
    }
}

fn forgot_password(action: &Action) -> Result<Step> {
    match action {
        Action::SendOtp { contact } => {
            require(non_empty(contact), Rejection::EmptyField)?;
            Ok(Step::to(Screen::Otp)
                .with(SessionChange::SetPendingContact(contact.clone()))
                .with(SessionChange::BeginOtp(OtpFlow::ForgotPassword)))
        }
        Action::GoBack => Ok(Step::to(Screen::Login)),
        other => Err(not_offered(Screen::ForgotPassword, other)),
    }
}

fn otp(action: &Action, session: &SessionState) -> Result<Step> {
    match action {
        Action::EnterDigit { index, value } => {
            require(
                *index < OTP_LENGTH && single_char_or_empty(value),
                Rejection::InvalidOtpInput,
            )?;
            Ok(Step::to(Screen::Otp).with(SessionChange::SetOtpDigit {
                index: *index,
                value: value.clone(),
            }))
        }
        // The code itself is never compared: nothing real was sent.
        Action::Verify => {
            require(otp_complete(session.otp_digits()), Rejection::IncompleteOtp)?;
            match session.otp_flow() {
                Some(OtpFlow::Register) => Ok(Step::to(Screen::Home)
                    .with(SessionChange::EndOtp)
                    .with(SessionChange::SetAuthenticated(true))),
                Some(OtpFlow::ForgotPassword) => {
                    Ok(Step::to(Screen::ResetPassword).with(SessionChange::EndOtp))
                }
                None => Err(Rejection::MissingOtpFlow.into()),
            }
        }
        Action::Resend => {
            require(session.can_resend(), Rejection::CooldownActive)?;
            Ok(Step::to(Screen::Otp).with(SessionChange::RestartCooldown))
        }
        Action::GoBack => {
            let origin = match session.otp_flow() {
                Some(OtpFlow::Register) => Screen::Register,
                Some(OtpFlow::ForgotPassword) => Screen::ForgotPassword,
                None => Screen::Login,
            };
            Ok(Step::to(origin).with(SessionChange::EndOtp))
        }
        other => Err(not_offered(Screen::Otp, other)),
    }
}

fn reset_password(action: &Action) -> Result<Step> {
    match action {
        Action::ConfirmReset {
            new_password,
            confirm,
        } => {
            require(
                all_non_empty(&[new_password.as_str(), confirm.as_str()]),
                Rejection::EmptyField,
            )?;
            require(
                passwords_match(new_password, confirm),
                Rejection::PasswordMismatch,
            )?;
            Ok(Step::to(Screen::Login).with(SessionChange::ClearPendingContact))
        }
        other => Err(not_offered(Screen::ResetPassword, other)),
    }
}

// ─────────────────────────────────────────────────────────
// Home and its children
// ─────────────────────────────────────────────────────────

fn home(action: &Action) -> Result<Step> {
    match action {
        Action::Logout => Ok(Step::to(Screen::Login)
            .with(SessionChange::SetAuthenticated(false))
            .with(SessionChange::SelectReceiver(None))),
        Action::SettingsPress => Ok(Step::to(Screen::Settings)),
        Action::ActivityPress => Ok(Step::to(Screen::Activity)),
        Action::AccountPress => Ok(Step::to(Screen::Account)),
        Action::RegisterPress => Ok(Step::to(Screen::RegisterEntity)),
        Action::ShopRegisterPress => Ok(Step::to(Screen::RegisterEntity)
            .with(SessionChange::SetEntityForm(EntityKind::Donor))),
        Action::NgoRegisterPress => Ok(Step::to(Screen::RegisterEntity)
            .with(SessionChange::SetEntityForm(EntityKind::Receiver))),
        Action::ViewMoreDonorsPress => Ok(Step::to(Screen::ViewMoreDonors)),
        Action::ViewMoreReceiversPress => Ok(Step::to(Screen::ViewMoreReceivers)),
        Action::DonateFoodPress => Ok(Step::to(Screen::FoodDonation)),
        other => Err(not_offered(Screen::Home, other)),
    }
}

fn settings(action: &Action) -> Result<Step> {
    match action {
        Action::ToggleDarkMode => {
            Ok(Step::to(Screen::Settings).with(SessionChange::ToggleDarkMode))
        }
        Action::GoBack => Ok(Step::to(Screen::Home)),
        other => Err(not_offered(Screen::Settings, other)),
    }
}

fn back_to_home(current: Screen, action: &Action) -> Result<Step> {
    match action {
        Action::GoBack => Ok(Step::to(Screen::Home)),
        other => Err(not_offered(current, other)),
    }
}

fn register_entity(action: &Action) -> Result<Step> {
    match action {
        Action::SelectEntityKind { kind } => {
            Ok(Step::to(Screen::RegisterEntity).with(SessionChange::SetEntityForm(*kind)))
        }
        Action::DonorSubmit(donor) => {
            require(donor_complete(donor), Rejection::EmptyField)?;
            Ok(Step::to(Screen::Home).with(SessionChange::AppendDonor(donor.clone())))
        }
        Action::ReceiverSubmit(receiver) => {
            require(receiver_complete(receiver), Rejection::EmptyField)?;
            Ok(Step::to(Screen::Home).with(SessionChange::AppendReceiver(receiver.clone())))
        }
        Action::GoBack => Ok(Step::to(Screen::Home)),
        other => Err(not_offered(Screen::RegisterEntity, other)),
    }
}

fn donor_complete(donor: &DonorRecord) -> bool {
    all_non_empty(&[
        donor.shop_name.as_str(),
        donor.registration_number.as_str(),
        donor.opening_hours.as_str(),
        donor.location.as_str(),
    ])
}

/// Type, registration number and operating hours are optional on the NGO form.
fn receiver_complete(receiver: &ReceiverRecord) -> bool {
    all_non_empty(&[
        receiver.ngo_name.as_str(),
        receiver.email.as_str(),
        receiver.phone.as_str(),
        receiver.location.as_str(),
    ])
}

fn view_more_donors(action: &Action) -> Result<Step> {
    match action {
        Action::AvailablePress => Ok(Step::to(Screen::AvailableFoodItems)),
        Action::GoBack => Ok(Step::to(Screen::Home)),
        other => Err(not_offered(Screen::ViewMoreDonors, other)),
    }
}

fn view_more_receivers(action: &Action, session: &SessionState) -> Result<Step> {
    match action {
        Action::ViewDetails { receiver } => {
            require(
                session.receiver(*receiver).is_some(),
                Rejection::UnknownReceiver,
            )?;
            Ok(Step::to(Screen::ReceiverDetails)
                .with(SessionChange::SelectReceiver(Some(*receiver))))
        }
        Action::GoBack => Ok(Step::to(Screen::Home)),
        other => Err(not_offered(Screen::ViewMoreReceivers, other)),
    }
}

fn receiver_details(action: &Action) -> Result<Step> {
    match action {
        Action::GoBack => {
            Ok(Step::to(Screen::ViewMoreReceivers).with(SessionChange::SelectReceiver(None)))
        }
        other => Err(not_offered(Screen::ReceiverDetails, other)),
    }
}

fn food_donation(action: &Action) -> Result<Step> {
    match action {
        Action::Donate(form) => {
            let listing = listing_from_form(form)?;
            Ok(Step::to(Screen::ViewMoreDonors).with(SessionChange::AppendListing(listing)))
        }
        Action::GoBack => Ok(Step::to(Screen::Home)),
        other => Err(not_offered(Screen::FoodDonation, other)),
    }
}

fn listing_from_form(form: &DonationForm) -> Result<FoodListingRecord> {
    require(
        all_non_empty(&[form.food_items.as_str(), form.pickup_location.as_str()]),
        Rejection::EmptyField,
    )?;
    require(positive_quantity(form.quantity), Rejection::InvalidQuantity)?;
    let expiry_date =
        parse_expiry_date(&form.expiry_date).ok_or(Rejection::InvalidExpiryDate)?;

    Ok(FoodListingRecord {
        food_items: form.food_items.clone(),
        quantity: form.quantity,
        description: form.description.clone(),
        expiry_date,
        pickup_location: form.pickup_location.clone(),
        pickup_schedule: form.pickup_schedule.clone(),
        is_vegetarian: form.is_vegetarian,
        food_type: form.food_type.clone(),
        photos: form.photos.clone(),
    })
}
