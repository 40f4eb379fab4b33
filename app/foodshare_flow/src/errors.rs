//! Error types for the transition table.

use serde::Serialize;
use thiserror::Error;

use crate::action::ActionKind;
use crate::screens::Screen;

/// Which gate a rejected action failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("a required field is empty")]
    EmptyField,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("all OTP digits must be entered")]
    IncompleteOtp,
    #[error("OTP input must be a single character in slots 0-3")]
    InvalidOtpInput,
    #[error("no verification flow is in progress")]
    MissingOtpFlow,
    #[error("resend is still cooling down")]
    CooldownActive,
    #[error("no such receiver")]
    UnknownReceiver,
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("expiry date must be a valid DD-MM-YYYY date")]
    InvalidExpiryDate,
}

/// Why a dispatched action left the state machine untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FlowError {
    /// A gated action failed its validator. Normal user behaviour.
    #[error("rejected: {0}")]
    Rejected(Rejection),

    /// The screen never offers this action: a renderer bug.
    #[error("{action} is not offered by the {screen} screen")]
    NotOffered { screen: Screen, action: ActionKind },
}

impl From<Rejection> for FlowError {
    fn from(r: Rejection) -> Self {
        FlowError::Rejected(r)
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;

/// Why a serialized session could not be restored.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionDecodeError {
    #[error("OTP slots must each be empty or a single character")]
    InvalidOtpSlot,
    #[error("resend cooldown {0} exceeds {max}", max = crate::session::RESEND_COOLDOWN_SECS)]
    CooldownOutOfRange(u8),
    #[error("selected receiver {0} does not exist")]
    UnknownSelectedReceiver(usize),
}
