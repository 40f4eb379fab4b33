//! # Types
//!
//! Records created by the registration and donation forms, plus the small
//! identifier types threaded between screens.
//!
//! ## Design decisions
//!
//! ### Registered entities are immutable
//!
//! [`DonorRecord`], [`ReceiverRecord`] and [`FoodListingRecord`] are created
//! once on submit and never edited. The session only ever appends them, so
//! a [`ReceiverId`] (a position in the receivers list) stays valid for the
//! lifetime of the session.
//!
//! ### OTP flows
//!
//! [`OtpFlow`] records which screen sent the user to `Otp`:
//!
//! ```text
//! Register ───────► Otp ──► Home
//! ForgotPassword ─► Otp ──► ResetPassword ──► Login
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which flow led the user to the OTP screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpFlow {
    /// New account; a verified code lands on `Home`.
    Register,
    /// Password recovery; a verified code lands on `ResetPassword`.
    ForgotPassword,
}

/// Tab shown on the `RegisterEntity` screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Shop / restaurant donating surplus food.
    #[default]
    Donor,
    /// NGO receiving food.
    Receiver,
}

/// Weak reference to a receiver: its position in the session's receivers list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiverId(pub usize);

/// Reference to a locally picked image. Nothing is uploaded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

/// A registered food donor (shop, restaurant, caterer).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorRecord {
    pub shop_name: String,
    pub registration_number: String,
    pub opening_hours: String,
    pub location: String,
}

/// A registered receiving NGO.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverRecord {
    pub ngo_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Organisation type (orphanage, shelter, community kitchen, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub registration_number: String,
    pub operating_hours: String,
}

/// Raw fields of the food-donation form, as typed by the user.
///
/// Converted into a [`FoodListingRecord`] once the form passes validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationForm {
    pub food_items: String,
    pub quantity: u32,
    #[serde(default)]
    pub description: String,
    /// `DD-MM-YYYY`.
    pub expiry_date: String,
    pub pickup_location: String,
    #[serde(default)]
    pub pickup_schedule: String,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub food_type: String,
    #[serde(default)]
    pub photos: Vec<ImageRef>,
}

/// A food listing published by the donation form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodListingRecord {
    pub food_items: String,
    /// Always at least 1.
    pub quantity: u32,
    pub description: String,
    pub expiry_date: NaiveDate,
    pub pickup_location: String,
    pub pickup_schedule: String,
    pub is_vegetarian: bool,
    pub food_type: String,
    pub photos: Vec<ImageRef>,
}
