//! # Session Store
//!
//! The single owned record of everything that must survive a screen
//! transition.
//!
//! | Field                  | Type                      | Written by                          |
//! |------------------------|---------------------------|-------------------------------------|
//! | `pending_contact`      | `String`                  | Login / Register / ForgotPassword   |
//! | `otp_digits`           | [`OtpDigits`]             | Otp input handler                   |
//! | `resend_cooldown_secs` | `u8` (`0..=20`)           | Countdown ticks, send / resend      |
//! | `otp_flow`             | `Option<OtpFlow>`         | Register / ForgotPassword           |
//! | `entity_form`          | [`EntityKind`]            | Home, RegisterEntity                |
//! | `donors`               | `Vec<DonorRecord>`        | RegisterEntity (append-only)        |
//! | `receivers`            | `Vec<ReceiverRecord>`     | RegisterEntity (append-only)        |
//! | `food_listings`        | `Vec<FoodListingRecord>`  | FoodDonation (append-only)          |
//! | `selected_receiver`    | `Option<ReceiverId>`      | ViewMoreReceivers / ReceiverDetails |
//! | `is_dark_mode`         | `bool`                    | Settings                            |
//! | `is_authenticated`     | `bool`                    | Login / Otp / Home                  |
//!
//! Fields are read through accessors and written only by applying a
//! [`SessionPatch`] produced by the transition table, or by a countdown
//! tick. There is no way to remove an entry from an append-only list.

use serde::{Deserialize, Serialize};

use crate::errors::SessionDecodeError;
use crate::types::{
    DonorRecord, EntityKind, FoodListingRecord, OtpFlow, ReceiverId, ReceiverRecord,
};
use crate::validators::single_char_or_empty;

// ── Constants ────────────────────────────────────────────────────────

/// Number of OTP input slots.
pub const OTP_LENGTH: usize = 4;

/// Seconds before a verification code may be re-sent.
pub const RESEND_COOLDOWN_SECS: u8 = 20;

// ── OTP digits ───────────────────────────────────────────────────────

/// The four OTP input slots. Each slot is empty or holds exactly one
/// character; the length is fixed by the type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[String; OTP_LENGTH]")]
pub struct OtpDigits([String; OTP_LENGTH]);

impl OtpDigits {
    /// Build from four slots, or `None` if any slot holds more than one character.
    pub fn try_from_slots(slots: [&str; OTP_LENGTH]) -> Option<Self> {
        if !slots.iter().all(|s| single_char_or_empty(s)) {
            return None;
        }
        Some(Self(slots.map(String::from)))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Write one slot. Returns `false` (and changes nothing) when the index
    /// is out of range or the value is longer than one character.
    pub fn set(&mut self, index: usize, value: &str) -> bool {
        if !single_char_or_empty(value) {
            return false;
        }
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|d| !d.is_empty())
    }

    pub fn clear(&mut self) {
        self.0 = Default::default();
    }

    pub fn slots(&self) -> &[String] {
        &self.0
    }

    /// The entered code with empty slots skipped.
    pub fn code(&self) -> String {
        self.0.concat()
    }
}

impl TryFrom<[String; OTP_LENGTH]> for OtpDigits {
    type Error = SessionDecodeError;

    fn try_from(slots: [String; OTP_LENGTH]) -> Result<Self, Self::Error> {
        Self::try_from_slots(slots.each_ref().map(String::as_str))
            .ok_or(SessionDecodeError::InvalidOtpSlot)
    }
}

// ── Patches ──────────────────────────────────────────────────────────

/// One mutation of the session, produced by the transition table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionChange {
    SetPendingContact(String),
    ClearPendingContact,
    /// A code was "sent": remember the flow, clear the slots, restart the cooldown.
    BeginOtp(OtpFlow),
    SetOtpDigit { index: usize, value: String },
    /// A code was re-sent: clear the slots, restart the cooldown.
    RestartCooldown,
    /// Leave the OTP flow: forget the flow and clear the slots.
    EndOtp,
    SetAuthenticated(bool),
    SetEntityForm(EntityKind),
    AppendDonor(DonorRecord),
    AppendReceiver(ReceiverRecord),
    AppendListing(FoodListingRecord),
    SelectReceiver(Option<ReceiverId>),
    ToggleDarkMode,
}

/// An ordered list of [`SessionChange`]s applied together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionPatch {
    changes: Vec<SessionChange>,
}

impl SessionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: SessionChange) {
        self.changes.push(change);
    }

    pub fn changes(&self) -> &[SessionChange] {
        &self.changes
    }
}

impl From<Vec<SessionChange>> for SessionPatch {
    fn from(changes: Vec<SessionChange>) -> Self {
        Self { changes }
    }
}

// ── Session state ────────────────────────────────────────────────────

/// In-memory session, reset to defaults on every process start.
///
/// Deserializing re-checks what [`SessionState::apply`] otherwise
/// guarantees: single-character OTP slots, a cooldown within
/// `0..=RESEND_COOLDOWN_SECS` and a selected receiver that exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct SessionState {
    pending_contact: String,
    otp_digits: OtpDigits,
    resend_cooldown_secs: u8,
    otp_flow: Option<OtpFlow>,
    entity_form: EntityKind,
    donors: Vec<DonorRecord>,
    receivers: Vec<ReceiverRecord>,
    food_listings: Vec<FoodListingRecord>,
    selected_receiver: Option<ReceiverId>,
    is_dark_mode: bool,
    is_authenticated: bool,
}

/// Unchecked wire form of [`SessionState`].
#[derive(Deserialize)]
struct SessionSnapshot {
    pending_contact: String,
    otp_digits: OtpDigits,
    resend_cooldown_secs: u8,
    otp_flow: Option<OtpFlow>,
    entity_form: EntityKind,
    donors: Vec<DonorRecord>,
    receivers: Vec<ReceiverRecord>,
    food_listings: Vec<FoodListingRecord>,
    selected_receiver: Option<ReceiverId>,
    is_dark_mode: bool,
    is_authenticated: bool,
}

impl TryFrom<SessionSnapshot> for SessionState {
    type Error = SessionDecodeError;

    fn try_from(raw: SessionSnapshot) -> Result<Self, Self::Error> {
        if raw.resend_cooldown_secs > RESEND_COOLDOWN_SECS {
            return Err(SessionDecodeError::CooldownOutOfRange(
                raw.resend_cooldown_secs,
            ));
        }
        if let Some(ReceiverId(index)) = raw.selected_receiver {
            if index >= raw.receivers.len() {
                return Err(SessionDecodeError::UnknownSelectedReceiver(index));
            }
        }
        Ok(Self {
            pending_contact: raw.pending_contact,
            otp_digits: raw.otp_digits,
            resend_cooldown_secs: raw.resend_cooldown_secs,
            otp_flow: raw.otp_flow,
            entity_form: raw.entity_form,
            donors: raw.donors,
            receivers: raw.receivers,
            food_listings: raw.food_listings,
            selected_receiver: raw.selected_receiver,
            is_dark_mode: raw.is_dark_mode,
            is_authenticated: raw.is_authenticated,
        })
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_contact(&self) -> &str {
        &self.pending_contact
    }

    pub fn otp_digits(&self) -> &OtpDigits {
        &self.otp_digits
    }

    pub fn resend_cooldown_secs(&self) -> u8 {
        self.resend_cooldown_secs
    }

    pub fn can_resend(&self) -> bool {
        self.resend_cooldown_secs == 0
    }

    pub fn otp_flow(&self) -> Option<OtpFlow> {
        self.otp_flow
    }

    pub fn entity_form(&self) -> EntityKind {
        self.entity_form
    }

    pub fn donors(&self) -> &[DonorRecord] {
        &self.donors
    }

    pub fn receivers(&self) -> &[ReceiverRecord] {
        &self.receivers
    }

    pub fn food_listings(&self) -> &[FoodListingRecord] {
        &self.food_listings
    }

    pub fn selected_receiver(&self) -> Option<ReceiverId> {
        self.selected_receiver
    }

    pub fn receiver(&self, id: ReceiverId) -> Option<&ReceiverRecord> {
        self.receivers.get(id.0)
    }

    /// The receiver currently opened on `ReceiverDetails`, if any.
    pub fn selected_receiver_record(&self) -> Option<&ReceiverRecord> {
        self.selected_receiver.and_then(|id| self.receiver(id))
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Apply every change of `patch` in order.
    ///
    /// Patches come from the transition table, which has already validated
    /// them against this session.
    pub fn apply(&mut self, patch: SessionPatch) {
        for change in patch.changes {
            self.apply_change(change);
        }
    }

    fn apply_change(&mut self, change: SessionChange) {
        match change {
            SessionChange::SetPendingContact(contact) => self.pending_contact = contact,
            SessionChange::ClearPendingContact => self.pending_contact.clear(),
            SessionChange::BeginOtp(flow) => {
                self.otp_flow = Some(flow);
                self.otp_digits.clear();
                self.resend_cooldown_secs = RESEND_COOLDOWN_SECS;
            }
            SessionChange::SetOtpDigit { index, value } => {
                let written = self.otp_digits.set(index, &value);
                debug_assert!(written, "unvalidated OTP digit reached the session");
            }
            SessionChange::RestartCooldown => {
                self.otp_digits.clear();
                self.resend_cooldown_secs = RESEND_COOLDOWN_SECS;
            }
            SessionChange::EndOtp => {
                self.otp_flow = None;
                self.otp_digits.clear();
            }
            SessionChange::SetAuthenticated(value) => self.is_authenticated = value,
            SessionChange::SetEntityForm(kind) => self.entity_form = kind,
            SessionChange::AppendDonor(donor) => self.donors.push(donor),
            SessionChange::AppendReceiver(receiver) => self.receivers.push(receiver),
            SessionChange::AppendListing(listing) => self.food_listings.push(listing),
            SessionChange::SelectReceiver(id) => self.selected_receiver = id,
            SessionChange::ToggleDarkMode => self.is_dark_mode = !self.is_dark_mode,
        }
    }

    /// One second of resend cooldown. Returns `true` if the counter moved;
    /// at 0 it stays at 0.
    pub(crate) fn tick_cooldown(&mut self) -> bool {
        match self.resend_cooldown_secs.checked_sub(1) {
            Some(next) => {
                self.resend_cooldown_secs = next;
                true
            }
            None => false,
        }
    }
}
