#![allow(dead_code)]

use crate::navigator::Navigator;
use crate::screens::Screen;
use crate::session::{SessionState, OTP_LENGTH, RESEND_COOLDOWN_SECS};

/// INV-1: the OTP buffer always has four slots of at most one character.
pub fn assert_otp_digits_shape(session: &SessionState) {
    let slots = session.otp_digits().slots();
    assert_eq!(slots.len(), OTP_LENGTH, "INV-1 violated: {} OTP slots", slots.len());
    for (i, slot) in slots.iter().enumerate() {
        assert!(
            slot.chars().count() <= 1,
            "INV-1 violated: OTP slot {i} holds {slot:?}"
        );
    }
}

/// INV-2: the resend cooldown never leaves `0..=20`.
pub fn assert_cooldown_in_range(session: &SessionState) {
    assert!(
        session.resend_cooldown_secs() <= RESEND_COOLDOWN_SECS,
        "INV-2 violated: cooldown is {}",
        session.resend_cooldown_secs()
    );
}

/// INV-3: append-only lists never shrink and keep their existing prefix.
pub fn assert_lists_append_only(before: &SessionState, after: &SessionState) {
    fn prefix<T: PartialEq + std::fmt::Debug>(name: &str, before: &[T], after: &[T]) {
        assert!(
            after.len() >= before.len(),
            "INV-3 violated: {name} shrank from {} to {}",
            before.len(),
            after.len()
        );
        assert_eq!(
            &after[..before.len()],
            before,
            "INV-3 violated: {name} rewrote existing entries"
        );
    }
    prefix("donors", before.donors(), after.donors());
    prefix("receivers", before.receivers(), after.receivers());
    prefix("food_listings", before.food_listings(), after.food_listings());
}

/// INV-4: a selected receiver always resolves.
pub fn assert_selected_receiver_resolves(session: &SessionState) {
    if let Some(id) = session.selected_receiver() {
        assert!(
            session.receiver(id).is_some(),
            "INV-4 violated: selected receiver {id:?} does not exist"
        );
    }
}

/// INV-5: a countdown lease is held exactly while the current screen is Otp.
pub fn assert_lease_matches_screen(nav: &Navigator) {
    assert_eq!(
        nav.countdown().lease().is_some(),
        nav.current() == Screen::Otp,
        "INV-5 violated: lease {:?} on screen {}",
        nav.countdown().lease(),
        nav.current()
    );
}

/// Run all invariants that need only the navigator.
pub fn assert_all_navigator_invariants(nav: &Navigator) {
    assert_otp_digits_shape(nav.session());
    assert_cooldown_in_range(nav.session());
    assert_selected_receiver_resolves(nav.session());
    assert_lease_matches_screen(nav);
}
