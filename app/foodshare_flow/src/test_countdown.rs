use crate::invariants::{assert_all_navigator_invariants, assert_lease_matches_screen};
use crate::{Action, Navigator, Screen, TimerCommand, RESEND_COOLDOWN_SECS};

fn at_forgot_password() -> Navigator {
    let mut nav = Navigator::new();
    nav.dispatch(&Action::Next);
    nav.dispatch(&Action::ForgotPassword);
    nav
}

fn send_otp(nav: &mut Navigator) -> u64 {
    let result = nav.dispatch(&Action::SendOtp {
        contact: "asha@example.org".to_string(),
    });
    match result.timer {
        Some(TimerCommand::Start { generation }) => generation,
        other => panic!("expected a timer start, got {other:?}"),
    }
}

#[test]
fn test_entering_otp_starts_timer() {
    let mut nav = at_forgot_password();
    assert_eq!(nav.countdown().lease(), None);

    let generation = send_otp(&mut nav);
    assert_eq!(nav.countdown().lease(), Some(generation));
    assert_lease_matches_screen(&nav);
}

#[test]
fn test_cooldown_decreases_one_per_tick_and_floors() {
    let mut nav = at_forgot_password();
    let generation = send_otp(&mut nav);

    let mut expected = RESEND_COOLDOWN_SECS;
    while expected > 0 {
        assert!(nav.tick(generation));
        expected -= 1;
        assert_eq!(nav.session().resend_cooldown_secs(), expected);
    }

    assert!(!nav.tick(generation));
    assert_eq!(nav.session().resend_cooldown_secs(), 0);
    assert!(nav.session().can_resend());
}

#[test]
fn test_leaving_otp_stops_timer_and_freezes_cooldown() {
    let mut nav = at_forgot_password();
    let generation = send_otp(&mut nav);
    for _ in 0..5 {
        nav.tick(generation);
    }
    assert_eq!(nav.session().resend_cooldown_secs(), 15);

    let result = nav.dispatch(&Action::GoBack);
    assert_eq!(result.timer, Some(TimerCommand::Stop { generation }));
    assert_eq!(nav.current(), Screen::ForgotPassword);

    // A ticker that was never cancelled keeps firing; none of it lands.
    for _ in 0..5 {
        assert!(!nav.tick(generation));
    }
    assert_eq!(nav.session().resend_cooldown_secs(), 15);
    assert_all_navigator_invariants(&nav);
}

#[test]
fn test_stale_generation_after_reentry_is_dropped() {
    let mut nav = at_forgot_password();
    let first = send_otp(&mut nav);
    nav.dispatch(&Action::GoBack);

    let second = send_otp(&mut nav);
    assert_ne!(first, second);
    assert_eq!(nav.session().resend_cooldown_secs(), RESEND_COOLDOWN_SECS);

    assert!(!nav.tick(first));
    assert_eq!(nav.session().resend_cooldown_secs(), RESEND_COOLDOWN_SECS);

    assert!(nav.tick(second));
    assert_eq!(
        nav.session().resend_cooldown_secs(),
        RESEND_COOLDOWN_SECS - 1
    );
}

#[test]
fn test_verify_releases_lease() {
    let mut nav = at_forgot_password();
    let generation = send_otp(&mut nav);
    for (i, d) in ["1", "2", "3", "4"].into_iter().enumerate() {
        let result = nav.dispatch(&Action::EnterDigit {
            index: i,
            value: d.to_string(),
        });
        assert_eq!(result.timer, None);
    }

    let result = nav.dispatch(&Action::Verify);
    assert_eq!(nav.current(), Screen::ResetPassword);
    assert_eq!(result.timer, Some(TimerCommand::Stop { generation }));
    assert!(!nav.tick(generation));
    assert_lease_matches_screen(&nav);
}

#[test]
fn test_rejected_action_on_otp_keeps_lease() {
    let mut nav = at_forgot_password();
    let generation = send_otp(&mut nav);

    let result = nav.dispatch(&Action::Verify);
    assert!(result.outcome.is_ignored());
    assert_eq!(result.timer, None);
    assert!(nav.tick(generation));
}
