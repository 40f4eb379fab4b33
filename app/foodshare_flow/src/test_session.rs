use crate::session::{SessionChange, SessionPatch};
use crate::{
    DonorRecord, EntityKind, OtpDigits, OtpFlow, ReceiverId, ReceiverRecord, SessionState,
    RESEND_COOLDOWN_SECS,
};

#[test]
fn test_default_session() {
    let session = SessionState::new();
    assert_eq!(session.pending_contact(), "");
    assert_eq!(session.otp_digits().slots().len(), 4);
    assert_eq!(session.resend_cooldown_secs(), 0);
    assert_eq!(session.otp_flow(), None);
    assert_eq!(session.entity_form(), EntityKind::Donor);
    assert!(session.donors().is_empty());
    assert!(!session.is_dark_mode());
    assert!(!session.is_authenticated());
}

#[test]
fn test_patch_applies_in_order() {
    let mut session = SessionState::new();
    let patch = SessionPatch::from(vec![
        SessionChange::SetPendingContact("first".to_string()),
        SessionChange::SetPendingContact("second".to_string()),
        SessionChange::ToggleDarkMode,
        SessionChange::ToggleDarkMode,
        SessionChange::ToggleDarkMode,
    ]);
    session.apply(patch);
    assert_eq!(session.pending_contact(), "second");
    assert!(session.is_dark_mode());
}

#[test]
fn test_begin_otp_resets_digits_and_cooldown() {
    let mut session = SessionState::new();
    session.apply(SessionPatch::from(vec![
        SessionChange::BeginOtp(OtpFlow::Register),
        SessionChange::SetOtpDigit {
            index: 1,
            value: "8".to_string(),
        },
    ]));
    assert_eq!(session.otp_digits().code(), "8");

    session.apply(SessionPatch::from(vec![SessionChange::BeginOtp(
        OtpFlow::ForgotPassword,
    )]));
    assert_eq!(session.otp_digits().code(), "");
    assert_eq!(session.otp_flow(), Some(OtpFlow::ForgotPassword));
    assert_eq!(session.resend_cooldown_secs(), RESEND_COOLDOWN_SECS);
}

#[test]
fn test_end_otp_clears_flow() {
    let mut session = SessionState::new();
    session.apply(SessionPatch::from(vec![
        SessionChange::BeginOtp(OtpFlow::Register),
        SessionChange::EndOtp,
    ]));
    assert_eq!(session.otp_flow(), None);
    assert!(!session.otp_digits().is_complete());
}

#[test]
fn test_tick_floors_at_zero() {
    let mut session = SessionState::new();
    assert!(!session.tick_cooldown());
    assert_eq!(session.resend_cooldown_secs(), 0);

    session.apply(SessionPatch::from(vec![SessionChange::RestartCooldown]));
    assert!(session.tick_cooldown());
    assert_eq!(session.resend_cooldown_secs(), RESEND_COOLDOWN_SECS - 1);
}

#[test]
fn test_receiver_lookup() {
    let mut session = SessionState::new();
    session.apply(SessionPatch::from(vec![
        SessionChange::AppendReceiver(ReceiverRecord {
            ngo_name: "Hope Kitchen".to_string(),
            ..Default::default()
        }),
        SessionChange::SelectReceiver(Some(ReceiverId(0))),
    ]));
    assert_eq!(
        session.selected_receiver_record().map(|r| r.ngo_name.as_str()),
        Some("Hope Kitchen")
    );
    assert!(session.receiver(ReceiverId(1)).is_none());
}

#[test]
fn test_otp_digits_slots() {
    let mut digits = OtpDigits::try_from_slots(["1", "2", "3", ""]).unwrap();
    assert!(!digits.is_complete());
    assert!(!digits.set(4, "9"));
    assert!(!digits.set(3, "99"));
    assert!(digits.set(3, "4"));
    assert!(digits.is_complete());
    assert_eq!(digits.code(), "1234");

    assert!(OtpDigits::try_from_slots(["12", "", "", ""]).is_none());
}

#[test]
fn test_session_serializes_for_renderers() {
    let mut session = SessionState::new();
    session.apply(SessionPatch::from(vec![SessionChange::AppendDonor(DonorRecord {
        shop_name: "Corner Bakery".to_string(),
        ..Default::default()
    })]));
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["donors"][0]["shop_name"], "Corner Bakery");
    assert_eq!(json["otp_digits"], serde_json::json!(["", "", "", ""]));
    assert_eq!(json["entity_form"], "donor");
}

fn session_with_receiver() -> SessionState {
    let mut session = SessionState::new();
    session.apply(SessionPatch::from(vec![
        SessionChange::AppendReceiver(ReceiverRecord {
            ngo_name: "Hope Kitchen".to_string(),
            ..Default::default()
        }),
        SessionChange::SelectReceiver(Some(ReceiverId(0))),
        SessionChange::BeginOtp(OtpFlow::Register),
    ]));
    session
}

#[test]
fn test_session_restores_from_its_own_json() {
    let session = session_with_receiver();
    let json = serde_json::to_string(&session).unwrap();
    let restored: SessionState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn test_session_json_breaking_invariants_is_rejected() {
    let valid = serde_json::to_value(session_with_receiver()).unwrap();

    let mut long_slot = valid.clone();
    long_slot["otp_digits"] = serde_json::json!(["12", "", "", ""]);
    let err = serde_json::from_value::<SessionState>(long_slot).unwrap_err();
    assert!(err.to_string().contains("single character"), "{err}");

    let mut cooldown = valid.clone();
    cooldown["resend_cooldown_secs"] = serde_json::json!(250);
    let err = serde_json::from_value::<SessionState>(cooldown).unwrap_err();
    assert!(err.to_string().contains("cooldown 250"), "{err}");

    let mut dangling = valid;
    dangling["selected_receiver"] = serde_json::json!(7);
    let err = serde_json::from_value::<SessionState>(dangling).unwrap_err();
    assert!(err.to_string().contains("receiver 7"), "{err}");
}

#[test]
fn test_otp_digits_json_rejects_multi_char_slot() {
    let digits: OtpDigits = serde_json::from_str(r#"["1","","3",""]"#).unwrap();
    assert_eq!(digits.get(2), Some("3"));
    assert!(serde_json::from_str::<OtpDigits>(r#"["1","","34",""]"#).is_err());
}
