//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{InboundMessage, MessageKind, PhoneNumber, USER_JID_SUFFIX};
use proptest::prelude::*;

// ============================================================================
// PhoneNumber Property Tests
// ============================================================================

mod phone_number_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_blank_numbers_are_unchanged(raw in "\\+?[0-9]{5,15}") {
            let phone = PhoneNumber::new(raw.clone()).unwrap();
            prop_assert_eq!(phone.as_str(), raw.as_str());
            prop_assert_eq!(phone.to_string(), raw);
        }

        #[test]
        fn whitespace_only_is_rejected(raw in "[ \\t\\n]{0,10}") {
            prop_assert!(PhoneNumber::new(raw).is_err());
        }

        #[test]
        fn jid_user_part_is_extracted(digits in "[0-9]{8,15}") {
            let jid = format!("{digits}{USER_JID_SUFFIX}");
            let phone = PhoneNumber::from_jid(&jid).unwrap();
            prop_assert_eq!(phone.as_str(), digits.as_str());
        }

        #[test]
        fn device_suffix_is_dropped(digits in "[0-9]{8,15}", device in 0u8..100) {
            let jid = format!("{digits}:{device}{USER_JID_SUFFIX}");
            let phone = PhoneNumber::from_jid(&jid).unwrap();
            prop_assert_eq!(phone.as_str(), digits.as_str());
        }

        #[test]
        fn serde_roundtrip_preserves_value(raw in "[0-9]{8,15}(@s\\.whatsapp\\.net)?") {
            let phone = PhoneNumber::new(raw).unwrap();
            let json = serde_json::to_string(&phone).unwrap();
            let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, phone);
        }
    }
}

// ============================================================================
// InboundMessage Property Tests
// ============================================================================

mod inbound_message_tests {
    use super::*;

    proptest! {
        #[test]
        fn sender_and_text_are_carried(digits in "[0-9]{8,15}", text in ".{0,200}") {
            let message = InboundMessage::from_sender(PhoneNumber::new(digits.clone()).unwrap())
                .with_text(text.clone());
            prop_assert_eq!(message.sender.as_str(), digits.as_str());
            prop_assert_eq!(message.text.as_deref(), Some(text.as_str()));
            prop_assert!(!message.from_me);
        }
    }
}

// ============================================================================
// MessageKind Tests
// ============================================================================

mod message_kind_tests {
    use super::*;

    fn any_kind() -> impl Strategy<Value = MessageKind> {
        prop_oneof![
            Just(MessageKind::Text),
            Just(MessageKind::Document),
            Just(MessageKind::Audio),
            Just(MessageKind::Image),
            Just(MessageKind::Video),
        ]
    }

    proptest! {
        #[test]
        fn media_kinds_have_media_type(kind in any_kind()) {
            prop_assert_eq!(kind.is_media(), kind.media_type().is_some());
        }

        #[test]
        fn display_matches_serde(kind in any_kind()) {
            let json = serde_json::to_string(&kind).unwrap();
            prop_assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
