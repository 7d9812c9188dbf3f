//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use base64::{Engine, engine::general_purpose::STANDARD};
use domain::{AudioMimeType, CompositeReply, DomainError, ProviderCredential, UserUtterance};
use proptest::prelude::*;
use secrecy::ExposeSecret;

mod composite_reply_tests {
    use super::*;

    proptest! {
        #[test]
        fn audio_base64_round_trips(audio in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let reply = CompositeReply::new("reply", audio.clone());
            let decoded = STANDARD.decode(reply.audio_base64()).unwrap();
            prop_assert_eq!(decoded, audio);
        }

        #[test]
        fn audio_base64_is_ascii(audio in proptest::collection::vec(any::<u8>(), 0..512)) {
            let reply = CompositeReply::new("reply", audio);
            prop_assert!(reply.audio_base64().is_ascii());
        }
    }
}

mod utterance_tests {
    use super::*;

    #[test]
    fn only_missing_or_empty_text_is_rejected() {
        assert_eq!(UserUtterance::parse(None), Err(DomainError::EmptyUtterance));
        assert_eq!(UserUtterance::parse(Some(String::new())), Err(DomainError::EmptyUtterance));
    }

    proptest! {
        #[test]
        fn any_non_empty_text_is_kept_as_sent(text in "[ \t\na-zA-Z0-9?!]{1,40}") {
            let utterance = UserUtterance::parse(Some(text.clone())).unwrap();
            prop_assert_eq!(utterance.as_str(), text.as_str());
        }
    }
}

mod credential_tests {
    use super::*;

    proptest! {
        #[test]
        fn credentials_are_kept_as_sent(key in "[ A-Za-z0-9_]{1,48}") {
            let credential = ProviderCredential::from_optional(Some(key.clone())).unwrap();
            prop_assert_eq!(credential.secret().expose_secret(), key.as_str());
        }
    }
}

mod audio_mime_type_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_audio_types_are_rejected(subtype in "[a-z]{1,12}") {
            let content_type = format!("text/{subtype}");
            prop_assert!(AudioMimeType::parse(&content_type).is_err());
        }

        #[test]
        fn parameters_never_change_the_result(param in "[a-z]{1,8}=[a-z0-9]{1,8}") {
            for mime in AudioMimeType::ALL {
                let declared = format!("{}; {param}", mime.as_str());
                prop_assert_eq!(AudioMimeType::parse(&declared), Ok(mime));
            }
        }
    }
}
