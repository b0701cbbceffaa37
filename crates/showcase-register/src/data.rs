//! Input fixtures for the registration suite
//!
//! Length strings, the special-character set, malformed emails, and the
//! password/complexity-message pairs the registration backend produces.

use uuid::Uuid;

/// Characters the form fields should tolerate (or reject) beyond plain text
pub const SPECIAL_CHARS: &str = "@#$%^*()_+{}|:\"<>?-[]\\;/`~";

/// Password accepted by every complexity rule
pub const VALID_PASSWORD: &str = "Valid1234!";

/// Valid-shaped password that intentionally differs from [`VALID_PASSWORD`]
pub const MISMATCH_PASSWORD: &str = "Mismatch1!";

/// Passwords violating one complexity rule each, with the exact message
/// the form shows for them
pub const INVALID_PASSWORDS: &[(&str, &str)] = &[
    ("short1A!", "Password must be at least 10 characters"),
    (
        "alllowercase1!",
        "The user password field must contain at least one uppercase and one lowercase letter.",
    ),
    (
        "ALLUPPERCASE1!",
        "The user password field must contain at least one uppercase and one lowercase letter.",
    ),
    (
        "NoNumbers!",
        "The user password field must contain at least one number.",
    ),
    (
        "NoSpecialChar1",
        "The user password field must contain at least one symbol.",
    ),
];

/// Malformed email addresses the form must reject
pub const INVALID_EMAILS: &[&str] = &[
    "plainaddress",
    "@missingusername.com",
    "username@.com",
    "username@com",
    "username@domain..com",
];

/// A string of `len` lowercase `a`s for length-boundary probes
#[must_use]
pub fn filler(len: usize) -> String {
    "a".repeat(len)
}

/// 50-character filler
#[must_use]
pub fn fifty_chars() -> String {
    filler(50)
}

/// 51-character filler
#[must_use]
pub fn fifty_one_chars() -> String {
    filler(51)
}

/// 100-character filler
#[must_use]
pub fn hundred_chars() -> String {
    filler(100)
}

/// 101-character filler
#[must_use]
pub fn hundred_one_chars() -> String {
    filler(101)
}

/// 255-character filler
#[must_use]
pub fn max_chars() -> String {
    filler(255)
}

/// 256-character filler, one past the expected limit
#[must_use]
pub fn over_max_chars() -> String {
    filler(256)
}

/// A fresh, well-formed email address.
///
/// Random rather than timestamp-based so parallel runs cannot collide.
#[must_use]
pub fn unique_email() -> String {
    format!("{}@testmail.com", Uuid::new_v4().simple())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod filler_tests {
        use super::*;

        #[test]
        fn test_named_lengths() {
            assert_eq!(fifty_chars().len(), 50);
            assert_eq!(fifty_one_chars().len(), 51);
            assert_eq!(hundred_chars().len(), 100);
            assert_eq!(hundred_one_chars().len(), 101);
            assert_eq!(max_chars().len(), 255);
            assert_eq!(over_max_chars().len(), 256);
        }

        proptest! {
            #[test]
            fn prop_filler_length_and_content(len in 0usize..1024) {
                let s = filler(len);
                prop_assert_eq!(s.len(), len);
                prop_assert!(s.bytes().all(|b| b == b'a'));
            }
        }
    }

    mod password_tests {
        use super::*;

        #[test]
        fn test_five_invalid_passwords() {
            assert_eq!(INVALID_PASSWORDS.len(), 5);
        }

        #[test]
        fn test_valid_password_satisfies_every_rule() {
            assert!(VALID_PASSWORD.len() >= 10);
            assert!(VALID_PASSWORD.chars().any(char::is_uppercase));
            assert!(VALID_PASSWORD.chars().any(char::is_lowercase));
            assert!(VALID_PASSWORD.chars().any(char::is_numeric));
            assert!(VALID_PASSWORD.chars().any(|c| !c.is_alphanumeric()));
        }

        #[test]
        fn test_mismatch_password_differs() {
            assert_ne!(VALID_PASSWORD, MISMATCH_PASSWORD);
        }

        #[test]
        fn test_case_rule_shares_message() {
            assert_eq!(INVALID_PASSWORDS[1].1, INVALID_PASSWORDS[2].1);
        }
    }

    mod email_tests {
        use super::*;

        #[test]
        fn test_malformed_email_set() {
            assert_eq!(INVALID_EMAILS.len(), 5);
            assert!(INVALID_EMAILS.contains(&"plainaddress"));
        }

        #[test]
        fn test_unique_email_shape() {
            let email = unique_email();
            assert!(email.ends_with("@testmail.com"));
            let local = email.split('@').next().unwrap();
            assert_eq!(local.len(), 32);
            assert!(local.chars().all(|c| c.is_ascii_hexdigit()));
        }

        proptest! {
            #[test]
            fn prop_unique_emails_do_not_collide(_seed in 0u8..16) {
                prop_assert_ne!(unique_email(), unique_email());
            }
        }
    }

    mod special_chars_tests {
        use super::*;

        #[test]
        fn test_set_is_ascii_and_nonempty() {
            assert!(!SPECIAL_CHARS.is_empty());
            assert!(SPECIAL_CHARS.is_ascii());
            assert!(!SPECIAL_CHARS.chars().any(char::is_alphanumeric));
        }
    }
}
