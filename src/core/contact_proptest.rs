//! Property-based tests for contact form validation

#[cfg(test)]
mod tests {
    use crate::core::contact::*;
    use proptest::prelude::*;
    use quickcheck::QuickCheck;

    prop_compose! {
        fn valid_email()(
            local in "[a-z0-9._+-]{1,20}",
            domain in "[a-z0-9-]{1,20}",
            tld in "[a-z]{2,6}",
        ) -> String {
            format!("{local}@{domain}.{tld}")
        }
    }

    proptest! {
        #[test]
        fn test_well_formed_records_pass(
            name in "[A-Za-z][A-Za-z ]{0,30}",
            email in valid_email(),
            message in "[A-Za-z0-9][A-Za-z0-9 .,!?]{0,200}",
        ) {
            let errors = validate(&ContactRecord::new(name, email, message));
            prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        }

        #[test]
        fn test_email_without_at_is_rejected(email in "[^@]*") {
            let errors = validate(&ContactRecord::new("Jo", email, "hi"));
            prop_assert_eq!(errors.get(ContactField::Email), Some(INVALID_EMAIL));
        }

        #[test]
        fn test_blank_name_always_required(blank in "[ \t\r\n]*") {
            let errors = validate(&ContactRecord::new(blank, "a@b.com", "hi"));
            prop_assert_eq!(errors.get(ContactField::Name), Some(REQUIRED));
        }

        #[test]
        fn test_only_known_fields_reported(
            name in ".*",
            email in ".*",
            message in ".*",
        ) {
            let errors = validate(&ContactRecord::new(name, email, message));
            prop_assert!(errors.len() <= ContactField::ALL.len());
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        fn check(name: String, email: String, message: String) -> bool {
            let record = ContactRecord::new(name, email, message);
            validate(&record) == validate(&record)
        }

        QuickCheck::new()
            .tests(200)
            .quickcheck(check as fn(String, String, String) -> bool);
    }
}
