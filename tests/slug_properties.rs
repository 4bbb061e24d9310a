use client_sheet::core::slug::{slugify, DEFAULT_SLUG};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slug_uses_only_allowed_characters(name in "\\PC{0,40}") {
        let slug = slugify(&name);
        prop_assert!(!slug.is_empty());
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn slug_is_deterministic(name in "\\PC{0,40}") {
        prop_assert_eq!(slugify(&name), slugify(&name));
    }

    #[test]
    fn punctuation_only_names_fall_back(name in "[!?.,;:'\"()*&^%$#@]{1,20}") {
        prop_assert_eq!(slugify(&name), DEFAULT_SLUG);
    }

    #[test]
    fn plain_lowercase_words_join_with_hyphens(words in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
        prop_assert_eq!(slugify(&words.join(" ")), words.join("-"));
    }
}
