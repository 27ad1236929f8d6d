//! Property tests for fence substitution
//!
//! The surrounding-text alphabets exclude backticks, so the only fence in
//! each generated document is the one under test.

use docsync::docsync::scanning::substitute;
use proptest::prelude::*;

proptest! {
    #[test]
    fn substitution_preserves_surrounding_text(
        prefix in "[a-zA-Z0-9 .\n]{0,60}",
        body in "[a-zA-Z0-9 ,\n]{0,60}",
        new_body in "[a-zA-Z0-9 ,\n]{0,60}",
        suffix in "[a-zA-Z0-9 .\n]{0,60}",
    ) {
        let document = format!("{prefix}\n```json\n{body}\n```\n{suffix}");
        let updated = substitute(&document, "json", &new_body);

        let expected_prefix = format!("{}\n```json\n", prefix);
        let expected_suffix = format!("\n```\n{}", suffix);
        prop_assert!(updated.starts_with(&expected_prefix));
        prop_assert!(updated.ends_with(&expected_suffix));
    }

    #[test]
    fn substitution_is_idempotent(
        prefix in "[a-zA-Z0-9 .\n]{0,60}",
        body in "[a-zA-Z0-9 ,\n]{0,60}",
        new_body in "[a-zA-Z0-9 ,\n]{0,60}",
        suffix in "[a-zA-Z0-9 .\n]{0,60}",
    ) {
        let document = format!("{prefix}\n```json\n{body}\n```\n{suffix}");
        let once = substitute(&document, "json", &new_body);
        let twice = substitute(&once, "json", &new_body);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unknown_tag_is_identity(
        prefix in "[a-zA-Z0-9 .\n]{0,60}",
        body in "[a-zA-Z0-9 ,\n]{0,60}",
        new_body in "[a-zA-Z0-9 ,\n]{0,60}",
    ) {
        let document = format!("{prefix}\n```json\n{body}\n```\n");
        prop_assert_eq!(substitute(&document, "toml", &new_body), document);
    }

    #[test]
    fn substituted_body_always_ends_with_one_newline(
        new_body in "[a-zA-Z0-9 ,]{0,40}(\n{0,3})",
    ) {
        let document = "```json\nOLD\n```\n";
        let updated = substitute(document, "json", &new_body);

        let expected = format!("```json\n{}\n```\n", new_body.trim_end_matches('\n'));
        prop_assert_eq!(updated, expected);
    }
}
