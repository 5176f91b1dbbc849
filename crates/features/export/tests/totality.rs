use phub_export::markdown_to_plain;
use proptest::prelude::*;

proptest! {
    // Total and pure over arbitrary input.
    #[test]
    fn conversion_never_panics_and_is_deterministic(input in ".*") {
        let first = markdown_to_plain(&input);
        let second = markdown_to_plain(&input);
        prop_assert_eq!(first, second);
    }

    // The collapse step guarantees no run of 3+ newlines survives.
    #[test]
    fn output_never_contains_three_newlines(input in "[a-z#*\\-|\n ]{0,200}") {
        let output = markdown_to_plain(&input);
        prop_assert!(!output.contains("\n\n\n"));
    }

    // The whole result is trimmed.
    #[test]
    fn output_has_no_surrounding_whitespace(input in ".*") {
        let output = markdown_to_plain(&input);
        prop_assert_eq!(output.trim(), output.as_str());
    }
}
