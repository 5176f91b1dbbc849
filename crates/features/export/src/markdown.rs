//! Markdown to plain text.
//!
//! An ordered rewrite pipeline producing text suitable for pasting into a
//! plain rich-text document. Total over arbitrary input: unmatched syntax
//! passes through untouched and nothing here can fail.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+(.+)$").expect("heading pattern"));
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{1,3}([^*\n]+)\*{1,3}").expect("emphasis pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("inline code pattern"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)[-*][ \t]+").expect("bullet pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("link pattern"));
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-{3,}[ \t]*$").expect("rule pattern"));
static TABLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\|?[ \t]*:?-+:?[ \t]*(?:\|[ \t]*:?-+:?[ \t]*)*\|?[ \t]*$")
        .expect("table separator pattern")
});
static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\|(.*)\|[ \t]*$").expect("table row pattern"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern"));

/// Converts markdown-formatted text to readable plain text.
///
/// Steps run in order, each over the previous step's output: headings become
/// UPPERCASE text, emphasis and inline-code markers are stripped, list markers
/// become a bullet glyph, links keep only their text, horizontal rules and
/// table separator rows vanish, table rows collapse to tab-joined cells, runs
/// of blank lines shrink to one, and the result is trimmed.
#[must_use]
pub fn markdown_to_plain(input: &str) -> String {
    let text = HEADING.replace_all(input, |caps: &Captures<'_>| caps[1].trim().to_uppercase());
    let text = EMPHASIS.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = BULLET.replace_all(&text, "${1}\u{2022} ");
    let text = LINK.replace_all(&text, "$1");
    let text = HORIZONTAL_RULE.replace_all(&text, "");
    let text = TABLE_SEPARATOR.replace_all(&text, "");
    let text = TABLE_ROW.replace_all(&text, |caps: &Captures<'_>| {
        caps[1].split('|').map(str::trim).collect::<Vec<_>>().join("\t")
    });
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");

    text.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_become_uppercase() {
        assert_eq!(markdown_to_plain("# Title"), "TITLE");
        assert_eq!(markdown_to_plain("### Deep Dive"), "DEEP DIVE");
        // Not a heading without the space.
        assert_eq!(markdown_to_plain("#hashtag"), "#hashtag");
    }

    #[test]
    fn emphasis_markers_are_stripped() {
        assert_eq!(markdown_to_plain("**bold** and *italic*"), "bold and italic");
        assert_eq!(markdown_to_plain("***both***"), "both");
    }

    #[test]
    fn inline_code_keeps_its_text() {
        assert_eq!(markdown_to_plain("run `cargo doc` now"), "run cargo doc now");
    }

    #[test]
    fn bullets_get_a_glyph() {
        assert_eq!(markdown_to_plain("- item one\n- item two"), "\u{2022} item one\n\u{2022} item two");
        assert_eq!(markdown_to_plain("* starred"), "\u{2022} starred");
        assert_eq!(markdown_to_plain("  - nested"), "\u{2022} nested");
    }

    #[test]
    fn links_keep_only_their_text() {
        assert_eq!(markdown_to_plain("[link](https://x.com)"), "link");
        assert_eq!(markdown_to_plain("see [the docs](/assets/guide.pdf) here"), "see the docs here");
    }

    #[test]
    fn horizontal_rules_vanish() {
        assert_eq!(markdown_to_plain("above\n\n---\n\nbelow"), "above\n\nbelow");
    }

    #[test]
    fn tables_collapse_to_tabbed_cells() {
        let input = "| Name | Role |\n| --- | :---: |\n| Ada | Engineer |";
        assert_eq!(markdown_to_plain(input), "Name\tRole\n\nAda\tEngineer");
    }

    #[test]
    fn newline_runs_collapse_to_one_blank_line() {
        assert_eq!(markdown_to_plain("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(markdown_to_plain("\n\n# Title\n\n"), "TITLE");
        assert_eq!(markdown_to_plain(""), "");
        assert_eq!(markdown_to_plain("   \n  "), "");
    }

    #[test]
    fn malformed_markdown_passes_through() {
        assert_eq!(markdown_to_plain("**unclosed bold"), "**unclosed bold");
        assert_eq!(markdown_to_plain("[no url]("), "[no url](");
        assert_eq!(markdown_to_plain("|lonely pipe"), "|lonely pipe");
    }

    #[test]
    fn full_document() {
        let input = "# Setup\n\nInstall the `phub` CLI, then:\n\n- download the [starter pack](https://example.com/pack)\n- run **exactly** one of:\n\n| Platform | Command |\n|----------|---------|\n| macOS | brew install phub |\n\n---\n\nDone.";
        let expected = "SETUP\n\nInstall the phub CLI, then:\n\n\u{2022} download the starter pack\n\u{2022} run exactly one of:\n\nPlatform\tCommand\n\nmacOS\tbrew install phub\n\nDone.";
        assert_eq!(markdown_to_plain(input), expected);
    }
}
