//! ANSI escape stripping and whitespace normalization

use regex::Regex;
use std::sync::LazyLock;

// Both patterns are compile-time constants, so the expect never fires.
static SGR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[([0-9]+;)*[0-9]+m").expect("valid SGR pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strip SGR escape sequences, then collapse every whitespace run to a
/// single space.
///
/// Pure and total, and idempotent over its own output. Note that a single
/// newline also becomes a single space, so multi-line input flattens to
/// one line.
#[must_use]
pub fn uncolor(text: &str) -> String {
    let stripped = SGR.replace_all(text, "");
    WHITESPACE.replace_all(&stripped, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::uncolor;
    use crate::palette;
    use proptest::prelude::*;

    #[test]
    fn strips_sgr_and_collapses_whitespace() {
        assert_eq!(uncolor("\x1b[31;1mHello\x1b[0;0m   World"), "Hello World");
    }

    #[test]
    fn empty_input_maps_to_empty() {
        assert_eq!(uncolor(""), "");
    }

    #[test]
    fn escape_only_input_maps_to_empty() {
        assert_eq!(uncolor("\x1b[90m"), "");
    }

    #[test]
    fn clean_text_passes_through() {
        assert_eq!(uncolor("clean text"), "clean text");
    }

    #[test]
    fn tabs_and_newlines_collapse_to_one_space() {
        assert_eq!(uncolor("a\t\n  b"), "a b");
    }

    #[test]
    fn newline_becomes_space() {
        assert_eq!(uncolor("line one\nline two"), "line one line two");
    }

    #[test]
    fn strips_every_palette_code() {
        let codes = [
            palette::RED,
            palette::BLUE,
            palette::YELLOW,
            palette::PINK,
            palette::MINT,
            palette::GREY,
            palette::LIME,
            palette::LAVENDER,
            palette::MAROON,
            palette::ORANGE,
            palette::CLEAR,
        ];
        for code in codes {
            assert_eq!(uncolor(&format!("{code}x")), "x");
        }
    }

    /// Clean text runs interleaved with well-formed SGR sequences.
    fn colored_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("\x1b[31;1m".to_string()),
                Just("\x1b[38;5;161;1m".to_string()),
                Just("\x1b[0;0m".to_string()),
                "[a-zA-Z0-9 \t\n]{0,8}",
            ],
            0..16,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn idempotent(s in colored_text()) {
            let once = uncolor(&s);
            prop_assert_eq!(uncolor(&once), once);
        }

        #[test]
        fn appended_sequence_does_not_change_output(
            s in "[a-z ]{0,20}",
            params in proptest::collection::vec(0u8..=255, 1..4),
        ) {
            let joined = params
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(";");
            let seq = format!("\x1b[{joined}m");
            prop_assert_eq!(uncolor(&format!("{s}{seq}")), uncolor(&s));
        }
    }
}
