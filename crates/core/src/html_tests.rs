// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use proptest::prelude::*;
use regex::Regex;
use yare::parameterized;

// =============================================================================
// Single-attribute conversions
// =============================================================================

#[parameterized(
    foreground = { "\x1b[31mRed\x1b[0m", r#"<span style="color: #cd0000;">Red</span>"# },
    bold = { "\x1b[1mBold\x1b[0m", r#"<span style="font-weight: bold;">Bold</span>"# },
    underline = { "\x1b[4mUnderlined text\x1b[0m", r#"<span style="text-decoration: underline;">Underlined text</span>"# },
    background = { "\x1b[41mRed background\x1b[0m", r#"<span style="background-color: #cd0000;">Red background</span>"# },
    bright_foreground = { "\x1b[91mBright red\x1b[0m", r#"<span style="color: #ff0000;">Bright red</span>"# },
    bright_background = { "\x1b[104mBlue\x1b[0m", r#"<span style="background-color: #5c5cff;">Blue</span>"# },
)]
fn single_attribute(input: &str, expected: &str) {
    assert_eq!(render_html(input), expected);
}

#[test]
fn test_empty_input() {
    assert_eq!(render_html(""), "");
}

#[test]
fn test_plain_text_unchanged() {
    assert_eq!(render_html("just text"), "just text");
}

#[test]
fn test_newlines_become_line_breaks() {
    assert_eq!(render_html("Line 1\nLine 2"), "Line 1<br>Line 2");
}

#[test]
fn test_carriage_return_is_kept() {
    assert_eq!(render_html("a\r\nb"), "a\r<br>b");
}

// =============================================================================
// Stack behavior
// =============================================================================

#[test]
fn test_compound_sequence_opens_spans_in_order() {
    assert_eq!(
        render_html("\x1b[1;31mBold red text\x1b[0m"),
        concat!(
            r#"<span style="font-weight: bold;">"#,
            r#"<span style="color: #cd0000;">"#,
            "Bold red text</span></span>"
        )
    );
}

#[test]
fn test_spans_across_separate_sequences_close_together() {
    assert_eq!(
        render_html("\x1b[1m\x1b[32m2 passing\x1b[0m done"),
        concat!(
            r#"<span style="font-weight: bold;">"#,
            r#"<span style="color: #00cd00;">"#,
            "2 passing</span></span> done"
        )
    );
}

#[test]
fn test_same_kind_spans_stack_without_replacing() {
    assert_eq!(
        render_html("\x1b[31mred \x1b[32mgreen\x1b[0m"),
        concat!(
            r#"<span style="color: #cd0000;">red "#,
            r#"<span style="color: #00cd00;">green</span></span>"#
        )
    );
}

#[test]
fn test_unterminated_styling_is_closed_at_end() {
    assert_eq!(
        render_html("\x1b[31mRed text without reset"),
        r#"<span style="color: #cd0000;">Red text without reset</span>"#
    );
}

#[test]
fn test_reset_inside_compound_sequence() {
    // 0 closes bold, then 4 opens underline
    assert_eq!(
        render_html("\x1b[1mA\x1b[0;4mB"),
        concat!(
            r#"<span style="font-weight: bold;">A</span>"#,
            r#"<span style="text-decoration: underline;">B</span>"#
        )
    );
}

#[test]
fn test_reset_with_nothing_open_emits_nothing() {
    assert_eq!(render_html("\x1b[0mplain\x1b[0m"), "plain");
}

#[test]
fn test_empty_parameter_list_is_reset() {
    assert_eq!(
        render_html("\x1b[1mA\x1b[mB"),
        r#"<span style="font-weight: bold;">A</span>B"#
    );
}

#[test]
fn test_trailing_empty_group_is_reset() {
    assert_eq!(
        render_html("\x1b[1;mA"),
        r#"<span style="font-weight: bold;"></span>A"#
    );
}

#[test]
fn test_unsupported_codes_are_dropped() {
    assert_eq!(render_html("\x1b[2;7;39mtext\x1b[0m"), "text");
}

#[test]
fn test_non_sgr_csi_is_left_alone() {
    assert_eq!(render_html("\x1b[2Jclear"), "\x1b[2Jclear");
}

#[test]
fn test_newline_inside_span() {
    assert_eq!(
        render_html("\x1b[32m[INFO]\nnext"),
        r#"<span style="color: #00cd00;">[INFO]<br>next</span>"#
    );
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn test_html_in_text_is_escaped() {
    let result = render_html(r#"<script>alert("test")</script>"#);
    assert!(result.contains("&lt;script&gt;"));
    assert!(result.contains("&quot;test&quot;"));
    assert!(!result.contains("<script>"));
}

#[test]
fn test_escaped_text_inside_span() {
    assert_eq!(
        render_html("\x1b[33m'a' & <b>\x1b[0m"),
        r#"<span style="color: #cdcd00;">&#39;a&#39; &amp; &lt;b&gt;</span>"#
    );
}

#[test]
fn test_malformed_sequence_is_kept_as_text() {
    assert_eq!(render_html("\x1b[31incomplete"), "\x1b[31incomplete");
}

// =============================================================================
// StyleStack
// =============================================================================

#[test]
fn test_stack_tracks_open_spans() {
    let mut stack = StyleStack::new();
    let mut out = String::new();

    stack.apply(Sgr::Bold, &mut out);
    stack.apply(Sgr::Foreground("#cd0000"), &mut out);
    stack.apply(Sgr::Ignored(7), &mut out);
    assert_eq!(stack.depth(), 2);
    assert_eq!(
        stack.spans(),
        &[StyleSpan::Bold, StyleSpan::Foreground("#cd0000")]
    );

    stack.apply(Sgr::Reset, &mut out);
    assert_eq!(stack.depth(), 0);
    assert_eq!(out.matches("<span").count(), 2);
    assert!(out.ends_with("</span></span>"));
}

#[test]
fn test_span_for_code() {
    assert_eq!(StyleSpan::for_code(Sgr::Reset), None);
    assert_eq!(StyleSpan::for_code(Sgr::Ignored(5)), None);
    assert_eq!(StyleSpan::for_code(Sgr::Underline), Some(StyleSpan::Underline));
}

// =============================================================================
// Properties
// =============================================================================

fn sgr_sequence() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..110, 0..4).prop_map(|codes| {
        let params: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        format!("\x1b[{}m", params.join(";"))
    })
}

fn ansi_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            r#"[a-zA-Z0-9 <>&"'\n\t;\[]{0,12}"#,
            sgr_sequence(),
            Just("\x1b[31".to_string()),
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn literal_text_is_always_escaped(input in ansi_text()) {
        let markup = Regex::new(r#"<span style="[^"]*">|</span>|<br>"#).unwrap();
        let html = render_html(&input);
        let text = markup.replace_all(&html, "");

        prop_assert!(!text.contains('<'));
        prop_assert!(!text.contains('>'));
        prop_assert!(!text.contains('"'));
        prop_assert!(!text.contains('\''));

        let entity = Regex::new(r"&(amp|lt|gt|quot|#39);").unwrap();
        prop_assert!(!entity.replace_all(&text, "").contains('&'));
    }

    #[test]
    fn spans_are_balanced(input in ansi_text()) {
        let html = render_html(&input);
        prop_assert_eq!(html.matches("<span ").count(), html.matches("</span>").count());
    }

    #[test]
    fn text_without_sequences_is_only_escaped(input in r"[^\x1b\n]*") {
        prop_assert_eq!(render_html(&input), escape_html(&input));
    }
}
