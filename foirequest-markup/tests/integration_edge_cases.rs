//! Edge cases of the difference marker and the text utilities: non-ASCII
//! text, long inputs that trigger the popular-character heuristic, footers in
//! other languages, and properties that hold for arbitrary inputs.

use foirequest_markup::{
    escape, mark_differences, mark_differences_with_stats, remove_space_lines,
    split_text_by_separator, unescape, MarkerConfig, OpTag, SequenceMatcher,
};
use proptest::prelude::*;

fn mark(a: &str, b: &str) -> String {
    mark_differences(a, b, &MarkerConfig::default()).into_string()
}

/// Drops the default marker tags and all whitespace.
fn text_of(marked: &str) -> String {
    marked
        .replace("<span class=\"redacted\"> ", "")
        .replace(" </span>", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

// ============================================================================
// Marker
// ============================================================================

#[test]
fn empty_inputs() {
    assert_eq!(mark("", ""), "");
    assert_eq!(mark("", "abc"), "");
    assert_eq!(mark("abc", ""), "<span class=\"redacted\"> abc </span>");
}

#[test]
fn umlauts_are_kept_whole() {
    assert_eq!(
        mark("Grüße aus Köln, Jürgen Müller", "Grüße aus Köln, <<name>>"),
        "Grüße aus Köln, <span class=\"redacted\"> Jürgen Müller </span>"
    );
}

#[test]
fn whitespace_only_differences_leave_no_span() {
    let marked = mark_differences_with_stats("Hello  world", "Hello world", &MarkerConfig::default());
    assert_eq!(marked.html.as_str(), "Hello world");
    assert_eq!(marked.stats.spans, 0);
    assert_eq!(marked.stats.discarded_spans, 1);
}

#[test]
fn blank_lines_lose_their_spaces() {
    assert_eq!(mark("line\n   \nnext", "line\nX\nnext"), "line\n\nnext");
}

#[test]
fn single_trailing_character_is_marked() {
    assert_eq!(
        mark("Tel. 0123 456789", "Tel. 0123 456788"),
        "Tel. 0123 45678<span class=\"redacted\"> 9 </span>"
    );
}

#[test]
fn long_texts_still_align_around_redactions() {
    let sentence = "The office of the district administration confirmed receipt of the request. ";
    let real = format!(
        "{}Contact: Max Mustermann, phone 030 1234567. {}",
        sentence.repeat(4),
        sentence.repeat(2)
    );
    let redacted = format!(
        "{}Contact: <<name>>, phone <<phone>>. {}",
        sentence.repeat(4),
        sentence.repeat(2)
    );
    assert!(real.len() >= 200);

    let marked = mark(&redacted, &real);
    assert_eq!(
        marked,
        format!(
            "{}Contact: <span class=\"redacted\"> &lt;&lt;name&gt;&gt; </span>, phone \
             <span class=\"redacted\"> &lt;&lt;phone&gt;&gt; </span>. {}",
            sentence.repeat(4),
            sentence.repeat(2)
        )
    );
}

#[test]
fn autojunk_can_be_disabled() {
    let a: Vec<char> = format!("y{}", "x".repeat(249)).chars().collect();
    let b: Vec<char> = format!("{}y", "x".repeat(249)).chars().collect();

    // 'x' is popular in b, so only the 'y' can anchor a match
    let junked = SequenceMatcher::new(&a, &b).opcodes();
    let tags: Vec<_> = junked.iter().map(|op| (op.tag, op.a_len())).collect();
    assert_eq!(
        tags,
        [(OpTag::Insert, 0), (OpTag::Equal, 1), (OpTag::Delete, 249)]
    );

    let plain = SequenceMatcher::with_autojunk(&a, &b, false).opcodes();
    let tags: Vec<_> = plain.iter().map(|op| (op.tag, op.a_len())).collect();
    assert_eq!(
        tags,
        [(OpTag::Delete, 1), (OpTag::Equal, 249), (OpTag::Insert, 0)]
    );
}

// ============================================================================
// Footers
// ============================================================================

#[test]
fn german_separator_starts_the_footer() {
    let text = "Grüße, Jürgen\n\n-----Ursprüngliche Nachricht-----\nVon: j@example.org";
    let (primary, footer) = split_text_by_separator(text);
    assert_eq!(primary, "Grüße, Jürgen\n\n");
    assert_eq!(footer, "-----Ursprüngliche Nachricht-----\nVon: j@example.org");
}

#[test]
fn quoted_separator_starts_the_footer() {
    let (primary, footer) = split_text_by_separator("Thanks\n> ----- Original Message -----\n> Hi");
    assert_eq!(primary, "Thanks\n");
    assert!(footer.starts_with("> -----"));
}

#[test]
fn text_without_separator_has_no_footer() {
    let (primary, footer) = split_text_by_separator("just a -- dash");
    assert_eq!(primary, "just a -- dash");
    assert_eq!(footer, "");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn identical_texts_are_only_escaped(text in "[a-zA-Zäö &<>'\"\n]{0,60}") {
        let marked = mark(&text, &text);
        prop_assert_eq!(marked, escape(&remove_space_lines(&text)));
    }

    #[test]
    fn marked_text_is_the_first_input(
        a in "[a-e <&\n]{0,40}",
        b in "[a-e <&\n]{0,40}",
    ) {
        let marked = mark(&a, &b);
        prop_assert_eq!(
            without_whitespace(&unescape(&text_of(&marked))),
            without_whitespace(&a)
        );
    }

    #[test]
    fn opcodes_cover_both_sequences(a in "[abc]{0,30}", b in "[abc]{0,30}") {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let opcodes = SequenceMatcher::new(&a, &b).opcodes();

        let (mut i, mut j) = (0, 0);
        for op in &opcodes {
            prop_assert_eq!((op.i1, op.j1), (i, j));
            if op.tag == OpTag::Equal {
                prop_assert_eq!(&a[op.i1..op.i2], &b[op.j1..op.j2]);
            }
            i = op.i2;
            j = op.j2;
        }
        prop_assert_eq!((i, j), (a.len(), b.len()));
    }
}
