//! Domain-specific assertions for bplogrestore harnesses.
//!
//! These add context-rich failure messages that make it clear which property
//! of the target log was violated.

/// Width of every label in the padding table once padded.
pub const LABEL_WIDTH: usize = 5;

/// Timestamp field of a target log line whose label is one of the five
/// padded labels and whose suffix is three characters.
pub fn timestamp_of(line: &str) -> &str {
    line.get(LABEL_WIDTH + 1..LABEL_WIDTH + 1 + 27)
        .unwrap_or_else(|| panic!("line too short to hold a timestamp: {line:?}"))
}

/// Assert that the timestamps of `lines` never decrease.
pub fn assert_sorted(lines: &[&str]) {
    for pair in lines.windows(2) {
        let (a, b) = (timestamp_of(pair[0]), timestamp_of(pair[1]));
        assert!(
            a <= b,
            "target log out of order:\n  {:?}\n  before\n  {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Assert that a target line starts with `label` padded to [`LABEL_WIDTH`]
/// followed by the field separator.
pub fn assert_padded_label(line: &str, label: &str) {
    let expected = format!("{label:<width$} ", width = LABEL_WIDTH);
    assert!(
        line.starts_with(&expected),
        "expected line to start with {expected:?}, got {line:?}"
    );
}
