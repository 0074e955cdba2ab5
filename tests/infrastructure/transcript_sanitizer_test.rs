use voxhire::infrastructure::observability::sanitize_transcript;

#[test]
fn given_blank_transcript_then_placeholder_is_returned() {
    assert_eq!(sanitize_transcript("   \n\t "), "[EMPTY]");
}

#[test]
fn given_short_transcript_then_whitespace_is_collapsed() {
    assert_eq!(
        sanitize_transcript("I  worked on\na payments   service"),
        "I worked on a payments service"
    );
}

#[test]
fn given_long_transcript_then_it_is_truncated_with_char_count() {
    let long = "word ".repeat(100);
    let sanitized = sanitize_transcript(&long);

    assert!(sanitized.contains("chars total"));
    assert!(sanitized.len() < long.len());
}
