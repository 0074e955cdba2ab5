const MAX_VISIBLE_CHARS: usize = 120;

/// Prepares candidate speech for log lines: collapses whitespace and caps the
/// visible length so transcripts never flood the log stream.
pub fn sanitize_transcript(transcript: &str) -> String {
    let collapsed = transcript.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = collapsed.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = collapsed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        collapsed
    }
}
