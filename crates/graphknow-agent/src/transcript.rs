//! Transcript rendering — speaker-labeled messages in timestamp order

use graphknow_llm::ThreadMessage;

/// Render messages as `<Speaker>: <text>` lines, ascending by creation
/// time. The sort is stable, so equal timestamps keep their source order.
/// Messages without a text block render as an empty line of text.
pub fn render_transcript(messages: &[ThreadMessage]) -> String {
    let mut ordered: Vec<&ThreadMessage> = messages.iter().collect();
    ordered.sort_by_key(|m| m.created_at);

    let mut out = String::new();
    for message in ordered {
        let speaker = if message.assistant_id.is_some() {
            "Assistant"
        } else {
            "User"
        };
        out.push_str(speaker);
        out.push_str(": ");
        out.push_str(message.text().unwrap_or(""));
        out.push('\n');
    }
    out
}

pub fn print_transcript(messages: &[ThreadMessage]) {
    print!("{}", render_transcript(messages));
}
