//! Greedy word wrapping for tooltip text

/// Default tooltip line width in characters.
pub const DEFAULT_WRAP_WIDTH: usize = 50;

/// Reflow `text` into lines of at most `max_line_chars` characters.
///
/// Words are the pieces between single spaces. Each word is appended to the
/// current line when `" " + word` still fits, otherwise the line is flushed
/// and the word starts the next one. This is plain greedy wrapping: a word
/// longer than the width gets a line of its own and is never split.
pub fn wrap_text(text: &str, max_line_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut words = text.split(' ');
    let mut lines = Vec::new();
    let mut current = words.next().unwrap_or_default().to_string();
    let mut current_len = current.chars().count();

    for word in words {
        let word_len = word.chars().count();
        if current_len + 1 + word_len <= max_line_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
