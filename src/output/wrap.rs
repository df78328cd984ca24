//! Greedy word wrapping for the suggestion pane
//!
//! Wrapping is done up front so the rendered line count is known exactly and
//! the pane can scroll to the true bottom.

/// Wraps `text` to `width` columns, counting chars. Words longer than the
/// width are split. Every source line yields at least one output line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in line.split(' ') {
            let word_len = word.chars().count();
            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(word);
                current_len += word_len;
                continue;
            }

            if current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }

            let mut chars = word.chars().peekable();
            while chars.peek().is_some() {
                let chunk: String = chars.by_ref().take(width).collect();
                let chunk_len = chunk.chars().count();
                if chunk_len == width && chars.peek().is_some() {
                    out.push(chunk);
                } else {
                    current = chunk;
                    current_len = chunk_len;
                }
            }
        }

        out.push(current);
    }

    out
}
