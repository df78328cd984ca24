/// Line written before every suggestion block
pub const DELIMITER: &str = "---------------";

/// Append-only record of received suggestions.
///
/// The text grows by `DELIMITER\n{content}\n` per suggestion and is only
/// ever cleared wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionLog {
    text: String,
    entries: Vec<String>,
}

impl SuggestionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, content: &str) {
        self.text.push_str(DELIMITER);
        self.text.push('\n');
        self.text.push_str(content);
        self.text.push('\n');
        self.entries.push(content.to_string());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.entries.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Content of the newest block, without its delimiter.
    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = SuggestionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.text(), "");
        assert_eq!(log.latest(), None);
    }

    #[test]
    fn test_append_adds_one_delimited_block() {
        let mut log = SuggestionLog::new();
        log.append("shimmer, gleam");

        assert_eq!(log.text(), "---------------\nshimmer, gleam\n");
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest(), Some("shimmer, gleam"));
    }

    #[test]
    fn test_append_preserves_previous_blocks() {
        let mut log = SuggestionLog::new();
        log.append("first");
        let before = log.text().to_string();
        log.append("second\nline");

        assert!(log.text().starts_with(&before));
        assert_eq!(
            &log.text()[before.len()..],
            "---------------\nsecond\nline\n"
        );
        assert_eq!(log.latest(), Some("second\nline"));
    }

    #[test]
    fn test_clear_wipes_everything() {
        let mut log = SuggestionLog::new();
        log.append("a");
        log.append("b");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.text(), "");
    }
}
