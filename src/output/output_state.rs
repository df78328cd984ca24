use super::suggestion_log::SuggestionLog;
use crate::scroll::ScrollState;

/// Suggestion log plus its viewport.
///
/// `follow_newest` is set by every append and honored by the next render,
/// which scrolls to the bottom once the wrapped line count is known.
#[derive(Debug, Default)]
pub struct OutputState {
    pub log: SuggestionLog,
    pub scroll: ScrollState,
    pub follow_newest: bool,
}

impl OutputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, content: &str) {
        self.log.append(content);
        self.follow_newest = true;
    }

    pub fn clear(&mut self) {
        self.log.clear();
        self.scroll = ScrollState::new();
        self.follow_newest = false;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow_newest = false;
        self.scroll.scroll_up(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.follow_newest = false;
        self.scroll.scroll_down(lines);
    }

    pub fn page_up(&mut self) {
        self.follow_newest = false;
        self.scroll.page_up();
    }

    pub fn page_down(&mut self) {
        self.follow_newest = false;
        self.scroll.page_down();
    }

    pub fn jump_to_top(&mut self) {
        self.follow_newest = false;
        self.scroll.jump_to_top();
    }

    pub fn jump_to_bottom(&mut self) {
        self.follow_newest = true;
        self.scroll.jump_to_bottom();
    }
}
