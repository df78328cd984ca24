use crate::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening always starts at the top
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.scroll.jump_to_top();
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}
