use arboard::Clipboard;

use super::backend::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Write(e.to_string()))
}
