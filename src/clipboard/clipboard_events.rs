use super::backend::copy_to_clipboard;
use crate::app::App;

/// Copies the newest suggestion block; returns false when there is none
pub fn copy_latest_suggestion(app: &mut App) -> bool {
    let Some(latest) = app.output.log.latest().map(str::to_string) else {
        app.notification.show_warning("No suggestions to copy");
        return false;
    };

    match copy_to_clipboard(&latest, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show("Copied latest suggestion");
            true
        }
        Err(e) => {
            log::error!("Copy failed: {}", e);
            app.notification.show_error(&e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClipboardBackend;
    use crate::test_utils::test_helpers::test_app;

    #[test]
    fn test_copy_without_suggestions_warns() {
        let mut app = test_app();
        assert!(!copy_latest_suggestion(&mut app));
        assert_eq!(
            app.notification.current_message(),
            Some("No suggestions to copy")
        );
    }

    #[test]
    fn test_copy_latest_with_osc52() {
        let mut app = test_app();
        app.clipboard_backend = ClipboardBackend::Osc52;
        app.output.append("first");
        app.output.append("second");

        assert!(copy_latest_suggestion(&mut app));
        assert_eq!(
            app.notification.current_message(),
            Some("Copied latest suggestion")
        );
    }
}
