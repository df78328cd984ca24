//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const SELECTION_BG: Color = Color::Rgb(60, 60, 95);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Top status bar
pub mod header {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(255, 107, 157))
        .add_modifier(Modifier::BOLD);
    pub const LABEL: Color = Color::Rgb(130, 133, 158);
    pub const VALUE: Color = Color::Rgb(236, 236, 244);
    pub const AUTO_ON: Color = Color::Rgb(107, 203, 119);
    pub const AUTO_OFF: Color = Color::Rgb(90, 92, 119);
    pub const LOADING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
}

/// Lyrics editor pane
pub mod lyrics {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255);
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
    pub const UNDO_HINT: Color = Color::Rgb(130, 133, 158);
}

/// Suggestion log pane
pub mod output {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(198, 120, 221);
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const DELIMITER: Color = Color::Rgb(90, 92, 119);
    pub const EMPTY_HINT: Color = Color::Rgb(90, 92, 119);
    pub const SCROLLBAR: Color = Color::Rgb(198, 120, 221);
}

/// Settings panel
pub mod settings {
    use super::*;

    pub const BORDER: Color = Color::Rgb(189, 147, 249);
    pub const INSTRUCTION_FOCUSED: Color = Color::Rgb(0, 217, 255);
    pub const INSTRUCTION_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const LABEL: Color = Color::Rgb(130, 133, 158);
    pub const VALUE: Style = Style::new()
        .fg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
    pub const GAUGE_FILLED: Color = Color::Rgb(255, 107, 157);
    pub const GAUGE_EMPTY: Color = Color::Rgb(55, 55, 85);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const PREVIEW_BORDER: Color = Color::Rgb(90, 92, 119);
    pub const PREVIEW_TEXT: Color = Color::Rgb(130, 133, 158);
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
    pub const SCROLLBAR: Color = Color::Rgb(0, 217, 255);
    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const SECTION_HEADER: Style = Style::new()
        .fg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new()
        .fg(Color::Rgb(255, 217, 61))
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = Color::Rgb(236, 236, 244);
    pub const FOOTER: Color = Color::Rgb(90, 92, 119);
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
