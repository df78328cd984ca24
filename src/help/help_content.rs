pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "SUGGESTIONS",
        entries: &[
            ("Ctrl+G / F5", "Suggest now for the selection or caret line"),
            ("Ctrl+T", "Toggle automatic suggestions"),
            ("Alt+↑ / Alt+↓", "Wildness +0.1 / -0.1"),
            ("Ctrl+L", "Clear suggestions"),
            ("Ctrl+K", "Copy latest suggestion"),
        ],
    },
    HelpSection {
        title: "LYRICS",
        entries: &[
            ("Ctrl+Z", "Undo"),
            ("Ctrl+Y", "Redo"),
            ("Shift+Arrows", "Select text"),
            ("Enter", "New line; suggests for the finished line"),
        ],
    },
    HelpSection {
        title: "SUGGESTION PANE",
        entries: &[
            ("↑/↓ or j/k", "Scroll one line"),
            ("PgUp/PgDn", "Scroll half a page"),
            ("Home/End or g/G", "Jump to oldest / newest"),
        ],
    },
    HelpSection {
        title: "GENERAL",
        entries: &[
            ("Tab / Shift+Tab", "Cycle focus"),
            ("F2", "Toggle settings panel"),
            ("F12", "Toggle prompt preview"),
            ("F1", "Toggle this help"),
            ("Esc", "Dismiss notification"),
            ("Ctrl+C / Ctrl+Q", "Quit (settings are saved)"),
        ],
    },
];

pub const HELP_FOOTER: &str = "↑/↓ scroll • Esc or F1 close";
