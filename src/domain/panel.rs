/// Content view shown in the main region of the shell.
///
/// Exactly one panel is active at any time; the selector starts on [`Panel::Chat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Chat,
    Settings,
}

impl Panel {
    /// Navigation order, left to right.
    pub const ALL: [Panel; 2] = [Panel::Chat, Panel::Settings];

    /// Caption of the navigation control that activates this panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Settings => "\u{2699} Settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Settings => "Settings",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Chat => Self::Settings,
            Self::Settings => Self::Chat,
        }
    }
}
