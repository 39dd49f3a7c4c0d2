/// Which input source drives the slingshot. Exactly one is live at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Pointer,
    Gesture,
}

impl InputMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Pointer => InputMode::Gesture,
            InputMode::Gesture => InputMode::Pointer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputMode::Pointer => "Mouse / touch",
            InputMode::Gesture => "Hand pinch",
        }
    }

    /// Parse the `mode` query parameter value.
    pub fn from_query(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "gesture" | "hand" | "camera" => Some(InputMode::Gesture),
            "pointer" | "mouse" | "touch" => Some(InputMode::Pointer),
            _ => None,
        }
    }
}

/// Extract `mode=...` from a `?a=b&c=d` search string.
pub fn mode_from_search(search: &str) -> Option<InputMode> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == "mode")
        .and_then(|(_, v)| InputMode::from_query(v))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleGesture,
    ToggleOverlay,
    CancelDraw,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "g" | "G" => Some(KeyAction::ToggleGesture),
        "h" | "H" => Some(KeyAction::ToggleOverlay),
        "Escape" => Some(KeyAction::CancelDraw),
        _ => None,
    }
}
