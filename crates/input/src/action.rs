/// A high-level action any input frontend can produce.
///
/// Whatever delivers events (a browser-style key listener, a terminal, a
/// script file) maps them here first; the session never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Dodge one step to the left.
    SteerLeft,
    /// Dodge one step to the right.
    SteerRight,
    /// Flip the pause flag.
    TogglePause,
    /// Unbound input; dropped without effect.
    Noop,
}

impl Action {
    /// Map a DOM-style key code to an action.
    pub fn from_key(code: &str) -> Self {
        let action = match code {
            "ArrowLeft" => Self::SteerLeft,
            "ArrowRight" => Self::SteerRight,
            "Space" | "KeyP" => Self::TogglePause,
            _ => Self::Noop,
        };
        tracing::trace!(code, ?action, "mapped key");
        action
    }
}
