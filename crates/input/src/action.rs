/// A key identity, decoupled from the window library's key types.
///
/// Only the quit key is recognized by name; everything else folds into
/// `Other` since no other key is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Key transition reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
    /// Held-key auto-repeat. Kept distinct from `Pressed` so repeats cannot
    /// re-trigger edge-sensitive actions.
    Repeated,
}

/// A frame-loop action produced by input mapping.
///
/// The loop consumes actions, never raw key events, so the windowed and
/// headless paths share the same termination logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raise the close flag; the loop terminates at its next iteration.
    RequestClose,
    /// No-op (key is not bound to anything).
    Noop,
}

/// Maps one key event to an action.
///
/// The initial press of Escape requests close. Releases, auto-repeats, and
/// all other keys map to no-ops.
pub fn action_for(key: Key, state: KeyState) -> Action {
    match (key, state) {
        (Key::Escape, KeyState::Pressed) => Action::RequestClose,
        _ => Action::Noop,
    }
}
