use crate::core::data::point::PointerPosition;

/// Modifier keys held while an input event happened.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        control: false,
        shift: false,
        alt: false,
    };

    pub const CONTROL: Self = Self {
        control: true,
        shift: false,
        alt: false,
    };
}

/// Pointer input forwarded by a display surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PrimaryPressed {
        position: PointerPosition,
        modifiers: Modifiers,
    },
    PointerMoved {
        position: PointerPosition,
        modifiers: Modifiers,
    },
    PrimaryReleased {
        position: PointerPosition,
        modifiers: Modifiers,
    },
    /// Positive `delta` is scrolling forward, away from the user.
    Scrolled {
        position: PointerPosition,
        delta: f64,
        modifiers: Modifiers,
    },
}

/// Key presses a session reacts to. Anything else arrives as `Other`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    F5,
    Plus,
    Minus,
    Other,
}
