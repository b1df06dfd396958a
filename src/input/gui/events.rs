use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{Key as WinitKey, KeyCode, ModifiersState, NamedKey, PhysicalKey};

use crate::controllers::interactive::events::input_event::{Key, Modifiers};

/// Pixels of trackpad scroll that count as one wheel notch.
const PIXELS_PER_LINE: f64 = 40.0;

#[must_use]
pub fn modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        control: state.control_key(),
        shift: state.shift_key(),
        alt: state.alt_key(),
    }
}

/// Vertical scroll amount in wheel notches. Positive is away from the user.
#[must_use]
pub fn scroll_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
    }
}

/// Maps a key press to a session key. Releases map to `None`.
#[must_use]
pub fn key(logical: &WinitKey, physical: PhysicalKey, state: ElementState) -> Option<Key> {
    if state != ElementState::Pressed {
        return None;
    }

    let key = match (logical, physical) {
        (WinitKey::Named(NamedKey::Escape), _) => Key::Escape,
        (WinitKey::Named(NamedKey::F5), _) => Key::F5,
        (_, PhysicalKey::Code(KeyCode::NumpadAdd)) => Key::Plus,
        (_, PhysicalKey::Code(KeyCode::NumpadSubtract)) => Key::Minus,
        (WinitKey::Character(text), _) if text.as_str() == "+" || text.as_str() == "=" => Key::Plus,
        (WinitKey::Character(text), _) if text.as_str() == "-" => Key::Minus,
        _ => Key::Other,
    };

    Some(key)
}
