//! Keyboard input handling

use game_core::Key;

/// Resolve a key from the DOM `key` name, falling back to the legacy code
pub fn key_from_parts(name: &str, code: u32) -> Option<Key> {
    Key::from_name(name).or_else(|| Key::from_code(code))
}

/// Extract the steering key from a keyboard event
#[cfg(target_arch = "wasm32")]
pub fn key_from_event(event: &web_sys::KeyboardEvent) -> Option<Key> {
    key_from_parts(&event.key(), event.key_code())
}
