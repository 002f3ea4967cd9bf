use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Keycode, Scancode};

/// A logical direction, independent of which key produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Arrow keys and WASD
    pub fn from_keycode(keycode: Keycode) -> Option<Self> {
        match keycode {
            Keycode::Up | Keycode::W => Some(Direction::Up),
            Keycode::Down | Keycode::S => Some(Direction::Down),
            Keycode::Left | Keycode::A => Some(Direction::Left),
            Keycode::Right | Keycode::D => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Movement from the keys currently held, as `(dx, dy)` in -1..=1
///
/// Opposite keys cancel out. `is_pressed` is usually
/// `|s| keyboard_state.is_scancode_pressed(s)`.
pub fn held_direction(is_pressed: impl Fn(Scancode) -> bool) -> (i32, i32) {
    let axis = |negative: [Scancode; 2], positive: [Scancode; 2]| {
        let neg = negative.iter().any(|&s| is_pressed(s)) as i32;
        let pos = positive.iter().any(|&s| is_pressed(s)) as i32;
        pos - neg
    };

    (
        axis([Scancode::Left, Scancode::A], [Scancode::Right, Scancode::D]),
        axis([Scancode::Up, Scancode::W], [Scancode::Down, Scancode::S]),
    )
}

/// High-level actions produced from raw SDL2 events
///
/// Decouples the views from keycodes: each view only matches on the
/// actions it cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Navigate(Direction),
    Confirm,
    Back,
    Resized(u32, u32),
    Quit,
}

/// Menu/view action bound to a pressed key
pub fn action_for_key(keycode: Keycode) -> Option<InputAction> {
    match keycode {
        Keycode::Escape => Some(InputAction::Back),
        Keycode::Return | Keycode::Space => Some(InputAction::Confirm),
        other => Direction::from_keycode(other).map(InputAction::Navigate),
    }
}

/// Translates one SDL2 event into an action, if it maps to one
pub fn translate(event: &Event) -> Option<InputAction> {
    match event {
        Event::Quit { .. } => Some(InputAction::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => action_for_key(*keycode),
        Event::Window {
            win_event: WindowEvent::SizeChanged(w, h),
            ..
        } => Some(InputAction::Resized((*w).max(0) as u32, (*h).max(0) as u32)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_map_to_directions() {
        assert_eq!(Direction::from_keycode(Keycode::Up), Some(Direction::Up));
        assert_eq!(Direction::from_keycode(Keycode::W), Some(Direction::Up));
        assert_eq!(Direction::from_keycode(Keycode::A), Some(Direction::Left));
        assert_eq!(Direction::from_keycode(Keycode::Right), Some(Direction::Right));
        assert_eq!(Direction::from_keycode(Keycode::Q), None);
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(action_for_key(Keycode::Escape), Some(InputAction::Back));
        assert_eq!(action_for_key(Keycode::Return), Some(InputAction::Confirm));
        assert_eq!(action_for_key(Keycode::Space), Some(InputAction::Confirm));
        assert_eq!(
            action_for_key(Keycode::Down),
            Some(InputAction::Navigate(Direction::Down))
        );
        assert_eq!(action_for_key(Keycode::F1), None);
    }

    #[test]
    fn test_translate_quit() {
        assert_eq!(translate(&Event::Quit { timestamp: 0 }), Some(InputAction::Quit));
    }

    fn size_changed(w: i32, h: i32) -> Event {
        Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::SizeChanged(w, h),
        }
    }

    #[test]
    fn test_translate_window_resize() {
        assert_eq!(
            translate(&size_changed(1024, 768)),
            Some(InputAction::Resized(1024, 768))
        );
        // Negative sizes are clamped rather than wrapped
        assert_eq!(translate(&size_changed(-5, 300)), Some(InputAction::Resized(0, 300)));
    }

    #[test]
    fn test_other_window_events_are_ignored() {
        let event = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::FocusGained,
        };
        assert_eq!(translate(&event), None);
    }

    #[test]
    fn test_held_direction() {
        assert_eq!(held_direction(|_| false), (0, 0));
        assert_eq!(held_direction(|s| s == Scancode::W), (0, -1));
        assert_eq!(held_direction(|s| s == Scancode::Right || s == Scancode::S), (1, 1));
        // Opposite keys cancel
        assert_eq!(held_direction(|s| s == Scancode::A || s == Scancode::Right), (0, 0));
    }
}
