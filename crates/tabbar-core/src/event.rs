#![forbid(unsafe_code)]

//! Pointer input types.
//!
//! Coordinates are cell positions inside the rasterized chart canvas
//! (0-indexed, origin at the top-left). The engine only reacts to clicks;
//! the other kinds exist so a backend can forward its raw stream unfiltered.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// Modifier that turns a selection into an additive one.
    pub const ADDITIVE: Self = Self::SHIFT;

    /// Whether the additive-selection modifier is held.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        self.contains(Self::ADDITIVE)
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of mouse event.
    pub kind: MouseEventKind,

    /// X coordinate (column).
    pub x: u16,

    /// Y coordinate (row).
    pub y: u16,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a new mouse event without modifiers.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Left-button press at `(x, y)`.
    #[must_use]
    pub const fn click(x: u16, y: u16) -> Self {
        Self::new(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    /// Create a mouse event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether this event counts as a click for selection purposes.
    ///
    /// Only a left-button press qualifies.
    #[must_use]
    pub const fn is_click(&self) -> bool {
        matches!(self.kind, MouseEventKind::Down(MouseButton::Left))
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),

    /// Mouse button released.
    Up(MouseButton),

    /// Mouse moved (no button pressed).
    Moved,

    /// Mouse wheel scrolled up.
    ScrollUp,

    /// Mouse wheel scrolled down.
    ScrollDown,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_is_additive() {
        assert!(Modifiers::SHIFT.is_additive());
        assert!((Modifiers::SHIFT | Modifiers::CTRL).is_additive());
        assert!(!Modifiers::CTRL.is_additive());
        assert!(!Modifiers::default().is_additive());
    }

    #[test]
    fn only_left_press_is_click() {
        assert!(MouseEvent::click(1, 2).is_click());
        assert!(!MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 1, 2).is_click());
        assert!(!MouseEvent::new(MouseEventKind::Down(MouseButton::Right), 1, 2).is_click());
        assert!(!MouseEvent::new(MouseEventKind::Moved, 1, 2).is_click());
    }

    #[test]
    fn with_modifiers_keeps_position() {
        let event = MouseEvent::click(4, 9).with_modifiers(Modifiers::SHIFT);
        assert_eq!(event.position(), (4, 9));
        assert_eq!(event.modifiers, Modifiers::SHIFT);
    }
}
