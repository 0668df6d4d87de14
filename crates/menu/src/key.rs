//! Key event model fed into the menu by the host event loop.

/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		ctrl: false,
		alt: true,
		shift: false,
	};

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

/// A single key press delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	/// Which key was pressed.
	pub code: KeyCode,
	/// Modifiers held at press time.
	pub modifiers: Modifiers,
}

impl Key {
	/// Key press with explicit modifiers.
	pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
		Self { code, modifiers }
	}

	/// Unmodified key press.
	pub fn plain(code: KeyCode) -> Self {
		Self::new(code, Modifiers::NONE)
	}

	/// Unmodified character key press.
	pub fn char(c: char) -> Self {
		Self::plain(KeyCode::Char(c))
	}
}

/// Key identity, reduced to what menu dispatch distinguishes.
///
/// Navigation keys are listed so hosts can forward them unchanged; the menu
/// never consumes them, leaving highlight movement to the native popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Enter,
	Escape,
	Char(char),
	Up,
	Down,
	PageUp,
	PageDown,
}
