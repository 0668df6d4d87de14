//! Transient key bindings for an open session.

use crate::key::{Key, KeyCode};
use crate::shortcut::ShortcutIndex;

/// Session action resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
	/// Confirm the row the native popup currently highlights.
	Confirm,
	/// Dismiss without selecting.
	Cancel,
	/// Select the bound item directly, bypassing the highlight.
	Jump(usize),
}

/// Binding table installed for the lifetime of one session.
///
/// Only confirm, cancel, and bound jump characters are intercepted; any
/// other key is reported unconsumed so the host popup's native handling
/// (highlight movement, paging) stays in charge. The table lives inside the
/// session, so closing the session removes every binding with it.
#[derive(Debug, Default, Clone)]
pub struct KeyBindings {
	shortcuts: ShortcutIndex,
}

impl KeyBindings {
	/// Bindings over the session's shortcut index.
	pub fn build(shortcuts: ShortcutIndex) -> Self {
		Self { shortcuts }
	}

	/// Resolves a key press; `None` means not intercepted.
	pub fn dispatch(&self, key: Key) -> Option<MenuAction> {
		// Shift is part of the character itself; only ctrl/alt disqualify.
		if key.modifiers.ctrl || key.modifiers.alt {
			return None;
		}
		match key.code {
			KeyCode::Enter => Some(MenuAction::Confirm),
			KeyCode::Escape => Some(MenuAction::Cancel),
			KeyCode::Char(c) => self.shortcuts.get(c).map(MenuAction::Jump),
			_ => None,
		}
	}

	/// Characters this table claims, for hosts that route keys selectively.
	pub fn bound_chars(&self) -> impl Iterator<Item = char> + '_ {
		self.shortcuts.chars()
	}
}
