//! Menu session state machine.
//!
//! # Mental model
//!
//! * A controller is `Closed` or `Open`; the session field is the state.
//! * `open` validates input, allocates host resources, and stores the one
//!   active session. `handle_key` routes presses through the session's
//!   binding table. Every exit path funnels into `finish`, which closes the
//!   session and delivers the outcome through its gate.
//! * Ordering: handler installation happens at open, removal happens at
//!   close, and close runs to completion before the callback fires, so the
//!   callback never observes the overlay as still present.

use tracing::debug;

use crate::config::MenuConfig;
use crate::dispatch::{KeyBindings, MenuAction};
use crate::error::MenuError;
use crate::gate::{CallbackGate, MenuOutcome};
use crate::host::MenuHost;
use crate::item::normalize;
use crate::key::Key;
use crate::session::MenuSession;
use crate::shortcut::ShortcutIndex;

/// Orchestrates the open → interact → close → callback flow.
///
/// Owns the single optional active session; all transitions go through this
/// type, which makes the one-session-at-a-time invariant enforceable.
#[derive(Default)]
pub struct MenuController {
	session: Option<MenuSession>,
}

impl MenuController {
	/// Controller with no active session.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true while a session is active.
	pub fn is_open(&self) -> bool {
		self.session.is_some()
	}

	/// The active session, if any.
	pub fn session(&self) -> Option<&MenuSession> {
		self.session.as_ref()
	}

	/// Opens a menu session.
	///
	/// Returns immediately; the outcome arrives later through exactly one
	/// invocation of the named host callback. Opening with an empty item
	/// list is a complete no-op: no overlay, no focus change, no callback.
	///
	/// # Errors
	///
	/// * [`MenuError::ReentrantOpen`] when a session is already active.
	/// * [`MenuError::InvalidItem`] for malformed item records.
	/// * [`MenuError::OverlayCreation`] when the host cannot allocate the
	///   overlay; origin focus is restored and the open behaves as if it
	///   never started.
	pub fn open(&mut self, host: &mut dyn MenuHost, config: MenuConfig) -> Result<(), MenuError> {
		if self.is_open() {
			return Err(MenuError::ReentrantOpen);
		}
		if config.items.is_empty() {
			return Ok(());
		}

		let items = normalize(config.items)?;
		let bindings = KeyBindings::build(ShortcutIndex::build(&items));
		let lines = MenuSession::display_lines(&items, config.icon.as_ref());

		let origin_focus = host.capture_focus();
		let Some(overlay) = host.create_overlay(&lines) else {
			host.restore_focus(origin_focus);
			return Err(MenuError::OverlayCreation);
		};

		debug!(items = items.len(), callback = %config.callback, "action menu opened");
		self.session = Some(MenuSession::new(
			origin_focus,
			overlay,
			items,
			bindings,
			CallbackGate::new(config.callback),
		));
		Ok(())
	}

	/// Routes a key press into the active session.
	///
	/// Returns whether the key was consumed. Unbound keys (navigation
	/// included) are left to the host popup's native handling. No-op when
	/// nothing is open.
	pub fn handle_key(&mut self, host: &mut dyn MenuHost, key: Key) -> bool {
		let Some(session) = self.session.as_ref() else {
			return false;
		};
		let Some(action) = session.bindings().dispatch(key) else {
			return false;
		};

		let outcome = match action {
			MenuAction::Confirm => {
				// The highlight is host-owned; clamp rather than trust it.
				let index = host.highlighted_index().min(session.items().len() - 1);
				selected(session, index)
			}
			MenuAction::Jump(index) => selected(session, index),
			MenuAction::Cancel => MenuOutcome::Cancelled,
		};
		self.finish(host, outcome);
		true
	}

	/// Cancels the active session, if any.
	///
	/// Escape-equivalent entry point for hosts that dismiss the popup
	/// without a key press (blur, window close). No-op when nothing is open.
	pub fn cancel(&mut self, host: &mut dyn MenuHost) {
		self.finish(host, MenuOutcome::Cancelled);
	}

	/// Closes the session and delivers `outcome` through its gate.
	///
	/// Teardown runs to completion first, so the callback observes the
	/// editor with focus restored and the overlay gone.
	fn finish(&mut self, host: &mut dyn MenuHost, outcome: MenuOutcome) {
		let Some(mut session) = self.session.take() else {
			return;
		};
		session.close(host);
		debug!(index = outcome.index(), "action menu closed");
		session.gate_mut().fire(host, outcome);
	}
}

fn selected(session: &MenuSession, index: usize) -> MenuOutcome {
	MenuOutcome::Selected {
		index,
		item: session.items()[index].source().clone(),
	}
}
