//! Exactly-once outcome delivery.

use tracing::trace;

use crate::host::MenuHost;
use crate::item::RawItem;

/// Outcome of a menu session.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome {
	/// The user confirmed an item, by highlight or jump key.
	Selected {
		/// Position of the item in the session's sequence.
		index: usize,
		/// The original input element, verbatim.
		item: RawItem,
	},
	/// The user dismissed the menu without selecting.
	Cancelled,
}

impl MenuOutcome {
	/// Selected index; `-1` for cancellation.
	pub fn index(&self) -> i64 {
		match self {
			Self::Selected { index, .. } => *index as i64,
			Self::Cancelled => -1,
		}
	}

	/// Selected item; `None` for cancellation.
	pub fn item(&self) -> Option<&RawItem> {
		match self {
			Self::Selected { item, .. } => Some(item),
			Self::Cancelled => None,
		}
	}
}

/// One-shot latch around the host callback.
///
/// Several exit paths can reach for the same session's outcome: the confirm
/// handler, a jump key, the cancel handler, a forced close. Whichever gets
/// here first performs the invocation; every later attempt is a silent no-op,
/// so the callback observes exactly one outcome per session.
#[derive(Debug)]
pub struct CallbackGate {
	callback: String,
	fired: bool,
}

impl CallbackGate {
	/// Gate for the named host callback.
	pub fn new(callback: impl Into<String>) -> Self {
		Self {
			callback: callback.into(),
			fired: false,
		}
	}

	/// Returns true once an outcome has been delivered.
	pub fn has_fired(&self) -> bool {
		self.fired
	}

	/// Delivers `outcome` unless one was already delivered.
	pub fn fire(&mut self, host: &mut dyn MenuHost, outcome: MenuOutcome) {
		if self.fired {
			trace!(callback = %self.callback, "duplicate menu outcome suppressed");
			return;
		}
		self.fired = true;
		host.invoke_callback(&self.callback, outcome);
	}

	/// Delivers the cancellation outcome.
	pub fn fire_cancel(&mut self, host: &mut dyn MenuHost) {
		self.fire(host, MenuOutcome::Cancelled);
	}
}
