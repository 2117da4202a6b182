use std::any::Any;
use std::sync::Arc;

use lateral_primitives::DrawerConfig;
use parking_lot::Mutex;

use crate::contract::DrawerView;

/// The physical panel the host drives.
///
/// Implemented by frontends. `open`/`close` change visibility only;
/// occupancy of the slot is the host's business. `apply_chrome` receives
/// the full merged configuration on every push.
pub trait DrawerSurface: Send + Sync {
	fn open(&self);
	fn close(&self);
	fn apply_chrome(&self, config: &DrawerConfig);
}

struct Slot {
	occupant: Option<Box<dyn DrawerView>>,
	generation: u64,
}

/// Handle to the single slot a workflow instance occupies.
///
/// Cheaply clonable; the surface side keeps one clone to render the
/// occupant, the host keeps another as the sole writer. At most one
/// instance is live at any time, and installing a replacement bumps the
/// mount generation.
#[derive(Clone)]
pub struct MountPoint {
	slot: Arc<Mutex<Slot>>,
}

impl Default for MountPoint {
	fn default() -> Self {
		Self::new()
	}
}

impl MountPoint {
	pub fn new() -> Self {
		Self {
			slot: Arc::new(Mutex::new(Slot {
				occupant: None,
				generation: 0,
			})),
		}
	}

	pub fn is_occupied(&self) -> bool {
		self.slot.lock().occupant.is_some()
	}

	/// Number of installs so far; the Nth mount leaves this at N.
	pub fn generation(&self) -> u64 {
		self.slot.lock().generation
	}

	pub fn occupant_name(&self) -> Option<&'static str> {
		self.slot.lock().occupant.as_ref().map(|view| view.name())
	}

	/// Runs `f` against the current occupant.
	pub fn with_occupant<R>(&self, f: impl FnOnce(&mut dyn DrawerView) -> R) -> Option<R> {
		let mut slot = self.slot.lock();
		slot.occupant.as_deref_mut().map(f)
	}

	/// Downcasting variant of [`Self::with_occupant`] for a known view type.
	pub fn with_view<V: DrawerView, R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R> {
		self.with_occupant(|view| {
			let any: &mut dyn Any = view;
			any.downcast_mut::<V>().map(f)
		})
		.flatten()
	}

	/// Drops the current occupant, if any.
	///
	/// The occupant is released outside the slot lock so its drop glue may
	/// reenter the host.
	pub(crate) fn clear(&self) {
		let previous = self.slot.lock().occupant.take();
		drop(previous);
	}

	/// Installs a freshly created view, bumping the mount generation.
	pub(crate) fn install(&self, view: Box<dyn DrawerView>) {
		let previous = {
			let mut slot = self.slot.lock();
			slot.generation += 1;
			slot.occupant.replace(view)
		};
		drop(previous);
	}
}
