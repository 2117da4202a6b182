use std::any::Any;

use lateral_primitives::{ConfigPatch, HostError};

use crate::completion::SuccessSignal;
use crate::data::ViewData;
use crate::host::DrawerHost;

/// Contract every mountable workflow satisfies.
///
/// Views are constructed by the host through [`DrawerView::create`], an
/// explicit factory standing in for construct-by-reference: pass a type to
/// [`DrawerHost::mount`], get an instance, inject named fields. The `Any`
/// supertrait lets surface code downcast the occupant back to a concrete
/// view type.
pub trait DrawerView: Any + Send {
	/// Constructs the view bound to its host connection.
	fn create(link: ViewLink) -> Self
	where
		Self: Sized;

	/// Short name used in lifecycle logs.
	fn name(&self) -> &'static str;

	/// Receives the caller-supplied data bag.
	///
	/// Take the keys this view recognizes; everything else is dropped with
	/// the bag. Unknown or mistyped keys on the caller's side surface here
	/// as `None`, never as an error.
	fn apply_data(&mut self, data: &mut ViewData) {
		let _ = data;
	}
}

/// Capabilities a mounted workflow is constructed with.
///
/// The link carries the workflow's side of the contract: raise the caller's
/// completion signal, push chrome updates reflecting its own in-flight
/// state, and dismiss the drawer. Clonable so async work spawned by the
/// workflow can carry it along.
#[derive(Clone)]
pub struct ViewLink {
	host: DrawerHost,
	success: SuccessSignal,
}

impl ViewLink {
	pub(crate) fn new(host: DrawerHost, success: SuccessSignal) -> Self {
		Self { host, success }
	}

	/// Fires the caller's completion channel. Only the first call across
	/// the mount cycle has an effect.
	pub fn signal_success(&self) {
		self.success.raise();
	}

	/// Standalone success trigger, for handing to deferred work.
	pub fn success_signal(&self) -> SuccessSignal {
		self.success.clone()
	}

	/// Pushes a partial chrome update through the host.
	pub fn update_config(&self, patch: ConfigPatch) -> Result<(), HostError> {
		self.host.update_config(patch)
	}

	/// Asks the host to visually close the drawer.
	pub fn close(&self) {
		self.host.close();
	}

	pub fn host(&self) -> &DrawerHost {
		&self.host
	}
}
