use std::sync::{Arc, Weak};

use lateral_primitives::{ActionDescriptor, ConfigPatch, DrawerConfig, FooterConfig, HostError};
use parking_lot::Mutex;

use crate::completion::{CompletionGate, CompletionHandle, SuccessSignal};
use crate::contract::{DrawerView, ViewLink};
use crate::data::ViewData;
use crate::surface::{DrawerSurface, MountPoint};

struct Inner {
	surface: Option<Arc<dyn DrawerSurface>>,
	mount_point: Option<MountPoint>,
	config: Option<DrawerConfig>,
	gate: Option<CompletionGate>,
}

/// Stateful coordinator for the lateral drawer.
///
/// One host binds to one surface and one mount point and enforces single
/// occupancy of the slot. Cheaply clonable; screens receive a clone
/// explicitly rather than reaching for a process-wide instance, and the
/// mounted workflow reaches back in through its [`ViewLink`].
///
/// All operations execute synchronously with respect to the caller. The
/// internal lock is never held across a surface call or a handler, so
/// surfaces and footer actions may reenter the host.
#[derive(Clone)]
pub struct DrawerHost {
	inner: Arc<Mutex<Inner>>,
}

impl Default for DrawerHost {
	fn default() -> Self {
		Self::new()
	}
}

impl DrawerHost {
	pub fn new() -> Self {
		Self {
			inner: Arc::new(Mutex::new(Inner {
				surface: None,
				mount_point: None,
				config: None,
				gate: None,
			})),
		}
	}

	/// Binds the host to a surface and mount point.
	///
	/// Called by the physical panel when it initializes; calling again
	/// simply replaces the stored references. Pushes the current chrome to
	/// the new surface, or the fallback configuration until a mount has
	/// supplied a real one.
	pub fn attach(&self, surface: Arc<dyn DrawerSurface>, mount_point: MountPoint) {
		let current = {
			let mut inner = self.inner.lock();
			inner.surface = Some(surface.clone());
			inner.mount_point = Some(mount_point);
			inner.config.clone()
		};
		tracing::debug!(configured = current.is_some(), "drawer.attach");
		let chrome = current.unwrap_or_else(|| self.fallback_config());
		surface.apply_chrome(&chrome);
	}

	/// Mounts a workflow into the slot, replacing any current occupant.
	///
	/// # Ordering
	///
	/// 1. The previous occupant is discarded and its still-pending
	///    completion channel abandoned, before anything new exists.
	/// 2. The view is constructed and fed the caller's data bag.
	/// 3. The configuration, if given, becomes current and reaches the
	///    chrome.
	/// 4. The surface opens last; it never opens before the new instance
	///    is installed.
	///
	/// # Errors
	///
	/// [`HostError::NotReady`] when no surface has attached yet.
	pub fn mount<V: DrawerView>(
		&self,
		mut data: ViewData,
		config: Option<DrawerConfig>,
	) -> Result<CompletionHandle, HostError> {
		let (surface, mount_point, previous_gate) = {
			let mut inner = self.inner.lock();
			match (inner.surface.clone(), inner.mount_point.clone()) {
				(Some(surface), Some(mount_point)) => (surface, mount_point, inner.gate.take()),
				_ => {
					tracing::warn!("drawer.mount rejected: host not attached");
					return Err(HostError::NotReady);
				}
			}
		};

		// A superseding mount abandons the pending channel; it must never
		// fire a success after this point.
		if let Some(gate) = previous_gate {
			gate.abandon();
		}
		mount_point.clear();

		let (gate, handle) = CompletionGate::channel();
		let link = ViewLink::new(self.clone(), SuccessSignal::new(gate.clone()));
		let mut view = Box::new(V::create(link));
		view.apply_data(&mut data);
		let name = view.name();
		mount_point.install(view);

		{
			let mut inner = self.inner.lock();
			inner.gate = Some(gate);
			if let Some(config) = config.as_ref() {
				inner.config = Some(config.clone());
			}
		}
		if let Some(config) = config {
			surface.apply_chrome(&config);
		}
		surface.open();
		tracing::debug!(view = name, generation = mount_point.generation(), "drawer.mount");

		Ok(handle)
	}

	/// Shallow-merges a partial configuration and pushes the result to the
	/// chrome synchronously.
	///
	/// This is how a mounted workflow reflects its own evolving state (a
	/// confirm button's `loading` flag, say) into chrome it does not
	/// render.
	///
	/// # Errors
	///
	/// [`HostError::NotInitialized`] when no configuration exists yet.
	pub fn update_config(&self, patch: ConfigPatch) -> Result<(), HostError> {
		let merged = {
			let mut inner = self.inner.lock();
			let Some(config) = inner.config.as_mut() else {
				tracing::warn!("drawer.update_config rejected: no configuration established");
				return Err(HostError::NotInitialized);
			};
			config.merge(patch);
			config.clone()
		};
		let surface = self.inner.lock().surface.clone();
		tracing::trace!(title = %merged.title, "drawer.update_config");
		if let Some(surface) = surface {
			surface.apply_chrome(&merged);
		}
		Ok(())
	}

	/// Requests the surface to visually close.
	///
	/// Presentation only: occupancy, configuration, and any pending
	/// completion are untouched. Silent no-op when never attached.
	pub fn close(&self) {
		let surface = self.inner.lock().surface.clone();
		if let Some(surface) = surface {
			tracing::debug!("drawer.close");
			surface.close();
		}
	}

	pub fn is_attached(&self) -> bool {
		let inner = self.inner.lock();
		inner.surface.is_some() && inner.mount_point.is_some()
	}

	pub fn current_config(&self) -> Option<DrawerConfig> {
		self.inner.lock().config.clone()
	}

	/// Chrome shown before any mount has supplied a configuration.
	///
	/// Title "Default" with a single button that closes the host. Never
	/// stored as the current configuration. The action holds only a weak
	/// host reference so chrome retained by a surface cannot keep the host
	/// alive.
	pub fn fallback_config(&self) -> DrawerConfig {
		let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
		let close = ActionDescriptor::new("Close", move || {
			if let Some(inner) = weak.upgrade() {
				DrawerHost { inner }.close();
			}
		});
		DrawerConfig::new("Default", FooterConfig::single(close))
	}
}
