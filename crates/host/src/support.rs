//! Shared test doubles: a recording surface and minimal workflow views.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lateral_primitives::DrawerConfig;
use parking_lot::Mutex;

use crate::contract::{DrawerView, ViewLink};
use crate::data::ViewData;
use crate::surface::DrawerSurface;

/// Everything a surface can observe, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
	Opened,
	Closed,
	Chrome {
		title: String,
		first_text: String,
		first_loading: bool,
		first_disabled: bool,
		second_text: Option<String>,
	},
}

/// Surface double recording every visibility and chrome call.
#[derive(Default)]
pub struct RecordingSurface {
	events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn events(&self) -> Vec<SurfaceEvent> {
		self.events.lock().clone()
	}

	pub fn chrome_titles(&self) -> Vec<String> {
		self.events
			.lock()
			.iter()
			.filter_map(|event| match event {
				SurfaceEvent::Chrome { title, .. } => Some(title.clone()),
				_ => None,
			})
			.collect()
	}

	pub fn last_chrome(&self) -> Option<SurfaceEvent> {
		self.events
			.lock()
			.iter()
			.rev()
			.find(|event| matches!(event, SurfaceEvent::Chrome { .. }))
			.cloned()
	}
}

impl DrawerSurface for RecordingSurface {
	fn open(&self) {
		self.events.lock().push(SurfaceEvent::Opened);
	}

	fn close(&self) {
		self.events.lock().push(SurfaceEvent::Closed);
	}

	fn apply_chrome(&self, config: &DrawerConfig) {
		self.events.lock().push(SurfaceEvent::Chrome {
			title: config.title.clone(),
			first_text: config.footer.first.text.clone(),
			first_loading: config.footer.first.loading,
			first_disabled: config.footer.first.disabled,
			second_text: config.footer.second.as_ref().map(|b| b.text.clone()),
		});
	}
}

/// Minimal workflow that stashes its link and whatever data it recognizes.
pub struct ProbeView {
	pub link: ViewLink,
	pub order_id: Option<u64>,
	pub label: Option<String>,
}

impl ProbeView {
	pub fn with_link(link: ViewLink) -> Self {
		Self {
			link,
			order_id: None,
			label: None,
		}
	}
}

impl DrawerView for ProbeView {
	fn create(link: ViewLink) -> Self {
		Self::with_link(link)
	}

	fn name(&self) -> &'static str {
		"probe"
	}

	fn apply_data(&mut self, data: &mut ViewData) {
		self.order_id = data.take("order_id");
		self.label = data.take("label");
	}
}

/// Workflow that bumps an injected counter when it is dropped.
pub struct CountingView {
	dropped: Option<Arc<AtomicUsize>>,
}

impl DrawerView for CountingView {
	fn create(_link: ViewLink) -> Self {
		Self { dropped: None }
	}

	fn name(&self) -> &'static str {
		"counting"
	}

	fn apply_data(&mut self, data: &mut ViewData) {
		self.dropped = data.take("drop_counter");
	}
}

impl Drop for CountingView {
	fn drop(&mut self) {
		if let Some(counter) = &self.dropped {
			counter.fetch_add(1, Ordering::SeqCst);
		}
	}
}
