use std::fmt;
use std::sync::Arc;

/// Handler invoked when a footer button is activated.
pub type ActionFn = Arc<dyn Fn() + Send + Sync>;

/// Declarative description of a single footer button.
///
/// The drawer host never interprets the handler; it only carries the
/// descriptor to the surface, which invokes [`ActionDescriptor::activate`]
/// on click.
#[derive(Clone)]
pub struct ActionDescriptor {
	pub text: String,
	pub on_activate: ActionFn,
	pub loading: bool,
	pub disabled: bool,
}

impl ActionDescriptor {
	pub fn new(text: impl Into<String>, on_activate: impl Fn() + Send + Sync + 'static) -> Self {
		Self {
			text: text.into(),
			on_activate: Arc::new(on_activate),
			loading: false,
			disabled: false,
		}
	}

	/// Button whose handler does nothing.
	///
	/// Used by workflows that drive their primary action through config
	/// updates rather than through the button itself.
	pub fn inert(text: impl Into<String>) -> Self {
		Self::new(text, || {})
	}

	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Invokes the click handler.
	pub fn activate(&self) {
		(self.on_activate)();
	}
}

impl fmt::Debug for ActionDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActionDescriptor")
			.field("text", &self.text)
			.field("on_activate", &"<fn>")
			.field("loading", &self.loading)
			.field("disabled", &self.disabled)
			.finish()
	}
}
