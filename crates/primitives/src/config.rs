use crate::action::ActionDescriptor;

/// Size class hint for the drawer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerSize {
	Small,
	Medium,
	Large,
}

/// Footer row of one or two buttons.
///
/// The first button is always present once a configuration exists; the host
/// never synthesizes a meaningful default for it.
#[derive(Debug, Clone)]
pub struct FooterConfig {
	pub first: ActionDescriptor,
	pub second: Option<ActionDescriptor>,
}

impl FooterConfig {
	pub fn single(first: ActionDescriptor) -> Self {
		Self { first, second: None }
	}

	pub fn pair(first: ActionDescriptor, second: ActionDescriptor) -> Self {
		Self {
			first,
			second: Some(second),
		}
	}
}

/// Chrome configuration for the drawer surface: title, size hint, footer.
#[derive(Debug, Clone)]
pub struct DrawerConfig {
	pub title: String,
	pub size: Option<DrawerSize>,
	pub footer: FooterConfig,
}

impl DrawerConfig {
	pub fn new(title: impl Into<String>, footer: FooterConfig) -> Self {
		Self {
			title: title.into(),
			size: None,
			footer,
		}
	}

	pub fn with_size(mut self, size: DrawerSize) -> Self {
		self.size = Some(size);
		self
	}

	/// Applies a shallow top-level merge.
	///
	/// A present `footer` replaces the footer wholesale; the previous second
	/// button is lost unless the patch re-supplies it. Absent patch fields
	/// leave the current value untouched, so a patch cannot clear `size`
	/// back to absent.
	pub fn merge(&mut self, patch: ConfigPatch) {
		if let Some(title) = patch.title {
			self.title = title;
		}
		if let Some(size) = patch.size {
			self.size = Some(size);
		}
		if let Some(footer) = patch.footer {
			self.footer = footer;
		}
	}
}

/// Partial configuration accepted by [`DrawerConfig::merge`].
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
	pub title: Option<String>,
	pub size: Option<DrawerSize>,
	pub footer: Option<FooterConfig>,
}

impl ConfigPatch {
	pub fn title(title: impl Into<String>) -> Self {
		Self {
			title: Some(title.into()),
			..Self::default()
		}
	}

	pub fn size(size: DrawerSize) -> Self {
		Self {
			size: Some(size),
			..Self::default()
		}
	}

	pub fn footer(footer: FooterConfig) -> Self {
		Self {
			footer: Some(footer),
			..Self::default()
		}
	}
}
