//! Named, type-erased initial data for mounted views.
//!
//! Callers fill a [`ViewData`] bag with whatever fields the target view
//! expects; the view takes the keys it recognizes during
//! [`DrawerView::apply_data`]. Keys the view never asks for are silently
//! dropped with the bag, and a key read with the wrong type yields `None`.
//! The host validates nothing here.
//!
//! [`DrawerView::apply_data`]: crate::contract::DrawerView::apply_data

use std::any::Any;
use std::collections::HashMap;

/// Type-erased bag of named values.
#[derive(Default)]
pub struct ViewData {
	inner: HashMap<&'static str, Box<dyn Any + Send>>,
}

impl ViewData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, key: &'static str, value: impl Any + Send) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts a value, replacing any existing value under the same key.
	pub fn insert(&mut self, key: &'static str, value: impl Any + Send) {
		self.inner.insert(key, Box::new(value));
	}

	/// Returns a reference to the value for `key`, if present with type `T`.
	pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
		self.inner.get(key)?.downcast_ref()
	}

	/// Removes and returns the value for `key`.
	///
	/// A type mismatch leaves the value in place and returns `None`.
	pub fn take<T: Any>(&mut self, key: &str) -> Option<T> {
		if !self.inner.get(key)?.is::<T>() {
			return None;
		}
		let boxed = self.inner.remove(key)?;
		boxed.downcast().ok().map(|value| *value)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}
}
