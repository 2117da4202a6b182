#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Dynamic view host for the lateral drawer.
//!
//! Any feature screen can mount an arbitrary, independently-authored
//! workflow into the single shared drawer slot, inject named data into it,
//! and observe its completion through a one-shot signal. The mounted
//! workflow drives the shared chrome (title, size hint, footer buttons)
//! back through the host as its own state evolves.
//!
//! # Main Types
//!
//! - [`DrawerHost`] - stateful coordinator bound to one surface and one slot
//! - [`DrawerView`] - contract every mountable workflow implements
//! - [`ViewLink`] - capabilities handed to a workflow at construction
//! - [`CompletionHandle`] - one-shot completion signal returned by `mount`
//!
//! # Architecture
//!
//! ```text
//! caller (list/detail screen)
//! └── DrawerHost::mount::<V>(data, config) -> CompletionHandle
//!     ├── MountPoint                       // single-occupancy slot
//!     │   └── Box<dyn DrawerView>          // the mounted workflow
//!     └── Arc<dyn DrawerSurface>           // panel chrome + open/close
//! ```
//!
//! The host executes synchronously with respect to its caller; the only
//! asynchronous element is the completion channel, which settles whenever
//! the mounted workflow raises its success signal.

/// One-shot completion channel shared between caller and workflow.
pub mod completion;
/// The capability contract mounted workflows implement and consume.
pub mod contract;
/// Named, type-erased initial data injection.
pub mod data;
/// The orchestrator.
pub mod host;
/// Surface abstraction and the single-occupancy mount point.
pub mod surface;

#[cfg(test)]
mod support;

pub use completion::{Completion, CompletionHandle, SuccessSignal};
pub use contract::{DrawerView, ViewLink};
pub use data::ViewData;
pub use host::DrawerHost;
pub use surface::{DrawerSurface, MountPoint};
