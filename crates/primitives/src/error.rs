use thiserror::Error;

/// Call-ordering errors surfaced by the drawer host.
///
/// Both variants indicate a wiring bug in the caller, not a runtime
/// condition, and propagate synchronously from the offending operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
	/// A view was mounted before the host was attached to a surface.
	#[error("drawer host is not attached to a surface")]
	NotReady,
	/// A config update arrived before any configuration was established.
	#[error("no drawer configuration has been established")]
	NotInitialized,
}
