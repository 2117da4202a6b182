use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

/// Outcome observed on a [`CompletionHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
	/// The mounted workflow raised its success signal.
	Completed,
	/// A later `mount` replaced the workflow before it signalled success.
	Abandoned,
}

/// Caller-facing half of one mount cycle's completion channel.
///
/// The channel carries no payload; it only delivers the fact of completion.
/// Callers typically wait on it to refresh a list after the workflow
/// finishes.
#[derive(Debug)]
pub struct CompletionHandle {
	rx: oneshot::Receiver<()>,
	settled: Option<Completion>,
}

impl CompletionHandle {
	/// Waits until the channel settles.
	pub async fn wait(self) -> Completion {
		if let Some(settled) = self.settled {
			return settled;
		}
		match self.rx.await {
			Ok(()) => Completion::Completed,
			Err(_) => Completion::Abandoned,
		}
	}

	/// Non-blocking check, for callers polling from a synchronous frame.
	///
	/// The settlement is remembered, so repeated polls keep reporting the
	/// same outcome.
	pub fn try_settled(&mut self) -> Option<Completion> {
		use oneshot::error::TryRecvError;

		if self.settled.is_none() {
			self.settled = match self.rx.try_recv() {
				Ok(()) => Some(Completion::Completed),
				Err(TryRecvError::Empty) => None,
				Err(TryRecvError::Closed) => Some(Completion::Abandoned),
			};
		}
		self.settled
	}
}

/// Write side of one mount cycle's channel, retained by the host.
///
/// The sender sits behind a shared `Option` so that firing and abandonment
/// are both take-once operations: whichever happens first consumes the
/// sender, and everything after it is a no-op.
#[derive(Clone)]
pub(crate) struct CompletionGate {
	tx: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl CompletionGate {
	/// Creates a fresh channel for one mount cycle.
	pub(crate) fn channel() -> (Self, CompletionHandle) {
		let (tx, rx) = oneshot::channel();
		let gate = Self {
			tx: Arc::new(Mutex::new(Some(tx))),
		};
		(gate, CompletionHandle { rx, settled: None })
	}

	/// Fires the channel. Only the first call has an effect.
	pub(crate) fn fire(&self) -> bool {
		match self.tx.lock().take() {
			Some(tx) => {
				// The caller may have dropped its handle; that is fine.
				let _ = tx.send(());
				true
			}
			None => false,
		}
	}

	/// Drops the sender without firing; the handle settles as abandoned.
	pub(crate) fn abandon(&self) {
		self.tx.lock().take();
	}
}

/// Workflow-facing success trigger.
///
/// Clonable so a workflow can hand it to whatever async work gates its
/// completion. Raising it more than once, or raising it after the workflow
/// was replaced by a later mount, is a silent no-op.
#[derive(Clone)]
pub struct SuccessSignal {
	gate: CompletionGate,
}

impl SuccessSignal {
	pub(crate) fn new(gate: CompletionGate) -> Self {
		Self { gate }
	}

	/// Raises the success signal.
	pub fn raise(&self) {
		if self.gate.fire() {
			tracing::trace!("drawer.success");
		}
	}
}
