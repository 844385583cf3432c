//! Host interrupt seam.
//!
//! A reviewed tool does not talk to a UI directly. It hands a batch of JSON
//! payloads to an [`Interrupter`] and suspends until the host delivers the
//! matching batch of responses. The host owns everything between those two
//! points: rendering the request, collecting the human's decision, timeouts,
//! and cancellation.
//!
//! [`InterruptChannel`] is the in-process transport for hosts that live in the
//! same process as the agent (REPLs, tests, embedded runtimes). Each suspended
//! call shows up on the receiver as a [`PendingInterrupt`] carrying a one-shot
//! responder.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

/// Errors from the suspend/resume transport.
#[derive(Debug, thiserror::Error)]
pub enum InterruptError {
    /// The host receiver was dropped before the request could be delivered.
    #[error("interrupt host is no longer listening")]
    HostGone,

    /// The host accepted the request but dropped it without responding.
    #[error("interrupt was dropped without a response")]
    Abandoned,

    /// The suspended caller went away before the response was delivered.
    #[error("interrupt requester is gone")]
    RequesterGone,
}

/// A host-provided suspend/resume primitive.
///
/// `interrupt` hands one batch of payloads to the host and resolves when the
/// host delivers the response batch. The call blocks (cooperatively) for as
/// long as the human takes; any timeout policy belongs to the implementor.
#[async_trait]
pub trait Interrupter: Send + Sync {
    /// Suspend until the host responds to `payloads`.
    async fn interrupt(&self, payloads: Vec<Value>) -> Result<Vec<Value>, InterruptError>;
}

/// A suspended call waiting for a human decision.
///
/// Delivered to the host side of an [`InterruptChannel`]. Consume it with
/// [`PendingInterrupt::respond()`] to resume the caller.
#[derive(Debug)]
pub struct PendingInterrupt {
    /// Unique ID for this interrupt, for correlation in host UIs.
    pub id: String,

    /// When the caller suspended.
    pub requested_at: DateTime<Utc>,

    /// The request payloads, one per suspended action.
    pub payloads: Vec<Value>,

    responder: oneshot::Sender<Vec<Value>>,
}

impl PendingInterrupt {
    /// Resume the suspended caller with one response per payload.
    pub fn respond(self, responses: Vec<Value>) -> Result<(), InterruptError> {
        self.responder
            .send(responses)
            .map_err(|_| InterruptError::RequesterGone)
    }
}

/// In-process [`Interrupter`] backed by a tokio channel.
///
/// # Example
///
/// ```rust
/// use greenlight_core::{InterruptChannel, Interrupter};
///
/// # tokio_test::block_on(async {
/// let (host, mut reviews) = InterruptChannel::new(8);
///
/// // Host side: answer each suspended call.
/// tokio::spawn(async move {
///     while let Some(pending) = reviews.recv().await {
///         let echoed = pending.payloads.clone();
///         let _ = pending.respond(echoed);
///     }
/// });
///
/// let responses = host.interrupt(vec![serde_json::json!({"ping": 1})]).await.unwrap();
/// assert_eq!(responses[0]["ping"], 1);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct InterruptChannel {
    tx: mpsc::Sender<PendingInterrupt>,
}

impl InterruptChannel {
    /// Create a channel pair: the `Interrupter` handle and the host receiver.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<PendingInterrupt>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Interrupter for InterruptChannel {
    async fn interrupt(&self, payloads: Vec<Value>) -> Result<Vec<Value>, InterruptError> {
        let (tx, rx) = oneshot::channel();

        let pending = PendingInterrupt {
            id: uuid::Uuid::new_v4().to_string(),
            requested_at: Utc::now(),
            payloads,
            responder: tx,
        };

        self.tx
            .send(pending)
            .await
            .map_err(|_| InterruptError::HostGone)?;

        rx.await.map_err(|_| InterruptError::Abandoned)
    }
}
