//! # Customer Events
//!
//! In-process broadcast bus for customer lifecycle notifications.
//!
//! The bus decouples "a user was created" from "notify interested
//! listeners": emission is an explicit, separately invoked operation,
//! never an automatic side effect of user creation. The bus is an
//! explicitly constructed value passed by reference to whichever
//! components publish or subscribe - there is no ambient singleton.
//!
//! Emission is fail-fast: if the channel cannot accept the message
//! (every subscriber has gone away), the error is returned to the
//! caller synchronously. Nothing retries, buffers, or blocks.

use std::collections::HashMap;

use tokio::sync::broadcast;

/// Default buffered capacity per subscriber.
pub const DEFAULT_CAPACITY: usize = 16;

/// Error returned when an emission cannot be delivered.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The channel has no live subscribers left. Terminal: once a bus
    /// reaches this state with all receivers dropped, every further
    /// emission fails.
    #[error("event bus terminated: no live subscribers")]
    Terminated,

    /// The channel is at capacity: some subscriber has not drained the
    /// oldest queued message yet. The message is not published.
    #[error("event bus full: {capacity} undelivered messages queued")]
    Overflow { capacity: usize },
}

/// A message envelope: arbitrary string metadata plus an integer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    headers: HashMap<String, String>,
    payload: i64,
}

impl UserMessage {
    /// Wraps a payload in an envelope with no headers.
    pub fn new(payload: i64) -> Self {
        Self {
            headers: HashMap::new(),
            payload,
        }
    }

    /// Adds a metadata header to the envelope.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// The integer body of the message.
    pub fn payload(&self) -> i64 {
        self.payload
    }

    /// Looks up a metadata header.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// Multi-producer broadcast bus for new-user notifications.
///
/// Safe to share between request handlers: emission takes `&self` and
/// the underlying channel serializes concurrent pushes.
pub struct UserEventBus {
    tx: broadcast::Sender<UserMessage>,
    capacity: usize,
}

impl UserEventBus {
    /// Creates a bus with the default per-subscriber capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a bus buffering up to `capacity` messages per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Attaches a new subscriber. The subscriber observes messages
    /// emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<UserMessage> {
        self.tx.subscribe()
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Publishes a "new user" notification carrying `id`.
    ///
    /// Fail-fast: returns [`EmitError::Terminated`] immediately if no
    /// subscriber is attached to receive the message, and
    /// [`EmitError::Overflow`] if the queue is at capacity. Never
    /// retries, buffers past capacity, or blocks; the caller decides
    /// whether to retry, drop, or alert.
    pub fn send_new_user_message(&self, id: i64) -> Result<(), EmitError> {
        // The broadcast channel overwrites the oldest queued message at
        // capacity instead of rejecting the send; check occupancy first
        // so a full bus is an error, not a silent drop.
        if self.tx.len() >= self.capacity {
            return Err(EmitError::Overflow {
                capacity: self.capacity,
            });
        }

        self.tx
            .send(UserMessage::new(id))
            .map_err(|_| EmitError::Terminated)?;
        tracing::info!(user_id = id, "new-user message sent");
        Ok(())
    }
}

impl Default for UserEventBus {
    fn default() -> Self {
        Self::new()
    }
}
