//! Single-writer, multi-reader holder for the current [`UiState`].
//!
//! The latest value lives in a `watch` channel, so a renderer can always read
//! the current state. Every publish is also sent on a `broadcast` channel as
//! a [`StateTransition`], so an observer that needs every step (not only the
//! latest) can subscribe to the ordered stream.

use std::sync::Mutex;
use tokio::sync::{broadcast, watch};
use tracing::debug;
use uuid::Uuid;

use crate::models::{ContentItem, StateTransition, UiState};

/// Buffered transitions per subscriber before it starts lagging.
pub const TRANSITION_CAPACITY: usize = 64;

/// Create a publisher starting in `UiState::Initial`.
pub(crate) fn state_channel() -> (StateWriter, StateObserver) {
    let (state_tx, state_rx) = watch::channel(UiState::Initial);
    let (transitions_tx, transitions_rx) = broadcast::channel(TRANSITION_CAPACITY);

    let writer = StateWriter {
        state_tx,
        transitions_tx,
        publish_lock: Mutex::new(()),
    };
    let observer = StateObserver {
        state_rx,
        transitions_rx,
    };
    (writer, observer)
}

/// The only handle that can change the published state.
///
/// Not `Clone`. There is no way to publish `Initial`.
#[derive(Debug)]
pub(crate) struct StateWriter {
    state_tx: watch::Sender<UiState>,
    transitions_tx: broadcast::Sender<StateTransition>,
    /// Keeps the watch value and the broadcast order in step when two
    /// requests publish at the same time.
    publish_lock: Mutex<()>,
}

impl StateWriter {
    pub(crate) fn publish_loading(&self, request_id: Uuid) {
        self.publish(request_id, UiState::Loading);
    }

    pub(crate) fn publish_success(&self, request_id: Uuid, items: Vec<ContentItem>) {
        self.publish(request_id, UiState::Success(items));
    }

    pub(crate) fn publish_error(&self, request_id: Uuid, message: String) {
        self.publish(request_id, UiState::Error(message));
    }

    fn publish(&self, request_id: Uuid, state: UiState) {
        let _guard = self
            .publish_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        debug!(%request_id, state = state.label(), "Publishing state");
        self.state_tx.send_replace(state.clone());
        // No subscribers is fine; the watch value is still updated.
        let _ = self
            .transitions_tx
            .send(StateTransition::new(request_id, state));
    }
}

/// Read-only view of the published state.
///
/// Cheap to clone; every clone sees the same state. Observers hold no
/// sending half, so both channels close once the writer is dropped.
#[derive(Debug)]
pub struct StateObserver {
    state_rx: watch::Receiver<UiState>,
    /// Never read; only used to mint fresh subscriptions
    transitions_rx: broadcast::Receiver<StateTransition>,
}

impl Clone for StateObserver {
    fn clone(&self) -> Self {
        Self {
            state_rx: self.state_rx.clone(),
            transitions_rx: self.transitions_rx.resubscribe(),
        }
    }
}

impl StateObserver {
    /// Snapshot of the current state.
    pub fn current(&self) -> UiState {
        self.state_rx.borrow().clone()
    }

    /// Wait for the next publish and return the new current state.
    ///
    /// Returns `None` once the writer is gone. Intermediate states published
    /// in quick succession may be skipped; use [`subscribe`](Self::subscribe)
    /// to see all of them.
    pub async fn changed(&mut self) -> Option<UiState> {
        self.state_rx.changed().await.ok()?;
        Some(self.state_rx.borrow_and_update().clone())
    }

    /// Wait until the current state is `Success` or `Error`.
    ///
    /// Returns immediately if it already is. Returns `None` if the writer is
    /// dropped first.
    pub async fn wait_until_terminal(&mut self) -> Option<UiState> {
        loop {
            let state = self.state_rx.borrow_and_update().clone();
            if state.is_terminal() {
                return Some(state);
            }
            self.state_rx.changed().await.ok()?;
        }
    }

    /// Subscribe to every transition published from now on, in order.
    ///
    /// The stream ends with `RecvError::Closed` after the writer is dropped
    /// and the remaining transitions have been received.
    pub fn subscribe(&self) -> broadcast::Receiver<StateTransition> {
        self.transitions_rx.resubscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_initial() {
        let (_writer, observer) = state_channel();
        assert_eq!(observer.current(), UiState::Initial);
    }

    #[test]
    fn test_publish_replaces_value() {
        let (writer, observer) = state_channel();
        let id = Uuid::new_v4();

        writer.publish_loading(id);
        assert_eq!(observer.current(), UiState::Loading);

        writer.publish_error(id, "nope".to_string());
        assert_eq!(observer.current(), UiState::Error("nope".to_string()));
    }

    #[test]
    fn test_clones_share_state() {
        let (writer, observer) = state_channel();
        let other = observer.clone();

        writer.publish_success(Uuid::new_v4(), Vec::new());
        assert_eq!(other.current(), UiState::Success(Vec::new()));
    }

    #[tokio::test]
    async fn test_subscribe_sees_every_transition_in_order() {
        let (writer, observer) = state_channel();
        let mut transitions = observer.subscribe();
        let id = Uuid::new_v4();

        writer.publish_loading(id);
        writer.publish_success(id, vec![ContentItem::with_summary("A", "a")]);

        let first = transitions.recv().await.unwrap();
        let second = transitions.recv().await.unwrap();
        assert_eq!(first.request_id, id);
        assert_eq!(first.state, UiState::Loading);
        assert!(matches!(second.state, UiState::Success(ref items) if items.len() == 1));
        assert!(first.published_at <= second.published_at);
    }

    #[tokio::test]
    async fn test_changed_returns_new_state() {
        let (writer, mut observer) = state_channel();

        let handle = tokio::spawn(async move {
            writer.publish_loading(Uuid::new_v4());
            writer
        });

        assert_eq!(observer.changed().await, Some(UiState::Loading));
        drop(handle.await.unwrap());
        assert_eq!(observer.changed().await, None);
    }

    #[tokio::test]
    async fn test_wait_until_terminal() {
        let (writer, mut observer) = state_channel();
        let id = Uuid::new_v4();

        tokio::spawn(async move {
            writer.publish_loading(id);
            tokio::task::yield_now().await;
            writer.publish_error(id, "Failed to generate topic overview".to_string());
            // keep the writer alive until the observer has read
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        });

        assert_eq!(
            observer.wait_until_terminal().await,
            Some(UiState::Error("Failed to generate topic overview".to_string()))
        );
    }

    #[tokio::test]
    async fn test_transitions_close_when_writer_dropped() {
        let (writer, observer) = state_channel();
        let _other = observer.clone();
        let mut transitions = observer.subscribe();
        let id = Uuid::new_v4();

        writer.publish_loading(id);
        drop(writer);

        assert_eq!(transitions.recv().await.unwrap().state, UiState::Loading);
        assert!(matches!(
            transitions.recv().await,
            Err(broadcast::error::RecvError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_wait_until_terminal_writer_dropped() {
        let (writer, mut observer) = state_channel();
        writer.publish_loading(Uuid::new_v4());
        drop(writer);

        assert_eq!(observer.wait_until_terminal().await, None);
    }
}
