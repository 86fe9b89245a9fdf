//! State publishing for the snapshot screen.
//!
//! The orchestrator owns the only writer; presentation gets
//! [`StateObserver`] handles.

mod publisher;

pub(crate) use publisher::{state_channel, StateWriter};
pub use publisher::{StateObserver, TRANSITION_CAPACITY};
