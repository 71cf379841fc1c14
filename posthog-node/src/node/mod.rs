//! PostHog integration node
//!
//! The node follows the host's execute contract:
//! - The host resolves parameters and credentials into an [`ExecutionContext`]
//! - The executor turns each input item into one `POST /capture` call
//! - Aggregated responses flow back into the host's single output channel
//!
//! Hosts that render node surfaces consume [`descriptor`] to learn which
//! parameters to offer; the executor itself never reads it.

pub mod client;
pub mod context;
pub mod descriptor;
pub mod event;
pub mod executor;

pub use client::PostHogClient;
pub use context::{AdditionalFields, ExecutionContext, ItemParameters};
pub use descriptor::{descriptor, NodeDescriptor};
pub use event::Event;
pub use executor::{execute, execute_blocking};
