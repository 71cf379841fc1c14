//! # posthog-node
//!
//! PostHog "capture event" integration node for workflow-automation hosts.
//!
//! This library provides:
//! - An executor that turns resolved node parameters into `/capture` calls
//! - A thin authenticated HTTP client for the PostHog API
//! - The declarative parameter surface hosts render the node from
//!
//! ## Architecture
//!
//! The host resolves parameters and credentials into an
//! [`ExecutionContext`] and hands it to [`node::execute`]. Each input item
//! produces exactly one `POST {baseUrl}/capture`; responses are aggregated
//! in item order into the node's single output channel. The first failing
//! item aborts the run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use posthog_node::{Credentials, ExecutionContext, ItemParameters, PropertyEntry};
//!
//! # async fn run() -> posthog_node::Result<()> {
//! let credentials = Credentials::new("https://app.posthog.com", "phc_example");
//! let item = ItemParameters {
//!     event_name: "user signed up".to_string(),
//!     distinct_id: "user-1".to_string(),
//!     properties: vec![PropertyEntry::new("plan", "pro")],
//!     ..Default::default()
//! };
//! let ctx = ExecutionContext::new(credentials, vec![item]);
//! let output = posthog_node::execute(&ctx).await?;
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use config::{ClientConfig, Credentials};
pub use error::{Error, Result};
pub use node::context::{AdditionalFields, ExecutionContext, ItemParameters};
pub use node::{execute, execute_blocking, Event, PostHogClient};
pub use types::*;

// Public modules
pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod types;
