//! Node executor: one `/capture` call per input item
//!
//! Items are processed strictly in order, one request in flight at a time.
//! The first error aborts the run and propagates to the host; there is no
//! continue-on-error mode.

use reqwest::Method;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::node::client::PostHogClient;
use crate::node::context::ExecutionContext;
use crate::node::event::Event;
use crate::types::{Operation, Resource};

/// Run the node against every input item and aggregate the responses
pub async fn execute(ctx: &ExecutionContext) -> Result<Vec<Value>> {
    let client = PostHogClient::new(ctx.credentials())?;
    execute_with_client(ctx, &client).await
}

/// Like [`execute`], but with a caller-supplied client
pub async fn execute_with_client(
    ctx: &ExecutionContext,
    client: &PostHogClient,
) -> Result<Vec<Value>> {
    let mut return_data = Vec::new();

    for params in ctx.items() {
        let response = match (ctx.resource(), ctx.operation()) {
            (Resource::Event, Operation::Create) => {
                let body = Event::from_parameters(params)?.into_body()?;
                client.request(Method::POST, "/capture", body, &[]).await?
            }
        };
        append_response(&mut return_data, response);
    }

    tracing::debug!(
        items = ctx.item_count(),
        outputs = return_data.len(),
        "Node execution complete"
    );
    Ok(return_data)
}

/// Blocking wrapper around [`execute`] for hosts without an async call
/// boundary
pub fn execute_blocking(ctx: &ExecutionContext) -> Result<Vec<Value>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Config(format!("failed to create runtime: {}", e)))?;
    runtime.block_on(execute(ctx))
}

/// Fold one API response into the aggregate output sequence.
///
/// Array responses are flattened element by element; a null response (an
/// empty reply body) contributes nothing.
fn append_response(return_data: &mut Vec<Value>, response: Value) {
    match response {
        Value::Array(elements) => return_data.extend(elements),
        Value::Null => {}
        element => return_data.push(element),
    }
}
