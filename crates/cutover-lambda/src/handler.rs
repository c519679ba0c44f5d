//! Request handler bridging the function runtime and a lifecycle hook.

use cutover_common::types::HookResult;
use cutover_hooks::handler::LifecycleHook;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

/// Handles one invocation. Never returns an error: every fault inside the
/// hook is already reported as `FAILED`.
#[allow(clippy::unnecessary_wraps)]
pub fn handle(hook: &LifecycleHook, event: LambdaEvent<Value>) -> Result<HookResult, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);
    Ok(span.in_scope(|| hook.handle(&payload)))
}
