//! # cutover-hook — managed function entry point
//!
//! Serves a single lifecycle hook per function instance. The phase comes
//! from `CUTOVER_HOOK_PHASE`, or is detected from the function name.

mod bootstrap;
mod handler;

use cutover_hooks::builder::HookBuilder;
use lambda_runtime::{Error, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let lookup = |key: &str| std::env::var(key).ok();
    let config = bootstrap::load_config(lookup)?;
    cutover_hooks::logging::init(config.log_format, false)?;

    let phase = bootstrap::resolve_phase(lookup)?;
    let hook = HookBuilder::new(phase).config(config).build();
    tracing::info!(%phase, "serving lifecycle hook");

    let hook = &hook;
    lambda_runtime::run(service_fn(move |event| {
        std::future::ready(handler::handle(hook, event))
    }))
    .await
}
