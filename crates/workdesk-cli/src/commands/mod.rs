pub mod chat;
pub mod config;
pub mod health;
pub mod note;
pub mod project;
pub mod search;
pub mod task;
pub mod timer;
pub mod todo;

use workdesk_core::{ApiClient, Config};

/// Run an async API call on a one-shot current-thread runtime.
pub(crate) fn block_on<F: std::future::Future>(
    future: F,
) -> Result<F::Output, Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(future))
}

/// Backend client from the on-disk configuration.
pub(crate) fn api_client() -> Result<ApiClient, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    Ok(ApiClient::from_config(&config.api)?)
}

/// Pretty-print any serializable value to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
