//! Simulated page operation runner.
//!
//! DESIGN
//! ======
//! Every page operation follows one linear sequence: claim the page slot
//! (`Loading`), wait out the simulated API delay, produce the result, and
//! store `Success` or `Failed`. The wait and production run in a spawned
//! task so a dropped request cannot strand the slot in `Loading`.
//!
//! ERROR HANDLING
//! ==============
//! A rejected or panicking producer moves the slot to `Failed` and logs at
//! error level; the caller gets `PageError::TaskFailed`.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::state::{Loaded, PageData, PageError, Pages};

/// Run one simulated operation against the page that owns `T`.
///
/// # Errors
///
/// Returns [`PageError::AlreadyLoading`] if the page already has an operation
/// in flight, or [`PageError::TaskFailed`] if production fails.
pub async fn run_operation<T, F>(pages: Arc<Pages>, delay: Duration, produce: F) -> Result<Loaded<T>, PageError>
where
    T: PageData,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    T::slot(&pages).begin()?;
    info!(page = T::PAGE, delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX), "operation started");

    let task_pages = Arc::clone(&pages);
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let slot = T::slot(&task_pages);
        match produce() {
            Ok(data) => {
                let loaded = slot.succeed(data);
                info!(page = T::PAGE, run_id = %loaded.run_id, "operation completed");
                Ok(loaded)
            }
            Err(message) => {
                error!(page = T::PAGE, error = %message, "operation rejected");
                slot.fail(message.clone());
                Err(PageError::TaskFailed(message))
            }
        }
    });

    match task.await {
        Ok(result) => result,
        Err(e) => {
            error!(page = T::PAGE, error = %e, "operation task aborted");
            T::slot(&pages).fail(e.to_string());
            Err(PageError::TaskFailed(e.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
