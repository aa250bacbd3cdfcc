//! Background fetch task and its cancellation guard.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::cancel::{CancelHandle, CancelSource};
use crate::ui::events::AppEvent;
use crate::worldbank::client::WorldBankClient;

/// A population fetch in flight.
///
/// Dropping the guard signals its cancellation token, so a fetch can never
/// outlive the screen that asked for it. Replacing the guard with a newer
/// fetch cancels the old one the same way.
pub struct FetchTask {
    cancel: CancelSource,
}

impl FetchTask {
    /// Spawn the fetch on `handle`. The outcome is delivered through
    /// `events`, tagged with `generation` so stale completions can be told
    /// apart from current ones.
    pub fn spawn(
        handle: &Handle,
        client: WorldBankClient,
        generation: u64,
        events: Sender<AppEvent>,
    ) -> Self {
        let cancel = CancelSource::new();
        let token = cancel.handle();
        handle.spawn(run_fetch(client, generation, events, token));
        Self { cancel }
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel.signal();
    }
}

async fn run_fetch(
    client: WorldBankClient,
    generation: u64,
    events: Sender<AppEvent>,
    cancel: CancelHandle,
) {
    let outcome = tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!(generation, "fetch cancelled");
            return;
        }
        outcome = client.fetch_population() => outcome,
    };

    match &outcome {
        Ok(points) => tracing::info!(generation, years = points.len(), "fetch complete"),
        Err(err) => tracing::warn!(generation, error = %err, "fetch failed"),
    }

    // The receiver is gone during shutdown; nothing left to deliver then.
    let _ = events.send(AppEvent::Population { generation, outcome });
}
