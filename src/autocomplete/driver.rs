//! Event loop driving one controller on a single tokio task.
//!
//! Events arrive over an mpsc channel. Between events the loop sleeps until the
//! controller's debounce deadline, so the only suspension point is the pending query.
//! All state lives on this one task; nothing is shared or locked.

use super::controller::{AutocompleteController, SearchWidget, WidgetEvent};
use crate::search::QueryEngine;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

/// Run `controller` until the event channel closes or `shutdown` fires.
///
/// Returns the controller so the caller can inspect its final state.
pub async fn run_widget<E, W>(
    mut controller: AutocompleteController<E, W>,
    mut events: mpsc::Receiver<WidgetEvent>,
    shutdown: CancellationToken,
) -> AutocompleteController<E, W>
where
    E: QueryEngine,
    W: SearchWidget,
{
    tracing::debug!("Search widget loop started");

    loop {
        let deadline = controller.next_deadline();

        tokio::select! {
            biased;

            () = shutdown.cancelled() => {
                tracing::debug!("Search widget loop cancelled");
                break;
            }

            event = events.recv() => {
                let Some(event) = event else {
                    tracing::debug!("Search widget event channel closed");
                    break;
                };
                controller.handle(event, Instant::now());
            }

            () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                controller.poll(Instant::now());
            }
        }
    }

    // A query still waiting must not open anything after the loop is gone
    controller.cancel_pending();
    controller
}
