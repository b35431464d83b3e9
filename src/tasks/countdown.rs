//! Countdown task driving a single counter

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant};
use tracing::debug;

use crate::state::{Counter, SharedClock};

/// Time between two ticks of either clock
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick `counter` once per period, starting at `first_tick`, until the
/// controller reports that this task is done.
pub(crate) async fn countdown_task(
    clock: Arc<SharedClock>,
    counter: Counter,
    generation: u64,
    first_tick: Instant,
) {
    debug!("Starting {} countdown (generation {})", counter, generation);

    let mut interval = interval_at(first_tick, TICK_PERIOD);

    loop {
        interval.tick().await;

        if !clock.tick(counter, generation) {
            break;
        }
    }

    debug!("{} countdown finished (generation {})", counter, generation);
}
