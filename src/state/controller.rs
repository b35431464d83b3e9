//! Game clock and shot clock lifecycle controller

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tokio::{runtime::Handle, sync::watch, task::JoinHandle, time::Instant};
use tracing::{debug, info};

use crate::{
    clock::{ClockMinutes, ClockNumber, Decrement, GAME_CLOCK_START, SHOT_CLOCK_START},
    tasks::{countdown_task, TICK_PERIOD},
};
use super::ClockSnapshot;

/// The two counters driven by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    GameClock,
    ShotClock,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameClock => f.write_str("game clock"),
            Self::ShotClock => f.write_str("shot clock"),
        }
    }
}

/// A live countdown task and the generation it was registered under
#[derive(Debug)]
struct CounterTask {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Mutable controller state, only ever touched under the lock
#[derive(Debug)]
struct ClockInner {
    game_clock: ClockMinutes,
    shot_clock: ClockNumber,
    running: bool,
    game_clock_task: Option<CounterTask>,
    shot_clock_task: Option<CounterTask>,
    next_generation: u64,
}

impl ClockInner {
    fn task_slot(&mut self, counter: Counter) -> &mut Option<CounterTask> {
        match counter {
            Counter::GameClock => &mut self.game_clock_task,
            Counter::ShotClock => &mut self.shot_clock_task,
        }
    }

    fn registered_generation(&self, counter: Counter) -> Option<u64> {
        let slot = match counter {
            Counter::GameClock => &self.game_clock_task,
            Counter::ShotClock => &self.shot_clock_task,
        };
        slot.as_ref().map(|task| task.generation)
    }

    /// Decrement one counter and store the result, returning whether it can keep ticking
    fn apply_tick(&mut self, counter: Counter) -> bool {
        match counter {
            Counter::GameClock => {
                let outcome = self.game_clock.decrement();
                let keep_going = outcome.is_decremented();
                self.game_clock = outcome.into_value();
                debug!("Game clock tick: {}", self.game_clock);
                keep_going
            }
            Counter::ShotClock => {
                let outcome = self.shot_clock.decrement();
                let keep_going = outcome.is_decremented();
                self.shot_clock = outcome.into_value();
                debug!("Shot clock tick: {}", self.shot_clock);
                keep_going
            }
        }
    }

    /// Abort and unregister a counter's task, if any
    fn cancel(&mut self, counter: Counter) -> bool {
        match self.task_slot(counter).take() {
            Some(task) => {
                task.handle.abort();
                debug!("Cancelled {} task (generation {})", counter, task.generation);
                true
            }
            None => false,
        }
    }

    fn stop(&mut self) {
        self.cancel(Counter::GameClock);
        self.cancel(Counter::ShotClock);
        self.running = false;
    }

    fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            game_clock: self.game_clock,
            shot_clock: self.shot_clock,
            running: self.running,
        }
    }
}

/// State shared between the controller and its countdown tasks
#[derive(Debug)]
pub(crate) struct SharedClock {
    state: Mutex<ClockInner>,
    update_tx: watch::Sender<ClockSnapshot>,
    runtime: Handle,
}

impl SharedClock {
    fn lock(&self) -> MutexGuard<'_, ClockInner> {
        // Every critical section leaves the state consistent, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &ClockInner) {
        self.update_tx.send_replace(inner.snapshot());
    }

    fn spawn_counter(self: &Arc<Self>, inner: &mut ClockInner, counter: Counter) {
        let generation = inner.next_generation;
        inner.next_generation += 1;

        let first_tick = Instant::now() + TICK_PERIOD;
        let handle = self.runtime.spawn(countdown_task(
            Arc::clone(self),
            counter,
            generation,
            first_tick,
        ));

        debug!("Spawned {} task (generation {})", counter, generation);
        *inner.task_slot(counter) = Some(CounterTask { generation, handle });
    }

    /// Apply one tick on behalf of the task registered under `generation`.
    ///
    /// Returns `false` once the task must end, either because its counter
    /// left the `Decremented` state or because the task was cancelled.
    pub(crate) fn tick(&self, counter: Counter, generation: u64) -> bool {
        let mut inner = self.lock();

        if inner.registered_generation(counter) != Some(generation) {
            debug!("Ignoring tick from cancelled {} task (generation {})", counter, generation);
            return false;
        }

        let keep_going = inner.apply_tick(counter);
        if !keep_going {
            info!("The {} ran out, stopping both clocks", counter);
            inner.stop();
        }

        self.publish(&inner);
        keep_going
    }
}

/// Owns the game clock, the shot clock and their countdown tasks.
///
/// Both clocks tick only while the controller is running; the running flag is
/// set exactly when both countdown tasks are alive. Dropping the controller
/// stops both tasks.
#[derive(Debug)]
pub struct ClockController {
    shared: Arc<SharedClock>,
}

impl ClockController {
    /// Create a controller spawning its tasks on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime, like `tokio::spawn`.
    pub fn new() -> Self {
        Self::with_runtime(Handle::current())
    }

    /// Create a controller spawning its tasks on `runtime`
    pub fn with_runtime(runtime: Handle) -> Self {
        Self::with_values(runtime, GAME_CLOCK_START, SHOT_CLOCK_START)
    }

    fn with_values(runtime: Handle, game_clock: ClockMinutes, shot_clock: ClockNumber) -> Self {
        let inner = ClockInner {
            game_clock,
            shot_clock,
            running: false,
            game_clock_task: None,
            shot_clock_task: None,
            next_generation: 0,
        };
        let (update_tx, _) = watch::channel(inner.snapshot());

        Self {
            shared: Arc::new(SharedClock {
                state: Mutex::new(inner),
                update_tx,
                runtime,
            }),
        }
    }

    /// Start both clocks; a no-op for any clock that is already ticking
    pub fn start(&self) {
        let mut inner = self.shared.lock();

        if inner.running {
            debug!("Clocks already running, ignoring start");
            return;
        }

        for counter in [Counter::GameClock, Counter::ShotClock] {
            if inner.task_slot(counter).is_none() {
                self.shared.spawn_counter(&mut inner, counter);
            }
        }
        inner.running = true;

        info!("Clocks started at {} / {}", inner.game_clock, inner.shot_clock);
        self.shared.publish(&inner);
    }

    /// Stop both clocks, keeping their current values
    pub fn stop(&self) {
        let mut inner = self.shared.lock();

        if inner.running {
            info!("Clocks stopped at {} / {}", inner.game_clock, inner.shot_clock);
        }
        inner.stop();

        self.shared.publish(&inner);
    }

    /// Put the shot clock back to its starting value without touching the game clock
    pub fn reset_shot_clock(&self) {
        let mut inner = self.shared.lock();

        // Once unregistered, the old task can no longer write the shot clock
        let was_ticking = inner.cancel(Counter::ShotClock);
        inner.shot_clock = SHOT_CLOCK_START;

        if inner.running {
            self.shared.spawn_counter(&mut inner, Counter::ShotClock);
        }

        info!(
            "Shot clock reset to {} (was ticking: {}, running: {})",
            inner.shot_clock, was_ticking, inner.running
        );
        self.shared.publish(&inner);
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        self.shared.lock().snapshot()
    }

    pub fn game_clock(&self) -> ClockMinutes {
        self.shared.lock().game_clock
    }

    pub fn shot_clock(&self) -> ClockNumber {
        self.shared.lock().shot_clock
    }

    pub fn is_running(&self) -> bool {
        self.shared.lock().running
    }

    /// Subscribe to a snapshot published after every change
    pub fn subscribe(&self) -> watch::Receiver<ClockSnapshot> {
        self.shared.update_tx.subscribe()
    }
}

impl Default for ClockController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClockController {
    fn drop(&mut self) {
        self.stop();
    }
}
