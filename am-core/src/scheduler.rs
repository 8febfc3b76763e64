//! Deferred task execution
//!
//! Delayed tones, panel transitions and the boot timeline are all expressed as
//! `{delay, task}` pairs handed to a [`Scheduler`]. Scheduling never blocks the
//! caller. [`TimerScheduler`] runs tasks on one dispatcher thread;
//! [`ManualScheduler`] holds them until a test advances its virtual clock.

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;
use std::cmp::Ordering as CmpOrdering;
use std::collections::BinaryHeap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Fire-and-forget unit of deferred work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay
pub trait Scheduler: Send + Sync {
    /// Queue `task` to run once `delay` has elapsed. Returns immediately.
    fn schedule(&self, delay: Duration, task: Task);
}

// ============================================================================
// TIMER SCHEDULER
// ============================================================================

struct Job {
    due: Instant,
    seq: u64,
    task: Task,
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Job {}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for Job {
    // Reversed so the BinaryHeap pops the earliest deadline first
    fn cmp(&self, other: &Self) -> CmpOrdering {
        other.due.cmp(&self.due).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Wall-clock scheduler backed by a dispatcher thread
///
/// Tasks run one at a time, ordered by deadline then submission order.
/// Dropping the scheduler discards tasks that have not fired yet.
pub struct TimerScheduler {
    sender: Option<Sender<Job>>,
    seq: AtomicU64,
    worker_handle: Option<thread::JoinHandle<()>>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        let worker_handle = thread::Builder::new()
            .name("am-timer".into())
            .spawn(move || Self::run_dispatcher(receiver))
            .map_err(|e| ::log::error!("Failed to spawn timer thread: {}", e))
            .ok();

        Self {
            sender: Some(sender),
            seq: AtomicU64::new(0),
            worker_handle,
        }
    }

    fn run_dispatcher(receiver: Receiver<Job>) {
        let mut queue: BinaryHeap<Job> = BinaryHeap::new();

        loop {
            let received = match queue.peek().map(|job| job.due) {
                None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
                Some(due) => receiver.recv_timeout(due.saturating_duration_since(Instant::now())),
            };

            match received {
                Ok(job) => queue.push(job),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            let now = Instant::now();
            while queue.peek().is_some_and(|job| job.due <= now) {
                if let Some(job) = queue.pop() {
                    if catch_unwind(AssertUnwindSafe(job.task)).is_err() {
                        ::log::error!("Scheduled task panicked");
                    }
                }
            }
        }

        ::log::debug!("Timer dispatcher stopped with {} pending tasks", queue.len());
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let job = Job {
            due: Instant::now() + delay,
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            task,
        };
        let sent = self.sender.as_ref().map(|sender| sender.send(job).is_ok());
        if sent != Some(true) {
            ::log::debug!("Timer dispatcher gone, dropping task");
        }
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        // Disconnecting the channel stops the dispatcher
        self.sender.take();
        if let Some(handle) = self.worker_handle.take() {
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}

// ============================================================================
// MANUAL SCHEDULER
// ============================================================================

#[derive(Default)]
struct ManualState {
    now: Duration,
    seq: u64,
    queue: Vec<(Duration, u64, Task)>,
}

/// Virtual-clock scheduler for deterministic tests
///
/// Nothing runs until [`ManualScheduler::advance`] is called; tasks then run on
/// the calling thread in deadline order, including tasks they schedule.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of tasks waiting to fire
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Move the virtual clock forward, running every task that falls due
    pub fn advance(&self, by: Duration) {
        let target = self.state.lock().now + by;

        loop {
            let next = {
                let mut state = self.state.lock();
                let earliest = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(index, _)| index);
                earliest.map(|index| {
                    let (due, _, task) = state.queue.remove(index);
                    state.now = due;
                    task
                })
            };

            match next {
                Some(task) => task(),
                None => break,
            }
        }

        self.state.lock().now = target;
    }

    /// Advance in milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Run everything currently queued (and whatever that schedules)
    pub fn run_until_idle(&self) {
        while self.pending() > 0 {
            let furthest = {
                let state = self.state.lock();
                state
                    .queue
                    .iter()
                    .map(|(due, _, _)| *due)
                    .max()
                    .unwrap_or(state.now)
                    .saturating_sub(state.now)
            };
            self.advance(furthest);
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state.lock();
        let due = state.now + delay;
        let seq = state.seq;
        state.seq += 1;
        state.queue.push((due, seq, task));
    }
}
