//! Deferred-task scheduling.
//!
//! Single-threaded stand-in for the host scheduler: settle delays become
//! timed tasks, resize-triggered relayouts become a coalesced frame request.
//! Tasks are plain data; the engine interprets them at drain time and checks
//! current state before committing, so a superseded transition is simply a
//! task that finds nothing left to do. Time is always passed in by the
//! caller, never sampled here, which keeps tests and tooling on virtual
//! clocks.

use std::time::Instant;

use crate::document::NodeId;
use crate::engine::ContainerHandle;

/// A unit of deferred work scheduled by the filter engine or orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Apply the settled visibility markers to an item that finished its
    /// show settle delay.
    FinishShow {
        /// The card element to finalize.
        item: NodeId,
    },
    /// Remove an item from the visible flow once its hide settle delay
    /// elapses, unless a re-match superseded the hide.
    CommitHide {
        /// The card element to remove from flow.
        item: NodeId,
    },
    /// Re-balance and re-apply one container after hides have settled and
    /// freed their space.
    SettleRelayout {
        /// The container whose grid needs a fresh pass.
        container: ContainerHandle,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    fire_at: Instant,
    seq: u64,
    task: DeferredTask,
}

/// Ordered deferred-task queue with a coalesced layout-frame flag.
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
    frame_requested: bool,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a task to become due at `fire_at`.
    pub fn schedule(&mut self, task: DeferredTask, fire_at: Instant) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { fire_at, seq, task });
    }

    /// Requests a layout frame. Multiple requests before the next tick
    /// coalesce into one.
    pub fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    /// Consumes the pending frame request, if any.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Removes and returns every task due at `now`, ordered by fire time
    /// and, within one fire time, by scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        let (mut due, pending): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|entry| entry.fire_at <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.fire_at, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    /// Number of tasks not yet due.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Fire time of the earliest pending task, if any.
    #[must_use]
    pub fn next_fire_at(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.fire_at).min()
    }
}
