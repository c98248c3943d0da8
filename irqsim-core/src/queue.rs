//! Pending-event priority queue.
//!
//! Orders by device priority rank, ties broken FIFO by an arrival counter
//! assigned under the controller's lock. The tie-break makes same-priority
//! dispatch order deterministic rather than an artifact of the heap layout.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::event::InterruptEvent;

#[derive(Debug)]
struct QueuedEntry {
    event: InterruptEvent,
    arrival: u64,
}

impl PartialEq for QueuedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.arrival == other.arrival
    }
}

impl Eq for QueuedEntry {}

impl Ord for QueuedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: invert so the lowest rank, then the
        // earliest arrival, sits at the top.
        other
            .event
            .device
            .rank()
            .cmp(&self.event.device.rank())
            .then_with(|| other.arrival.cmp(&self.arrival))
    }
}

impl PartialOrd for QueuedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of not-yet-dispatched events.
///
/// Not synchronized itself; the controller guards it with its shared lock.
#[derive(Debug, Default)]
pub struct PendingQueue {
    heap: BinaryHeap<QueuedEntry>,
    arrivals: u64,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InterruptEvent) {
        let arrival = self.arrivals;
        self.arrivals += 1;
        self.heap.push(QueuedEntry { event, arrival });
    }

    /// Removes and returns the highest-priority event, earliest-arrival first
    /// within a priority class.
    pub fn pop(&mut self) -> Option<InterruptEvent> {
        self.heap.pop().map(|entry| entry.event)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
