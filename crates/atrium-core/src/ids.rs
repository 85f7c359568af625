//! # Id Sequences
//!
//! Monotonic id issuance for guests, bookings, and services.
//!
//! Each registry owns its own `IdSequence` instead of reading from a shared
//! global counter, so id issuance is explicit in the ownership graph and
//! trivially testable. Sequences are NOT re-entrant safe: the model serves a
//! single in-process caller, and a concurrent host must wrap the owning
//! registry in its own lock before handing it to multiple threads.

use serde::{Deserialize, Serialize};

/// A monotonic id generator starting at 1.
///
/// ## Example
/// ```rust
/// use atrium_core::ids::IdSequence;
///
/// let mut seq = IdSequence::new();
/// assert_eq!(seq.next_id(), 1);
/// assert_eq!(seq.next_id(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first issued id is 1.
    pub fn new() -> Self {
        IdSequence { next: 1 }
    }

    /// Issues the next id and advances the sequence.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Returns the id that the next call to `next_id` will issue.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
