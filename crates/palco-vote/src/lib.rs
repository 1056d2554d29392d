//! Palco — live audience vote aggregation.
//!
//! One poll at a time: many concurrent voters, revisable ballots, and a
//! tally recomputed by full scan so there is no incremental count to get
//! wrong. The process owns a single [`VoteSession`] value; the transport
//! layer serializes access to it behind a mutex.

use std::collections::HashMap;

use palco_core::EngineError;

/// The set of active ballots for one in-progress poll.
///
/// Ballots are keyed by voter connection id, so a repeated or revised cast
/// from the same voter overwrites rather than double-counts (vote changes
/// are always allowed while the poll is open, and at-least-once transport
/// delivery is harmless).
#[derive(Debug, Default)]
pub struct VoteSession {
    open: bool,
    options: Vec<String>,
    ballots: HashMap<String, usize>,
}

impl VoteSession {
    /// Creates a closed session with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a poll over the given option labels, replacing any previous
    /// poll and clearing all ballots.
    pub fn open(&mut self, options: Vec<String>) {
        tracing::info!(options = ?options, "vote opened");
        self.open = true;
        self.options = options;
        self.ballots.clear();
    }

    /// Closes the poll. Ballots and options stay queryable until the next
    /// [`open`](Self::open) clears them.
    pub fn close(&mut self) {
        if self.open {
            tracing::info!(totals = ?self.tally(), "vote closed");
        }
        self.open = false;
    }

    /// Whether a poll is currently accepting ballots.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The option labels of the current (or most recent) poll.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The number of distinct voters with a recorded ballot.
    #[must_use]
    pub fn ballot_count(&self) -> usize {
        self.ballots.len()
    }

    /// Records a ballot, overwriting any prior ballot from the same voter.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::VoteClosed`] when no poll is open and
    /// [`EngineError::OptionOutOfRange`] when the index does not name an
    /// option; in both cases no ballot is stored.
    pub fn cast(&mut self, voter_id: &str, option_index: usize) -> Result<(), EngineError> {
        if !self.open {
            return Err(EngineError::VoteClosed);
        }
        if option_index >= self.options.len() {
            return Err(EngineError::OptionOutOfRange {
                index: option_index,
                option_count: self.options.len(),
            });
        }
        self.ballots.insert(voter_id.to_owned(), option_index);
        Ok(())
    }

    /// Counts ballots per option. Pure and idempotent; the result length
    /// always equals the option count.
    #[must_use]
    pub fn tally(&self) -> Vec<usize> {
        let mut totals = vec![0; self.options.len()];
        for &index in self.ballots.values() {
            totals[index] += 1;
        }
        totals
    }
}
