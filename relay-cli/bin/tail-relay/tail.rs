//! Whole-record tail buffer.

use std::collections::VecDeque;

/// Keeps the most recent records whose combined size fits a byte budget.
///
/// Records are stored with their delimiter. When a new record pushes the
/// total over budget, the oldest records are evicted until it fits again,
/// including the new record itself if it alone is too large.
#[derive(Debug)]
pub struct TailBuffer {
    budget: usize,
    held: usize,
    records: VecDeque<Vec<u8>>,
}

impl TailBuffer {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            held: 0,
            records: VecDeque::new(),
        }
    }

    pub fn push(&mut self, record: Vec<u8>) {
        self.held += record.len();
        self.records.push_back(record);
        while self.held > self.budget {
            match self.records.pop_front() {
                Some(evicted) => self.held -= evicted.len(),
                None => break,
            }
        }
    }

    /// Bytes currently retained.
    pub fn held(&self) -> usize {
        self.held
    }

    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.held);
        for record in self.records {
            out.extend_from_slice(&record);
        }
        out
    }
}
