//! Record synthesis and input stream serialization.

use rand::Rng;

use crate::config::ExpRange;

/// Symbols a record may contain: ASCII letters and digits.
///
/// Excluding `\n` is what makes newline a safe record delimiter.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Record separator and terminator.
pub const DELIMITER: u8 = b'\n';

/// Draws a single record: a length from `lengths`, then that many alphabet symbols.
pub fn synthesize_record<R: Rng + ?Sized>(lengths: &ExpRange, rng: &mut R) -> Vec<u8> {
    let len = lengths.sample(rng);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

/// Draws `count` independent records.
pub fn synthesize_records<R: Rng + ?Sized>(
    count: usize,
    lengths: &ExpRange,
    rng: &mut R,
) -> Vec<Vec<u8>> {
    (0..count).map(|_| synthesize_record(lengths, rng)).collect()
}

/// Joins records with [`DELIMITER`] and terminates a non-empty set with one more.
///
/// An empty record set serializes to an empty stream.
pub fn serialize<T: AsRef<[u8]>>(records: &[T]) -> Vec<u8> {
    let total: usize = records.iter().map(|r| r.as_ref().len() + 1).sum();
    let mut out = Vec::with_capacity(total);
    for record in records {
        out.extend_from_slice(record.as_ref());
        out.push(DELIMITER);
    }
    out
}

/// The bytes fed to a subject for one case, plus what verification needs to
/// know about the records they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStream {
    bytes: Vec<u8>,
    record_count: usize,
    max_record_length: Option<usize>,
}

impl InputStream {
    /// Serializes `records`, remembering their count and longest length.
    pub fn from_records<T: AsRef<[u8]>>(records: &[T]) -> Self {
        Self {
            bytes: serialize(records),
            record_count: records.len(),
            max_record_length: records.iter().map(|r| r.as_ref().len()).max(),
        }
    }

    /// Synthesizes `count` records and serializes them in one step.
    pub fn synthesize<R: Rng + ?Sized>(count: usize, lengths: &ExpRange, rng: &mut R) -> Self {
        Self::from_records(&synthesize_records(count, lengths, rng))
    }

    /// Serialized stream.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of records in the stream.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Length of the longest record, excluding its delimiter; `None` for an empty stream.
    pub fn max_record_length(&self) -> Option<usize> {
        self.max_record_length
    }

    /// Stream length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the stream holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
