use crate::domain::rate_change::RateChange;
use crate::error::{Result, ScheduleError};
use std::io::Read;

/// Reads rate changes from a CSV source.
///
/// Expects a `type, row, delta` header. Whitespace around fields is trimmed
/// and short records are accepted, so `delta` may be left off entirely.
pub struct RateChangeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RateChangeReader<R> {
    /// Creates a new `RateChangeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rate changes.
    ///
    /// A malformed line yields an `Err` for that line only; iteration carries on.
    pub fn changes(self) -> impl Iterator<Item = Result<RateChange>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ScheduleError::from))
    }
}
