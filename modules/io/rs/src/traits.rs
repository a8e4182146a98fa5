use eyre::Result;

/// A trait for reading structured records. Modeled after the `Read` trait in the std.
pub trait ReadRecord {
    /// The type of the records that will be read.
    type Record;

    /// Read a single record from the input into the provided buffer.
    /// Returns `true` if a record was read and `false` if the end of the input was reached.
    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool>;

    /// Read all remaining records from the input and append them to the provided buffer.
    /// Returns the number of records read.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize>
    where
        Self::Record: Default,
    {
        let mut total = 0;
        loop {
            let mut record = Self::Record::default();
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}

impl<T: ReadRecord + ?Sized> ReadRecord for Box<T> {
    type Record = T::Record;

    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool> {
        (**self).read_record(into)
    }
}

/// Outcome of parsing a single line of a line-oriented format: either a record or the reason the
/// line was ignored. Skips are expected in noisy inputs and are never reported as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T, Skip> {
    Record(T),
    Skipped(Skip),
}
