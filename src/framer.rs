use crate::error::{CountError, FormatError};
use crate::options::Format;
use crate::reader::LineReader;

impl Format {
    /// Lines following the identifier that belong to the same record.
    #[inline]
    pub fn body_lines(self) -> usize {
        match self {
            Format::Fasta => 1,
            Format::Fastq => 3, // sequence, '+', quality
        }
    }
}

/// Read and drop the body of the current record.
///
/// The lines are not inspected, only required to exist.
pub fn skip_body(reader: &mut LineReader, format: Format, name: &str) -> Result<(), CountError> {
    for _ in 0..format.body_lines() {
        match reader.next_line() {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(CountError::fmt_err(
                    name,
                    FormatError::TruncatedRecord,
                    reader.ctx(),
                ));
            }
            Err(e) => return Err(CountError::io_err(name, e, reader.ctx())),
        }
    }
    Ok(())
}
