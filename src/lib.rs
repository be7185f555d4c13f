//! Streaming read counter for FASTA/FASTQ inputs.
//!
//! - FASTA or FASTQ, given or auto-detected per source from the first line.
//! - Collapsed read-ids (`>NNN-COUNT`) count as `COUNT` reads; the convention
//!   is auto-detected once per run from the first identifier.
//! - Single-line records: FASTA uses 2 lines per record, FASTQ 4.
//! - Streaming, line by line; the first error aborts the whole run.
//! - Optional `mmap` for plain files.

pub mod counter;
pub mod detect;
pub mod error;
pub mod framer;
pub mod id;
pub mod options;
pub mod reader;
mod util;

pub use crate::counter::{ReadCounter, RunTotals, SourceStats, count_sources};
pub use crate::detect::detect_format;
pub use crate::error::{ConfigError, CountError, FormatError, IoContext, Result};
pub use crate::framer::skip_body;
pub use crate::id::{CollapsedId, classify};
pub use crate::options::{CollapseMode, CountOptions, Format, FormatMode};
pub use crate::reader::{InputSource, LineReader};
