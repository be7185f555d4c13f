use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::options::Format;

/// Position of the reader when an error was raised.
///
/// `line_num` is 1-based and points at the last line read from the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("doesn't look like FASTA or FASTQ, first line = '{line}'")]
    UnrecognizedFormat { line: String },
    #[error("expecting {format} file with '{}', got '{line}'", .format.sigil())]
    SigilMismatch { format: Format, line: String },
    #[error("line is empty")]
    EmptyIdentifier,
    #[error("expecting collapsed read-id, got '{line}'")]
    MalformedCollapsedId { line: String },
    #[error("got end of input in the middle of a read (file truncated?)")]
    TruncatedRecord,
    #[error("read count overflows a 64-bit total")]
    CountOverflow,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing input file names. Use 'stdin' to read from STDIN")]
    NoInputs,
    #[error("unknown input format '{0}' (expected auto, fasta or fastq)")]
    UnknownFormat(String),
    #[error("unknown collapse mode '{0}' (expected auto, collapsed or not-collapsed)")]
    UnknownCollapseMode(String),
}

#[derive(Debug, Error)]
pub enum CountError {
    #[error("failed to open file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "failed to read from file '{name}' at line {} (byte {}): {source}",
        .ctx.line_num,
        .ctx.byte_pos
    )]
    Io {
        name: String,
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("file '{name}' line {} (byte {}): {source}", .ctx.line_num, .ctx.byte_pos)]
    Format {
        name: String,
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CountError {
    pub(crate) fn io_err(name: &str, source: io::Error, ctx: IoContext) -> Self {
        Self::Io {
            name: name.to_string(),
            source,
            ctx,
        }
    }
    pub(crate) fn fmt_err(name: &str, source: FormatError, ctx: IoContext) -> Self {
        Self::Format {
            name: name.to_string(),
            source,
            ctx,
        }
    }

    /// The content error behind this failure, if it was one.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CountError>;
