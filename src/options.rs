use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Record layout of a source, resolved once per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `>id` followed by one sequence line.
    Fasta,
    /// `@id`, sequence, `+` separator and quality, one line each.
    Fastq,
}

impl Format {
    /// First character of every identifier line.
    #[inline]
    pub fn sigil(self) -> char {
        match self {
            Format::Fasta => '>',
            Format::Fastq => '@',
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Fasta => f.write_str("FASTA"),
            Format::Fastq => f.write_str("FASTQ"),
        }
    }
}

/// Requested input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Detect from the first line of every source.
    #[default]
    Auto,
    Fasta,
    Fastq,
}

impl FormatMode {
    /// The format forced by configuration, if any.
    pub fn fixed(self) -> Option<Format> {
        match self {
            FormatMode::Auto => None,
            FormatMode::Fasta => Some(Format::Fasta),
            FormatMode::Fastq => Some(Format::Fastq),
        }
    }
}

impl FromStr for FormatMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(FormatMode::Auto),
            "fasta" => Ok(FormatMode::Fasta),
            "fastq" => Ok(FormatMode::Fastq),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatMode::Auto => f.write_str("auto"),
            FormatMode::Fasta => f.write_str("fasta"),
            FormatMode::Fastq => f.write_str("fastq"),
        }
    }
}

/// Whether identifiers carry read counts (`NNN-COUNT`).
///
/// `Auto` is resolved by the first identifier of the run and stays fixed
/// for every source that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapseMode {
    #[default]
    Auto,
    Collapsed,
    NotCollapsed,
}

impl FromStr for CollapseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(CollapseMode::Auto),
            "collapsed" => Ok(CollapseMode::Collapsed),
            "not-collapsed" | "nocollapsed" => Ok(CollapseMode::NotCollapsed),
            _ => Err(ConfigError::UnknownCollapseMode(s.to_string())),
        }
    }
}

impl fmt::Display for CollapseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapseMode::Auto => f.write_str("auto"),
            CollapseMode::Collapsed => f.write_str("collapsed"),
            CollapseMode::NotCollapsed => f.write_str("not-collapsed"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub format: FormatMode,
    pub collapse: CollapseMode,
}
