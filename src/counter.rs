use crate::detect::detect_format;
use crate::error::{ConfigError, CountError, FormatError, Result};
use crate::framer::skip_body;
use crate::id::classify;
use crate::options::{CollapseMode, CountOptions, Format};
use crate::reader::{InputSource, LineReader};

/// Counters for a single source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub lines: u64,
    pub reads: u64,
    pub sequences: u64,
}

/// Counters accumulated over every source of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub reads: u64,
    pub sequences: u64,
    pub lines: u64,
    pub sources: usize,
}

/// Run-level accumulator.
///
/// Holds the totals and the collapse mode, which is resolved by the first
/// identifier of the whole run and then applies to every later source.
#[derive(Debug, Clone)]
pub struct ReadCounter {
    opts: CountOptions,
    collapse: CollapseMode,
    totals: RunTotals,
}

impl ReadCounter {
    pub fn new(opts: CountOptions) -> Self {
        Self {
            collapse: opts.collapse,
            opts,
            totals: RunTotals::default(),
        }
    }

    /// Current collapse mode; `Auto` until an identifier has been seen.
    #[inline]
    pub fn collapse_mode(&self) -> CollapseMode {
        self.collapse
    }

    #[inline]
    pub fn totals(&self) -> RunTotals {
        self.totals
    }

    pub fn into_totals(self) -> RunTotals {
        self.totals
    }

    /// Open `source` and count every record in it.
    ///
    /// The stream is closed when this returns, on success or failure.
    pub fn count_source(&mut self, source: &InputSource) -> Result<SourceStats> {
        let name = source.to_string();
        log::info!("Reading from '{name}'...");
        let reader = source.open()?;
        self.count_reader(&name, reader)
    }

    /// Count every record of an already opened stream labelled `name`.
    pub fn count_reader(&mut self, name: &str, mut reader: LineReader) -> Result<SourceStats> {
        let mut stats = SourceStats::default();
        let mut format = self.opts.format.fixed();

        let result = self.count_records(name, &mut reader, &mut format, &mut stats);
        stats.lines = reader.line_num();
        self.totals.lines += stats.lines;
        result?;

        self.totals.sources += 1;
        if stats.lines == 0 {
            log::info!("file '{name}' is empty");
        }
        log::info!(
            "File '{name}': {} lines, {} reads",
            stats.lines,
            stats.reads
        );
        log::debug!(
            "File '{name}': {} sequences, format {}, collapse mode {}",
            stats.sequences,
            format.map_or_else(|| "undetermined".to_string(), |f| f.to_string()),
            self.collapse
        );
        Ok(stats)
    }

    fn count_records(
        &mut self,
        name: &str,
        reader: &mut LineReader,
        format: &mut Option<Format>,
        stats: &mut SourceStats,
    ) -> Result<()> {
        loop {
            let line = match reader.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(()),
                Err(e) => return Err(CountError::io_err(name, e, reader.ctx())),
            };

            let (active, reads) = self
                .identify(name, line, format)
                .map_err(|e| CountError::fmt_err(name, e, reader.ctx()))?;

            let (Some(source_reads), Some(run_reads)) = (
                stats.reads.checked_add(reads),
                self.totals.reads.checked_add(reads),
            ) else {
                return Err(CountError::fmt_err(
                    name,
                    FormatError::CountOverflow,
                    reader.ctx(),
                ));
            };
            stats.reads = source_reads;
            stats.sequences += 1;
            self.totals.reads = run_reads;
            self.totals.sequences += 1;

            skip_body(reader, active, name)?;
        }
    }

    /// Resolve the format (first line of a source only) and classify the
    /// identifier line.
    fn identify(
        &mut self,
        name: &str,
        line: &[u8],
        format: &mut Option<Format>,
    ) -> std::result::Result<(Format, u64), FormatError> {
        let active = match *format {
            Some(f) => f,
            None => {
                let f = detect_format(line)?;
                log::info!("type auto-detection: {f}");
                *format = Some(f);
                f
            }
        };

        let was_auto = self.collapse == CollapseMode::Auto;
        let reads = classify(line, active, &mut self.collapse)?;
        if was_auto {
            match self.collapse {
                CollapseMode::Collapsed => log::info!("Detected collapsed READ-IDs in '{name}'"),
                _ => log::info!("Detected non-collapsed READ-IDs in '{name}'"),
            }
        }
        Ok((active, reads))
    }
}

/// Count every source in order and return the run totals.
///
/// The first failing source aborts the run.
pub fn count_sources(sources: &[InputSource], opts: CountOptions) -> Result<RunTotals> {
    if sources.is_empty() {
        return Err(ConfigError::NoInputs.into());
    }
    let mut counter = ReadCounter::new(opts);
    for source in sources {
        counter.count_source(source)?;
    }
    Ok(counter.into_totals())
}
