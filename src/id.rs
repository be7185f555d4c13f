//! Read identifiers and collapsed read counts.
//!
//! A collapsed identifier has the body `NNN-COUNT`: two runs of ASCII digits
//! joined by a single dash, nothing before or after. The record then stands
//! for `COUNT` reads. The leading number is validated but carries no weight.

use crate::error::FormatError;
use crate::options::{CollapseMode, Format};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsedId {
    pub first: u64,
    pub count: u64,
}

impl CollapsedId {
    /// Parse an identifier body (sigil already removed).
    ///
    /// Returns `None` unless the body is exactly `<digits>-<digits>` and both
    /// numbers fit in a `u64`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        let dash = body.iter().position(|&b| b == b'-')?;
        let first = parse_digits(&body[..dash])?;
        let count = parse_digits(&body[dash + 1..])?;
        Some(Self { first, count })
    }
}

fn parse_digits(s: &[u8]) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    s.iter().try_fold(0u64, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

/// Count the reads carried by one identifier line.
///
/// `collapse` is resolved from this line when still `Auto`, and stays
/// resolved for the caller afterwards.
pub fn classify(
    line: &[u8],
    format: Format,
    collapse: &mut CollapseMode,
) -> Result<u64, FormatError> {
    let Some((&sigil, body)) = line.split_first() else {
        return Err(FormatError::EmptyIdentifier);
    };
    if char::from(sigil) != format.sigil() {
        return Err(FormatError::SigilMismatch {
            format,
            line: String::from_utf8_lossy(line).into_owned(),
        });
    }

    let parsed = CollapsedId::parse(body);
    let collapsed = match *collapse {
        CollapseMode::Auto => {
            *collapse = if parsed.is_some() {
                CollapseMode::Collapsed
            } else {
                CollapseMode::NotCollapsed
            };
            parsed.is_some()
        }
        CollapseMode::Collapsed => true,
        CollapseMode::NotCollapsed => false,
    };

    if !collapsed {
        return Ok(1);
    }
    parsed
        .map(|id| id.count)
        .ok_or_else(|| FormatError::MalformedCollapsedId {
            line: String::from_utf8_lossy(line).into_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_id_shapes() {
        assert_eq!(
            CollapsedId::parse(b"12-345"),
            Some(CollapsedId { first: 12, count: 345 })
        );
        assert_eq!(CollapsedId::parse(b"0-0"), Some(CollapsedId { first: 0, count: 0 }));
        let bad_ids: [&[u8]; 12] = [
            b"",
            b"-",
            b"1-",
            b"-1",
            b"1-2-3",
            b"1-2 ",
            b" 1-2",
            b"+1-2",
            b"1-+2",
            b"a-1",
            b"read1",
            b"1_2",
        ];
        for bad in bad_ids {
            assert_eq!(CollapsedId::parse(bad), None, "{:?}", String::from_utf8_lossy(bad));
        }
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(
            CollapsedId::parse(b"1-18446744073709551615").map(|id| id.count),
            Some(u64::MAX)
        );
        assert_eq!(CollapsedId::parse(b"1-18446744073709551616"), None);
        assert_eq!(CollapsedId::parse(b"99999999999999999999-1"), None);
    }

    #[test]
    fn auto_resolves_once() {
        let mut mode = CollapseMode::Auto;
        assert_eq!(classify(b">1-5", Format::Fasta, &mut mode), Ok(5));
        assert_eq!(mode, CollapseMode::Collapsed);
        assert_eq!(
            classify(b">read2", Format::Fasta, &mut mode),
            Err(FormatError::MalformedCollapsedId { line: ">read2".into() })
        );
        assert_eq!(mode, CollapseMode::Collapsed);

        let mut mode = CollapseMode::Auto;
        assert_eq!(classify(b"@read1", Format::Fastq, &mut mode), Ok(1));
        assert_eq!(mode, CollapseMode::NotCollapsed);
        assert_eq!(classify(b"@7-9", Format::Fastq, &mut mode), Ok(1));
    }

    #[test]
    fn sigil_and_empty_line() {
        let mut mode = CollapseMode::NotCollapsed;
        assert_eq!(
            classify(b"@r1", Format::Fasta, &mut mode),
            Err(FormatError::SigilMismatch {
                format: Format::Fasta,
                line: "@r1".into()
            })
        );
        assert_eq!(
            classify(b"", Format::Fastq, &mut mode),
            Err(FormatError::EmptyIdentifier)
        );

        // a failed line never resolves the mode
        let mut mode = CollapseMode::Auto;
        assert!(classify(b"ACGT", Format::Fasta, &mut mode).is_err());
        assert_eq!(mode, CollapseMode::Auto);
    }

    #[test]
    fn configured_modes_are_never_changed() {
        let mut mode = CollapseMode::NotCollapsed;
        assert_eq!(classify(b">1-5", Format::Fasta, &mut mode), Ok(1));
        assert_eq!(mode, CollapseMode::NotCollapsed);

        let mut mode = CollapseMode::Collapsed;
        assert!(classify(b">r1", Format::Fasta, &mut mode).is_err());
        assert_eq!(mode, CollapseMode::Collapsed);
    }

    #[test]
    fn zero_count_is_valid() {
        let mut mode = CollapseMode::Collapsed;
        assert_eq!(classify(b">3-0", Format::Fasta, &mut mode), Ok(0));
    }
}
