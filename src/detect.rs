use crate::error::FormatError;
use crate::options::Format;

/// Classify a source by the first character of its first line.
pub fn detect_format(first_line: &[u8]) -> Result<Format, FormatError> {
    match first_line.first() {
        Some(b'>') => Ok(Format::Fasta),
        Some(b'@') => Ok(Format::Fastq),
        _ => Err(FormatError::UnrecognizedFormat {
            line: String::from_utf8_lossy(first_line).into_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigils() {
        assert_eq!(detect_format(b">r1"), Ok(Format::Fasta));
        assert_eq!(detect_format(b"@r1"), Ok(Format::Fastq));
        assert_eq!(detect_format(b">"), Ok(Format::Fasta));
    }

    #[test]
    fn rejects_other_first_lines() {
        assert_eq!(
            detect_format(b"ACGT"),
            Err(FormatError::UnrecognizedFormat { line: "ACGT".into() })
        );
        assert!(detect_format(b"").is_err());
        assert!(detect_format(b" >r1").is_err());
    }
}
