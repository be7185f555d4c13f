use crate::error::{CountError, IoContext};
use crate::util::open_file;

use std::fmt;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Where the lines of one input come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
}

impl InputSource {
    /// `stdin` and `-` name standard input; anything else is a path.
    pub fn from_name(name: &str) -> Self {
        match name {
            "stdin" | "-" => InputSource::Stdin,
            _ => InputSource::Path(PathBuf::from(name)),
        }
    }

    /// Open the source for reading.
    pub fn open(&self) -> Result<LineReader, CountError> {
        match self {
            InputSource::Stdin => Ok(LineReader::from_bufread(io::stdin().lock())),
            InputSource::Path(path) => LineReader::from_path(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Path(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => f.write_str("stdin"),
        }
    }
}

/// Line-at-a-time reader over a byte stream.
///
/// Lines are handed out as raw bytes with the `\n` (or `\r\n`) terminator
/// removed; nothing else is touched, so sequence and quality lines need not
/// be valid UTF-8.
pub struct LineReader {
    rdr: Box<dyn BufRead>,
    buf: Vec<u8>,
    line_num: u64,
    byte_pos: u64,
}

impl LineReader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CountError> {
        let path = path.as_ref();
        let rdr = open_file(path).map_err(|e| CountError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(rdr))
    }

    /// Wrap an arbitrary `BufRead` (locked stdin, in-memory data, etc.).
    pub fn from_bufread<R: BufRead + 'static>(reader: R) -> Self {
        Self::new(Box::new(reader))
    }

    fn new(rdr: Box<dyn BufRead>) -> Self {
        Self {
            rdr,
            buf: Vec::with_capacity(256),
            line_num: 0,
            byte_pos: 0,
        }
    }

    /// Next line, or `None` at a clean end of stream.
    ///
    /// A last line without a terminator is still returned.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        let n = loop {
            match self.rdr.read_until(b'\n', &mut self.buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        if n == 0 {
            return Ok(None);
        }
        self.line_num += 1;
        self.byte_pos += n as u64;
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(Some(&self.buf))
    }

    /// Lines read so far.
    #[inline]
    pub fn line_num(&self) -> u64 {
        self.line_num
    }

    #[inline]
    pub fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_terminators_only() {
        let mut r = LineReader::from_bufread(Cursor::new(b">a \r\nAC GT\n\nlast".to_vec()));
        assert_eq!(r.next_line().unwrap(), Some(&b">a "[..]));
        assert_eq!(r.next_line().unwrap(), Some(&b"AC GT"[..]));
        assert_eq!(r.next_line().unwrap(), Some(&b""[..]));
        assert_eq!(r.next_line().unwrap(), Some(&b"last"[..]));
        assert_eq!(r.next_line().unwrap(), None);
        assert_eq!(r.ctx(), IoContext { byte_pos: 16, line_num: 4 });
    }

    #[test]
    fn stdin_opens_without_reading() {
        let r = InputSource::Stdin.open().unwrap();
        assert_eq!(r.line_num(), 0);
    }

    #[test]
    fn stdin_names() {
        assert_eq!(InputSource::from_name("-"), InputSource::Stdin);
        assert_eq!(InputSource::from_name("stdin"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_name("reads.fa"),
            InputSource::Path(PathBuf::from("reads.fa"))
        );
    }
}
