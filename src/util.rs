use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const BUF_CAPACITY: usize = 256 * 1024;

/// Open a plain file for line reading.
pub(crate) fn open_file(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let f = File::open(path)?;

    #[cfg(feature = "mmap")]
    {
        use memmap2::Mmap;
        use std::io::Cursor;

        // zero-length files cannot be mapped on every platform
        if f.metadata()?.len() > 0 {
            // SAFETY: the map is read-only and owned by the cursor for the
            // lifetime of the reader.
            let mmap = unsafe { Mmap::map(&f) }?;
            return Ok(Box::new(Cursor::new(mmap)));
        }
    }

    Ok(Box::new(BufReader::with_capacity(BUF_CAPACITY, f)))
}
