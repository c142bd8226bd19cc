/// Line-oriented reading shared by the course and relation loaders.
///
/// Each input line is handled in isolation: lines that are not valid UTF-8 are
/// skipped, blank lines are ignored, and a read error ends the file early
/// without discarding what was already seen.
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

/// Call `f` with the 1-based line number and trimmed content of every usable line.
pub fn for_each_line<R, F>(reader: R, source: &Path, mut f: F)
where
    R: BufRead,
    F: FnMut(usize, &str),
{
    for (index, chunk) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    path = %source.display(),
                    line_number,
                    error = %e,
                    "read failed, ignoring rest of file"
                );
                break;
            }
        };
        let Ok(line) = std::str::from_utf8(&bytes) else {
            debug!(path = %source.display(), line_number, "invalid utf-8, skipping line");
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        f(line_number, line);
    }
}
