//! Write a fixed payload to a file and read it back.
//!
//! The read handle lives inside a block, so it is dropped (and the OS handle
//! closed) on every exit path, including the `?` early returns.

use crate::error::{LessonError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Text written by every round trip.
pub const PAYLOAD: &str = "Hello, this is a test file.\nThis is the second line.";

/// Round trip through `path`, or do nothing when `path` is blank.
pub fn process_file(path: &str) -> Result<Option<String>> {
    if path.trim().is_empty() {
        debug!("blank path, skipping file round trip");
        return Ok(None);
    }
    round_trip(Path::new(path)).map(Some)
}

/// Overwrite `path` with [`PAYLOAD`] and read the whole file back.
pub fn round_trip(path: &Path) -> Result<String> {
    fs::write(path, PAYLOAD).map_err(|err| LessonError::from_io(path, err))?;
    debug!(path = %path.display(), bytes = PAYLOAD.len(), "payload written");

    let read = {
        let file = File::open(path).map_err(|err| LessonError::from_io(path, err))?;
        let mut reader = BufReader::new(file);
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|err| LessonError::from_io(path, err))?;
        content
    };

    info!(path = %path.display(), "file round trip complete");
    Ok(read)
}
