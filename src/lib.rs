//! Strips leading and trailing whitespace from a text file and ends it with
//! exactly one newline, rewriting the file in place.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

mod error;

pub use error::Error;

/// Characters stripped from both ends of the content.
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Result of the normalizing transform.
#[derive(Debug, PartialEq)]
pub struct NormalizeResult {
    pub content: String,
    pub modified: bool,
}

/// Strips `WHITESPACE` from both ends of `content` and appends a single newline.
/// Interior whitespace is left untouched.
pub fn normalize_content(content: &str) -> NormalizeResult {
    let stripped = content.trim_matches(WHITESPACE);

    let mut output = String::with_capacity(stripped.len() + 1);
    output.push_str(stripped);
    output.push('\n');

    let modified = output != content;
    NormalizeResult {
        content: output,
        modified,
    }
}

/// Rewrites the file at `path` so that it holds `strip(content) + "\n"`.
///
/// The read handle is closed before the file is reopened for writing. The
/// write truncates in place: a failure after the truncation can leave the
/// file empty or partially written.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn normalize(path: &Path) -> Result<(), Error> {
    let content = {
        let mut file = File::open(path).map_err(|e| Error::from_io(path, e))?;
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)
            .map_err(|e| Error::from_io(path, e))?;
        buffer
    };
    debug!(bytes = content.len(), "read");

    let result = normalize_content(&content);

    {
        let mut file = File::create(path).map_err(|e| Error::from_io(path, e))?;
        file.write_all(result.content.as_bytes())
            .map_err(|e| Error::from_io(path, e))?;
        file.sync_all().map_err(|e| Error::from_io(path, e))?;
    }

    if result.modified {
        debug!(bytes = result.content.len(), "processed");
    } else {
        debug!("unchanged");
    }

    Ok(())
}
