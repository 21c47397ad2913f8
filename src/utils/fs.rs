//! Output file writing.

use std::fs;
use std::io;
use std::path::Path;

/// Write `content` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_output(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
