use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::stats::{sorted_entries, CountMap};

pub const CHARS_FILE: &str = "allchars.txt";
pub const WORDS_FILE: &str = "allwords.txt";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

#[derive(Error, Debug)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

pub fn write_count_file<K>(path: &Path, counts: &CountMap<K>) -> Result<(), WriteError>
where
    K: Ord + Hash + Clone + Display,
{
    let start_time = Instant::now();
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for entry in sorted_entries(counts) {
        write!(writer, "{} = {}{}", entry.key, entry.count, LINE_ENDING).map_err(wrap)?;
    }
    writer.flush().map_err(wrap)?;

    info!(
        action = "complete",
        component = "output",
        file_path = ?path,
        entries = counts.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Wrote counts file"
    );
    Ok(())
}
