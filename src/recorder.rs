use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::ProductRecord;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("could not write record: {0}")]
    Io(#[from] std::io::Error),
}

/// Appends one record block to the log file, creating it if absent. The
/// handle is flushed and released before returning, on error paths too.
pub fn append_record(record: &ProductRecord, path: &Path) -> Result<(), RecordError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(
        file,
        "Product: {}\nPrice: ${:.2}\n\n",
        record.name, record.price
    )?;
    file.flush()?;

    info!(path = %path.display(), "product details saved to file");
    Ok(())
}
