// src/persistence/json_file.rs
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;

use super::document::{AuctionDocument, PersistenceError};

pub fn read_documents<P: AsRef<Path>>(path: P) -> Result<Vec<AuctionDocument>, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let documents = serde_json::from_reader(reader)?;
    Ok(documents)
}

pub fn write_documents<P: AsRef<Path>>(
    path: P,
    documents: &[AuctionDocument],
) -> Result<(), PersistenceError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let json = serde_json::to_string(documents)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}
