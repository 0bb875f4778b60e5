use crate::dlog;
use crate::error::StoreError;
use crate::record::Record;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Read the stored records, failing on any problem with the file.
pub fn read_records(path: &Path) -> Result<Vec<Record>, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StoreError::Missing(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    serde_json::from_str(&text).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the stored records, treating a missing or unparsable file as empty.
///
/// Other I/O errors (permissions, reading a directory) are still returned.
pub fn load_records(path: &Path) -> Result<Vec<Record>, StoreError> {
    match read_records(path) {
        Ok(records) => {
            dlog!("loaded records={} path={}", records.len(), path.display());
            Ok(records)
        }
        Err(e @ (StoreError::Missing(_) | StoreError::Malformed { .. })) => {
            tracing::warn!(err = %e, "starting with an empty record set");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Overwrite `path` with `records` as a pretty-printed JSON array.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    let io_err = |e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let file = fs::File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut ser)
        .map_err(|e| io_err(io::Error::from(e)))?;
    out.write_all(b"\n").map_err(io_err)?;
    out.flush().map_err(io_err)?;

    dlog!("wrote records={} path={}", records.len(), path.display());
    Ok(())
}

/// Append `new` to whatever the file holds and write everything back.
///
/// Returns the full list as written.
pub fn append_records(path: &Path, new: &[Record]) -> Result<Vec<Record>, StoreError> {
    let mut records = load_records(path)?;
    records.extend_from_slice(new);
    write_records(path, &records)?;
    tracing::info!(
        path = %path.display(),
        appended = new.len(),
        total = records.len(),
        "records saved"
    );
    Ok(records)
}
