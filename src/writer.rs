//! Snapshot serialization: one indented JSON array per run, named by the
//! wall-clock second of the write.

use crate::records::PostRecord;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

/// Write `records` as `output_<unix_seconds>.json` under `out_dir`,
/// creating the directory (and parents) if absent. Returns the written
/// path. Two runs landing in the same second overwrite silently.
pub fn write_snapshot(records: &[PostRecord], out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let stamp = OffsetDateTime::now_utc().unix_timestamp();
    let path = out_dir.join(format!("output_{stamp}.json"));

    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    // serde_json emits UTF-8 with non-ASCII characters kept literal.
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("serializing {} records", records.len()))?;
    writer.flush()?;
    Ok(path)
}
