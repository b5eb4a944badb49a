// src/charclass/io.rs
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::CharTable;

// -------------------- JSON (de)serialization --------------------

#[serde_as]
#[derive(Serialize, Deserialize)]
struct TableDisk {
    rules: String,
    #[serde_as(as = "[_; 256]")]
    codes: [u16; 256],
}

impl From<&CharTable> for TableDisk {
    fn from(t: &CharTable) -> Self {
        let mut codes = [0u16; 256];
        for (o, c) in codes.iter_mut().zip(t.iter()) {
            *o = c.code();
        }
        Self {
            rules: t.rules.clone(),
            codes,
        }
    }
}

pub fn table_to_json(t: &CharTable) -> Result<String> {
    serde_json::to_string(&TableDisk::from(t)).context("serialize table")
}

pub fn save_table_json(path: &Path, t: &CharTable) -> Result<()> {
    let f = fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &TableDisk::from(t))
        .with_context(|| format!("write {}", path.display()))?;
    w.flush()?;
    log::debug!("saved {} table to {}", t.rules, path.display());
    Ok(())
}

pub fn load_table_json_bytes(data: &[u8]) -> Result<CharTable> {
    let disk: TableDisk = serde_json::from_slice(data).context("failed to parse table JSON")?;
    let t = CharTable::from_codes(disk.rules, &disk.codes)?;
    log::debug!("loaded {} table from JSON", t.rules);
    Ok(t)
}

// -------------------- rendered text --------------------

/// Write an already rendered table, creating parent directories as needed.
pub fn write_rendered(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
