//! CSV Quote Log Adapter
//!
//! Appends one row per finalized quote to a UTF-8 CSV file. The header
//! (preceded by a byte order mark, so spreadsheets detect the encoding) is
//! written only when the file is created or empty.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::quote::{QuoteLogEntry, QUOTE_LOG_HEADERS};
use crate::ports::{QuoteLog, QuoteLogError};

const UTF8_BOM: &str = "\u{FEFF}";

/// File-backed quote log.
#[derive(Debug)]
pub struct CsvQuoteLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvQuoteLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn needs_header(&self) -> Result<bool, QuoteLogError> {
        match fs::metadata(&self.path).await {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

/// Encodes the optional header and one record as CSV bytes.
fn encode(entry: &QuoteLogEntry, with_header: bool) -> Result<Vec<u8>, QuoteLogError> {
    let mut buf = Vec::new();
    if with_header {
        buf.extend_from_slice(UTF8_BOM.as_bytes());
    }
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        if with_header {
            writer
                .write_record(QUOTE_LOG_HEADERS)
                .map_err(|e| QuoteLogError::Encoding(e.to_string()))?;
        }
        writer
            .write_record([
                entry.timestamp.clone(),
                entry.proposer.clone(),
                entry.client.clone(),
                entry.price_tier.clone(),
                entry.final_price.to_string(),
                entry.base_cost.to_string(),
                entry.applied_margin.to_string(),
                entry.total_hours.to_string(),
                entry.labor_cost.to_string(),
                entry.overhead_cost.to_string(),
                entry.surcharge.to_string(),
            ])
            .map_err(|e| QuoteLogError::Encoding(e.to_string()))?;
        writer.flush()?;
    }
    Ok(buf)
}

#[async_trait]
impl QuoteLog for CsvQuoteLog {
    async fn append(&self, entry: &QuoteLogEntry) -> Result<(), QuoteLogError> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let with_header = self.needs_header().await?;
        let bytes = encode(entry, with_header)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        debug!(path = %self.path.display(), header = with_header, "Quote logged");
        Ok(())
    }
}
