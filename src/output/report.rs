//! CSV results report

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::debug;

use crate::error::Result;
use crate::models::ResultRow;

const REPORT_PREFIX: &str = "UnpublishedProcesses_Results_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for a report created at `at`
pub fn report_file_name(at: DateTime<Local>) -> String {
    format!("{}{}.csv", REPORT_PREFIX, at.format(TIMESTAMP_FORMAT))
}

/// Report path in the same directory as the input file
pub fn report_path(input: &Path, at: DateTime<Local>) -> PathBuf {
    let dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    dir.join(report_file_name(at))
}

/// Write `rows` with a header line, creating or truncating `path`
pub fn write_report(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
