//! CSV re-serialization of the current record view: UTF-8 BOM for
//! spreadsheet compatibility, every field quoted, rows in input order.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use crate::domain::Record;
use crate::error::Result;

const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

const EXPORT_HEADER: [&str; 9] = [
    "排名",
    "學校名稱",
    "英文名稱",
    "分區",
    "全年學費",
    "電話",
    "免費計劃",
    "網址",
    "地址",
];

/// Serializes `records` to the export payload. A pure transform over its
/// input: whatever filter/sort state produced the slice is what gets
/// written. Embedded quotes are escaped by doubling.
pub fn export_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut payload = Vec::from(BOM);
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(&mut payload);
        writer.write_record(EXPORT_HEADER)?;
        for record in records {
            writer.write_record([
                record.rank.to_string().as_str(),
                record.localized_name.as_str(),
                record.canonical_key.as_str(),
                record.district.as_str(),
                record.tuition_text.as_str(),
                record.phone.as_str(),
                record.free_scheme.display(),
                record.website.as_str(),
                record.address.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(payload)
}

/// Download filename embedding the export timestamp.
pub fn export_filename(now: DateTime<Local>) -> String {
    format!("kindergarten_top100_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Writes the export for `records` into `dir`, returning the file path.
pub fn write_export(records: &[Record], dir: &Path) -> Result<PathBuf> {
    let payload = export_csv(records)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(Local::now()));
    fs::write(&path, payload)?;
    info!(path = %path.display(), rows = records.len(), "export written");
    Ok(path)
}
