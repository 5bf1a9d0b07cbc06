//! Joins the rank registry with parsed source rows into the canonical
//! record set: total over rank slots, partial over rows.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::{
    COL_ADDRESS, COL_CATEGORY, COL_DISTRICT, COL_FREE_SCHEME, COL_GENDER, COL_LANGUAGE,
    COL_NAME_EN, COL_NAME_ZH, COL_PHONE, COL_TUITION, COL_WEBSITE, PLACEHOLDER,
};
use crate::domain::{record_id, FreeSchemeStatus, RankSlot, Record};
use crate::registry::canonical_key;
use crate::source::table::RawRow;

/// Produces exactly one record per rank slot, in slot order. Slots without
/// a matching row yield all-placeholder records; rows without a matching
/// slot are dropped.
pub fn normalize(slots: &[RankSlot], rows: &[RawRow]) -> Vec<Record> {
    // Contract: duplicate keys in the source resolve last-write-wins, so a
    // later row replaces an earlier one under the same canonical key.
    let mut by_key: HashMap<String, &RawRow> = HashMap::with_capacity(rows.len());
    for row in rows {
        if let Some(name) = row.get(COL_NAME_EN) {
            by_key.insert(canonical_key(name), row);
        }
    }

    let records: Vec<Record> = slots
        .iter()
        .map(|slot| {
            let row = by_key.get(&canonical_key(&slot.canonical_key)).copied();
            build_record(slot, row)
        })
        .collect();

    debug!(
        slots = slots.len(),
        rows = rows.len(),
        matched = records.iter().filter(|r| r.localized_name != PLACEHOLDER).count(),
        "record set normalized"
    );
    records
}

fn build_record(slot: &RankSlot, row: Option<&RawRow>) -> Record {
    Record {
        id: record_id(slot.rank),
        rank: slot.rank,
        canonical_key: slot.canonical_key.clone(),
        localized_name: field(row, COL_NAME_ZH),
        district: field(row, COL_DISTRICT),
        tuition_text: field(row, COL_TUITION),
        phone: field(row, COL_PHONE),
        address: field(row, COL_ADDRESS),
        // The website column is the one field allowed to stay empty when the
        // source explicitly carries an empty cell.
        website: row
            .and_then(|r| r.get(COL_WEBSITE))
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        free_scheme: row
            .and_then(|r| r.get(COL_FREE_SCHEME))
            .map(|v| FreeSchemeStatus::from_source(v))
            .unwrap_or(FreeSchemeStatus::Unknown),
        teaching_language: field(row, COL_LANGUAGE),
        gender: field(row, COL_GENDER),
        category: field(row, COL_CATEGORY),
    }
}

fn field(row: Option<&RawRow>, column: &str) -> String {
    row.and_then(|r| r.get(column))
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}
