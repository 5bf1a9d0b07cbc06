//! Stable keyed ordering of the record set, including the tolerant tuition
//! comparator.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::FREE_TUITION_TEXT;
use crate::domain::{Record, SortKey};

/// Sentinel ranking unresolvable tuitions after every real value.
pub const TUITION_UNKNOWN: u64 = u64::MAX;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").expect("static pattern"));

/// Extracts a comparable fee from a free-form tuition display string.
/// The no-fee display maps to 0; the first digit run (thousands separators
/// and any leading currency symbol tolerated) maps to that integer;
/// anything else, the placeholder included, maps to `TUITION_UNKNOWN`.
pub fn tuition_value(text: &str) -> u64 {
    let trimmed = text.trim();
    if trimmed == FREE_TUITION_TEXT {
        return 0;
    }
    DIGIT_RUN
        .find(trimmed)
        .and_then(|m| m.as_str().replace(',', "").parse::<u64>().ok())
        .unwrap_or(TUITION_UNKNOWN)
}

/// Reorders `records` by `key`. Stable: ties keep the originating order, so
/// sorting never scrambles equal-keyed records.
pub fn sort(mut records: Vec<Record>, key: SortKey) -> Vec<Record> {
    match key {
        SortKey::RankAsc => records.sort_by_key(|r| r.rank),
        SortKey::NameAsc => records.sort_by(|a, b| a.localized_name.cmp(&b.localized_name)),
        SortKey::NameDesc => records.sort_by(|a, b| b.localized_name.cmp(&a.localized_name)),
        SortKey::DistrictAsc => records.sort_by(|a, b| a.district.cmp(&b.district)),
        SortKey::TuitionAsc => records.sort_by_key(|r| tuition_value(&r.tuition_text)),
        SortKey::TuitionDesc => {
            records.sort_by(|a, b| tuition_value(&b.tuition_text).cmp(&tuition_value(&a.tuition_text)))
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER;
    use crate::domain::{record_id, FreeSchemeStatus};

    fn record(rank: u32, name: &str, district: &str, tuition: &str) -> Record {
        Record {
            id: record_id(rank),
            rank,
            canonical_key: format!("KINDERGARTEN {rank}"),
            localized_name: name.to_string(),
            district: district.to_string(),
            tuition_text: tuition.to_string(),
            phone: PLACEHOLDER.to_string(),
            address: PLACEHOLDER.to_string(),
            website: String::new(),
            free_scheme: FreeSchemeStatus::Unknown,
            teaching_language: PLACEHOLDER.to_string(),
            gender: PLACEHOLDER.to_string(),
            category: PLACEHOLDER.to_string(),
        }
    }

    #[test]
    fn tolerant_tuition_extraction() {
        assert_eq!(tuition_value("免費"), 0);
        assert_eq!(tuition_value("$1,234"), 1234);
        assert_eq!(tuition_value("HK$3,500/年"), 3500);
        assert_eq!(tuition_value("500"), 500);
        assert_eq!(tuition_value("待查"), TUITION_UNKNOWN);
        assert_eq!(tuition_value(""), TUITION_UNKNOWN);
    }

    #[test]
    fn tuition_ascending_puts_unresolved_last() {
        let records = vec![
            record(1, "甲", "東區", "待查"),
            record(2, "乙", "南區", "$500"),
            record(3, "丙", "北區", "免費"),
        ];
        let sorted = sort(records, SortKey::TuitionAsc);
        let order: Vec<u32> = sorted.iter().map(|r| r.rank).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn tuition_descending_puts_unresolved_first() {
        let records = vec![
            record(1, "甲", "東區", "$9,000"),
            record(2, "乙", "南區", "待查"),
        ];
        let sorted = sort(records, SortKey::TuitionDesc);
        assert_eq!(sorted[0].rank, 2);
    }

    #[test]
    fn ties_keep_the_originating_order() {
        let records = vec![
            record(7, "甲", "東區", "免費"),
            record(3, "乙", "東區", "免費"),
            record(5, "丙", "東區", "$0"),
        ];
        let sorted = sort(records, SortKey::TuitionAsc);
        let order: Vec<u32> = sorted.iter().map(|r| r.rank).collect();
        assert_eq!(order, vec![7, 3, 5]);
    }

    #[test]
    fn name_descending_reverses_name_ascending() {
        let records = vec![
            record(1, "寶山幼兒園", "東區", "免費"),
            record(2, "根德園幼稚園", "南區", "免費"),
        ];
        let asc = sort(records.clone(), SortKey::NameAsc);
        let desc = sort(records, SortKey::NameDesc);
        assert_eq!(asc[0].rank, desc[1].rank);
    }

    #[test]
    fn sorting_does_not_filter() {
        let records = vec![
            record(2, "乙", "南區", "待查"),
            record(1, "甲", "東區", "免費"),
        ];
        assert_eq!(sort(records, SortKey::DistrictAsc).len(), 2);
    }
}
