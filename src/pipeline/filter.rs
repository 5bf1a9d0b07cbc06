//! Conjunctive filtering over the record set. Pure and order preserving:
//! filtering twice with the same criteria is a no-op on the result.

use crate::constants::PLACEHOLDER;
use crate::domain::{FilterCriteria, Record};

/// Returns the subsequence of `records` passing every non-empty criteria
/// dimension, in the input order.
pub fn filter(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    if !criteria.search.is_empty() && !search_hit(record, &criteria.search) {
        return false;
    }
    dimension(&criteria.district, &record.district)
        && dimension(&criteria.language, &record.teaching_language)
        && dimension(&criteria.gender, &record.gender)
        && dimension(&criteria.free_scheme, record.free_scheme.display())
}

/// Search semantics mirror the two name fields: exact substring against the
/// localized name, uppercase-normalized substring against the alternate
/// name.
fn search_hit(record: &Record, term: &str) -> bool {
    record.localized_name.contains(term)
        || record.canonical_key.to_uppercase().contains(&term.to_uppercase())
}

/// An empty criteria value places no constraint; otherwise exact equality.
fn dimension(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted == actual
}

/// Distinct, sorted values of one record field, placeholder excluded. The
/// view layer uses these to populate its filter dropdowns.
pub fn distinct_options<F>(records: &[Record], pick: F) -> Vec<String>
where
    F: Fn(&Record) -> &str,
{
    let mut values: Vec<String> = records
        .iter()
        .map(|record| pick(record))
        .filter(|value| !value.is_empty() && *value != PLACEHOLDER)
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

pub fn district_options(records: &[Record]) -> Vec<String> {
    distinct_options(records, |r| &r.district)
}

pub fn language_options(records: &[Record]) -> Vec<String> {
    distinct_options(records, |r| &r.teaching_language)
}

pub fn gender_options(records: &[Record]) -> Vec<String> {
    distinct_options(records, |r| &r.gender)
}
