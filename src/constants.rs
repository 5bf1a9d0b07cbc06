/// Fixed values shared across the pipeline.
///
/// The ranking itself is configuration data: one hundred slots keyed by a
/// templated alternate-name string, joined against the live attribute table
/// fetched from `DEFAULT_SOURCE_URL`.

/// Default endpoint serving the school attribute table (delimiter-separated
/// text with a header row). Overridable via the `KG_SOURCE_URL` environment
/// variable.
pub const DEFAULT_SOURCE_URL: &str =
    "https://data.edb.example.hk/kindergarten/profiles.txt";

/// Number of rank slots in the fixed ranking.
pub const RANK_COUNT: u32 = 100;

/// Field delimiter used by the remote attribute table.
pub const SOURCE_DELIMITER: char = ';';

/// Upper bound on data rows consumed from the source per load cycle.
pub const PREVIEW_LIMIT: usize = 200;

/// Sentinel substituted for any field that cannot be resolved from the
/// source.
pub const PLACEHOLDER: &str = "待查";

/// Tuition display string meaning "no fee".
pub const FREE_TUITION_TEXT: &str = "免費";

/// Debounce window for search-criteria changes, in milliseconds.
pub const DEBOUNCE_MS: u64 = 300;

// Source column names. The attribute table is joined on the English-name
// column; the remaining columns map one-to-one onto record fields.
pub const COL_NAME_ZH: &str = "學校名稱";
pub const COL_NAME_EN: &str = "學校英文名稱";
pub const COL_DISTRICT: &str = "分區";
pub const COL_TUITION: &str = "全年學費";
pub const COL_PHONE: &str = "聯絡電話";
pub const COL_ADDRESS: &str = "學校地址";
pub const COL_WEBSITE: &str = "學校網址";
pub const COL_FREE_SCHEME: &str = "免費優質幼稚園教育計劃";
pub const COL_LANGUAGE: &str = "教學語言";
pub const COL_GENDER: &str = "學生性別";
pub const COL_CATEGORY: &str = "學校類別";

/// Source cell value marking free-scheme participation.
pub const FREE_SCHEME_YES: &str = "參加";
/// Source cell value marking free-scheme non-participation.
pub const FREE_SCHEME_NO: &str = "不參加";
