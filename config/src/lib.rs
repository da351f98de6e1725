pub mod fns;
pub use fns::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// column names
pub const EC_NUMBER_COL: &str = "EC number";
pub const CATALYTIC_ACTIVITY_COL: &str = "Catalytic activity";
pub const EC_KEY_COL: &str = "EC_key";
pub const ROWS_COL: &str = "rows";
pub const ENTRY_NAME_COL: &str = "Entry Name";
pub const MT_GROUP_COL: &str = "MT_group";

// numeric values
pub const TOP_N: usize = 15;
pub const SUMMARY_PREVIEW: usize = 10;

// file names
pub const GROUPED_SUFFIX: &str = "_grouped.tsv";
pub const EC_SPLIT_DIR_SUFFIX: &str = "_ec_split";
pub const EC_SUMMARY_SUFFIX: &str = "_EC_summary.tsv";
pub const BY_GROUP_DIR_SUFFIX: &str = "_by_group";
pub const GROUP_COUNTS_SUFFIX: &str = "_group_counts.tsv";
pub const WITH_GROUPS_SUFFIX: &str = "_with_groups.tsv";
pub const GROUP_TOTALS_SUFFIX: &str = "_group_totals.tsv";
pub const DEFAULT_EXTENSION: &str = ".tsv";

// accepted inputs
pub const TABLE_EXTENSIONS: [&str; 4] = ["tsv", "tab", "csv", "txt"];
pub const NAMES_EXTENSIONS: [&str; 3] = ["txt", "tsv", "list"];
