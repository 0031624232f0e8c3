// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://sbahn.berlin/en/plan-a-journey/timetable-changes/";
pub const USER_AGENT: &str = concat!("disruption_board/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 20;

// Page structure ("tomorrow" tab)
pub const CONTAINER_ID: &str = "tbc-p4";
pub const ANNOUNCEMENT_CLASS: &str = "c-construction-announcement";
pub const LINES_ATTR: &str = "data-lines";
pub const TITLE_CLASS: &str = "o-construction-announcement-title__heading";
pub const TIMESPAN_CLASS: &str = "c-timespans";
pub const REASON_CLASS: &str = "c-construction-announcement-foot__labels";

// Filter
pub const NIGHT_KEYWORDS: &[&str] = &["night", "nights", "nacht"];

// Layout
pub const RANGE_SEPARATORS: &[&str] = &[" bis ", " to "];
pub const DEFAULT_ROWS_PER_PAGE: usize = 6;
pub const DEFAULT_WRAP_WIDTH: usize = 20;

// Font size tiers (points) keyed on cell text length
pub const FONT_SIZE_LONG_THRESHOLD: usize = 70;
pub const FONT_SIZE_MEDIUM_THRESHOLD: usize = 50;
pub const FONT_SIZE_LONG: f32 = 10.0;
pub const FONT_SIZE_MEDIUM: f32 = 11.0;
pub const FONT_SIZE_DEFAULT: f32 = 12.0;
pub const FONT_SIZE_HEADER: f32 = 16.0;
pub const FONT_SIZE_HEADING: f32 = 16.0;
pub const FONT_SIZE_FOOTER: f32 = 12.0;

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const PAGE_FILE_STEM: &str = "disruptions_page_";
pub const PAGE_FILE_EXT: &str = "png";
pub const DATE_FORMAT: &str = "%d %b %Y";
