//! Field parsing and the per-run click configuration

use std::fmt;

/// Interval used when the field is empty or unparseable.
pub const DEFAULT_INTERVAL_MS: i64 = 100;

/// Click-count sentinel meaning "never stop".
pub const UNLIMITED_CLICKS: i64 = -1;

/// Warning surfaced when a field fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWarning {
    InvalidInterval,
    InvalidClicks,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldWarning::InvalidInterval => {
                write!(f, "Invalid interval! Using default (100 ms).")
            }
            FieldWarning::InvalidClicks => {
                write!(f, "Invalid clicks! Using default (never stop).")
            }
        }
    }
}

/// Frozen parameters for one start-to-stop run
///
/// Built once per start press from whatever is in the fields at that moment;
/// edits made while clicking only apply to the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickConfig {
    /// Milliseconds between clicks, passed through to the helper
    pub interval_ms: i64,

    /// Remaining click budget, `UNLIMITED_CLICKS` for no limit
    pub max_clicks: i64,

    /// Send double clicks instead of single ones
    pub double_click: bool,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            max_clicks: UNLIMITED_CLICKS,
            double_click: false,
        }
    }
}

/// Result of parsing the two free-text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    pub config: ClickConfig,
    pub interval_warning: Option<FieldWarning>,
    pub clicks_warning: Option<FieldWarning>,
}

impl ClickConfig {
    /// Parse the interval and click-count fields into a config.
    ///
    /// Empty fields fall back to their defaults silently; non-integer text
    /// falls back with a warning. Valid integers are used verbatim, sign
    /// included - there is no range validation.
    pub fn from_fields(interval_text: &str, clicks_text: &str, double_click: bool) -> ParsedFields {
        let mut interval_warning = None;
        let interval_ms = match interval_text.trim() {
            "" => DEFAULT_INTERVAL_MS,
            text => text.parse().unwrap_or_else(|_| {
                interval_warning = Some(FieldWarning::InvalidInterval);
                DEFAULT_INTERVAL_MS
            }),
        };

        let mut clicks_warning = None;
        let max_clicks = match clicks_text.trim() {
            "" => UNLIMITED_CLICKS,
            text => text.parse().unwrap_or_else(|_| {
                clicks_warning = Some(FieldWarning::InvalidClicks);
                UNLIMITED_CLICKS
            }),
        };

        ParsedFields {
            config: Self {
                interval_ms,
                max_clicks,
                double_click,
            },
            interval_warning,
            clicks_warning,
        }
    }

    /// True when the click budget never runs out
    pub fn is_unbounded(&self) -> bool {
        self.max_clicks == UNLIMITED_CLICKS
    }
}
