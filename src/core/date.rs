//! Date label resolution. The current date is always passed in, so callers
//! (and tests) decide which clock to read.
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Input value that resolves to the current local date
pub const TODAY_SENTINEL: &str = "today";

/// Output format for a resolved date (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return `input` unchanged unless it is the `today` sentinel, in which case
/// `today` is formatted as `YYYY-MM-DD`. Malformed dates pass through as-is.
pub fn resolve_date(input: &str, today: NaiveDate) -> String {
    if input != TODAY_SENTINEL {
        return input.to_string();
    }
    let resolved = today.format(DATE_FORMAT).to_string();
    debug!("Resolved date sentinel '{}' to {}", input, resolved);
    resolved
}

/// `resolve_date` against the local wall clock.
pub fn resolve_date_local(input: &str) -> String {
    resolve_date(input, Local::now().date_naive())
}
