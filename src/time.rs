//! Epoch timestamp display

use anyhow::{Result, anyhow};
use chrono::TimeZone;

/// `Thu Jan  1 00:00:00 1970`, day of month padded with a space
const DISPLAY_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Format epoch seconds as a display string in the time zone `tz`
pub fn display_epoch_in<Tz>(tz: &Tz, epoch_secs: i64) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let dt = tz
        .timestamp_opt(epoch_secs, 0)
        .earliest()
        .ok_or_else(|| anyhow!("timestamp {} is out of range", epoch_secs))?;
    Ok(dt.format(DISPLAY_FORMAT).to_string())
}
