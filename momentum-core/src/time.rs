//! Time utilities: accurate timezone-aware due dates.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse a due date in an IANA tz like "America/Chicago", returning UTC.
///
/// Accepts "2026-02-20 23:59", or a bare "2026-02-20" which means end of
/// that day (23:59 local).
pub fn parse_local_due_to_utc(local: &str, tz: &str) -> Result<DateTime<Utc>> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

    let ndt = match NaiveDateTime::parse_from_str(local, "%Y-%m-%d %H:%M") {
        Ok(ndt) => ndt,
        Err(_) => NaiveDate::parse_from_str(local, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("invalid due date '{local}': {e}"))?
            .and_hms_opt(23, 59, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid due date '{local}'"))?,
    };

    let local_dt = tz
        .from_local_datetime(&ndt)
        .single()
        .ok_or_else(|| anyhow::anyhow!("ambiguous or invalid local time (DST?): {local} {tz}"))?;

    Ok(local_dt.with_timezone(&Utc))
}

/// Helper: format a UTC time into RFC3339.
pub fn to_rfc3339_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
