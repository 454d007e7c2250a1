use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `--deadline` value.
///
/// `none` or an empty string clears the deadline. A bare date means the end
/// of that day in the local timezone. Anything else must be RFC 3339.
pub fn parse_deadline(raw: &str) -> anyhow::Result<Option<DateTime<Utc>>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return end_of_day(date, &Local).map(Some);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|error| {
            anyhow::anyhow!("invalid deadline '{raw}': expected YYYY-MM-DD or RFC 3339 ({error})")
        })
}

fn end_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> anyhow::Result<DateTime<Utc>> {
    let naive = date.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN));
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("{date} 23:59 does not exist in the local timezone"))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use duna_core::enums::{Priority, Recurrence};
    use pretty_assertions::assert_eq;

    use super::{end_of_day, parse_deadline, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let priority: Priority = parse_enum("High", "priority").expect("priority should parse");
        assert_eq!(priority, Priority::High);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Recurrence>("yearly", "recurrence").expect_err("should fail");
        assert!(err.to_string().contains("invalid recurrence 'yearly'"));
    }

    #[test]
    fn none_clears_the_deadline() {
        assert_eq!(parse_deadline("none").expect("should parse"), None);
        assert_eq!(parse_deadline("").expect("should parse"), None);
    }

    #[test]
    fn rfc3339_keeps_the_instant() {
        let parsed = parse_deadline("2026-05-01T10:00:00+02:00").expect("should parse");
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap()));
    }

    #[test]
    fn bare_date_is_end_of_day_in_the_given_zone() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let at = end_of_day(date, &tz).expect("should resolve");
        assert_eq!(at, Utc.with_ymd_and_hms(2026, 5, 1, 20, 59, 0).unwrap());
    }

    #[test]
    fn garbage_deadline_is_rejected() {
        let err = parse_deadline("next friday").expect_err("should fail");
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
