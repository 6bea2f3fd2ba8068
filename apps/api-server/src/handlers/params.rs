//! Path and query parameter decoding.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::error::{AppError, AppResult};

/// Wire format of `minDate` / `maxDate`, read as UTC midnight.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
pub struct TitleSearchParams {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullSearchParams {
    #[serde(default)]
    pub text: String,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

/// Parse a path id. Anything that is not a UUID cannot name a stored
/// document, so it is reported as not found.
pub fn parse_id(raw: &str, entity_type: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("{} with id {} not found", entity_type, raw)))
}

/// Parse a date parameter, falling back to `default` when it is missing or
/// malformed.
pub fn convert_date(raw: Option<&str>, default: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_convert_date_reads_utc_midnight() {
        let parsed = convert_date(Some("2018-03-21"), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(parsed, Utc.with_ymd_and_hms(2018, 3, 21, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_convert_date_falls_back_on_missing_or_malformed() {
        let fallback = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(convert_date(None, fallback), fallback);
        assert_eq!(convert_date(Some(""), fallback), fallback);
        assert_eq!(convert_date(Some("21/03/2018"), fallback), fallback);
        assert_eq!(convert_date(Some("2018-02-30"), fallback), fallback);
    }

    #[test]
    fn test_parse_id_rejects_non_uuid_as_not_found() {
        assert!(matches!(
            parse_id("abc", "User"),
            Err(AppError::NotFound(msg)) if msg == "User with id abc not found"
        ));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "User").unwrap(), id);
    }
}
