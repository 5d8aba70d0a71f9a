use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// One aired or scheduled installment of a season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    /// 1-based episode index within the season
    pub number: u32,
    /// Calendar date the episode aired or is scheduled to air.
    /// Absent for unannounced episodes; unparsable dates are treated as absent.
    #[serde(default, deserialize_with = "lenient_air_date")]
    pub air_date: Option<NaiveDate>,
    /// Display name, carried through for diagnostics only
    #[serde(default)]
    pub title: String,
}

impl Episode {
    /// Creates a new episode
    pub fn new(number: u32, air_date: Option<NaiveDate>, title: impl Into<String>) -> Self {
        Self {
            number,
            air_date,
            title: title.into(),
        }
    }
}

/// Deserializes an air date, mapping missing, null, or unparsable values to `None`
///
/// Metadata sources routinely ship empty strings or junk for unannounced
/// episodes, and a bad date must never fail the whole classification request.
fn lenient_air_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|value| value.as_str())
        .and_then(parse_air_date))
}

/// Parses a calendar date from either a plain date or an RFC 3339 timestamp
fn parse_air_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_plain_date() {
        let episode: Episode =
            serde_json::from_str(r#"{"number": 1, "air_date": "2024-01-15", "title": "Pilot"}"#)
                .unwrap();

        assert_eq!(episode.number, 1);
        assert_eq!(
            episode.air_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert_eq!(episode.title, "Pilot");
    }

    #[test]
    fn test_deserialize_rfc3339_timestamp() {
        let episode: Episode = serde_json::from_str(
            r#"{"number": 2, "air_date": "2024-01-22T08:00:00Z", "title": "Two"}"#,
        )
        .unwrap();

        assert_eq!(
            episode.air_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap())
        );
    }

    #[test]
    fn test_deserialize_missing_air_date() {
        let episode: Episode =
            serde_json::from_str(r#"{"number": 3, "title": "Unannounced"}"#).unwrap();
        assert_eq!(episode.air_date, None);
    }

    #[test]
    fn test_deserialize_null_air_date() {
        let episode: Episode =
            serde_json::from_str(r#"{"number": 3, "air_date": null, "title": "TBA"}"#).unwrap();
        assert_eq!(episode.air_date, None);
    }

    #[test]
    fn test_unparsable_air_date_treated_as_missing() {
        let episode: Episode =
            serde_json::from_str(r#"{"number": 4, "air_date": "soon", "title": "Four"}"#).unwrap();
        assert_eq!(episode.air_date, None);
    }

    #[test]
    fn test_empty_air_date_treated_as_missing() {
        let episode: Episode =
            serde_json::from_str(r#"{"number": 5, "air_date": "  ", "title": "Five"}"#).unwrap();
        assert_eq!(episode.air_date, None);
    }

    #[test]
    fn test_non_string_air_date_treated_as_missing() {
        let episode: Episode =
            serde_json::from_str(r#"{"number": 7, "air_date": 20240115, "title": "Seven"}"#)
                .unwrap();
        assert_eq!(episode.air_date, None);
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let episode: Episode =
            serde_json::from_str(r#"{"number": 6, "air_date": "2024-02-01"}"#).unwrap();
        assert_eq!(episode.title, "");
    }
}
