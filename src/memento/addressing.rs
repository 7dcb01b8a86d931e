//! Retrieval URL addressing for the Memento API.
//!
//! Maps a retrieval target (original URL plus optional timestamp, or a
//! resolved CDX capture) to the single URL to request from the archive.

use chrono::{DateTime, TimeZone, Utc};
use url::Url;

use crate::config::{MEMENTO_RAW_SUFFIX, MEMENTO_TIMESTAMP_FORMAT};
use crate::error_handling::MementoError;
use crate::memento::MementoTarget;

/// Renders a timestamp as the 14-digit Memento segment (`YYYYMMDDHHMMSS`).
///
/// The input is normalized to UTC before rendering, so two datetimes for the
/// same instant in different zones render identically.
pub fn format_memento_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    timestamp
        .with_timezone(&Utc)
        .format(MEMENTO_TIMESTAMP_FORMAT)
        .to_string()
}

/// Computes the retrieval URL for a target.
///
/// The URL joins the API base (normalized to end with `/`) with the path
/// `{timestamp}{suffix}/{original_url}`. An absent timestamp renders as the
/// wildcard `*`; `raw` appends the `id_` suffix requesting unmodified bytes.
/// The original URL is embedded verbatim after the timestamp segment, per the
/// archive's path convention.
///
/// # Errors
///
/// Returns [`MementoError::InvalidTarget`] if the target's original URL is
/// empty, or a URL error if the joined string does not parse.
pub fn memento_url(api_url: &Url, target: &MementoTarget, raw: bool) -> Result<Url, MementoError> {
    let (original_url, timestamp) = match target {
        MementoTarget::Url { url, timestamp } => (
            url.as_str(),
            timestamp.as_ref().map(format_memento_timestamp),
        ),
        MementoTarget::Capture(capture) => (
            capture.url.as_str(),
            Some(format_memento_timestamp(&capture.timestamp)),
        ),
    };
    if original_url.trim().is_empty() {
        return Err(MementoError::InvalidTarget(
            "original URL must not be empty".to_string(),
        ));
    }

    let timestamp_segment = timestamp.unwrap_or_else(|| "*".to_string());
    let raw_suffix = if raw { MEMENTO_RAW_SUFFIX } else { "" };
    let mut base = api_url.as_str().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let memento_url = format!("{base}{timestamp_segment}{raw_suffix}/{original_url}");
    Ok(Url::parse(&memento_url)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn api_url() -> Url {
        Url::parse("https://web.archive.org/web/").unwrap()
    }

    fn url_target(timestamp: Option<DateTime<Utc>>) -> MementoTarget {
        MementoTarget::Url {
            url: "https://www.example.com/".to_string(),
            timestamp,
        }
    }

    #[test]
    fn timestamp_renders_as_fourteen_digits_utc() {
        let timestamp = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_memento_timestamp(&timestamp), "20230101000000");
    }

    #[test]
    fn timestamp_rendering_normalizes_zone_offsets() {
        // 2023-01-01T01:00:00+01:00 is the same instant as midnight UTC.
        let offset = FixedOffset::east_opt(3600).unwrap();
        let zoned = offset.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            format_memento_timestamp(&zoned),
            format_memento_timestamp(&utc)
        );
    }

    #[test]
    fn url_with_timestamp_embeds_original_url_verbatim() {
        let timestamp = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let url = memento_url(&api_url(), &url_target(Some(timestamp)), false).unwrap();
        assert_eq!(
            url.as_str(),
            "https://web.archive.org/web/20230101000000/https://www.example.com/"
        );
    }

    #[test]
    fn missing_timestamp_renders_wildcard_segment() {
        let url = memento_url(&api_url(), &url_target(None), false).unwrap();
        assert_eq!(
            url.as_str(),
            "https://web.archive.org/web/*/https://www.example.com/"
        );
    }

    #[test]
    fn raw_mode_appends_id_suffix_to_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let url = memento_url(&api_url(), &url_target(Some(timestamp)), true).unwrap();
        assert_eq!(
            url.as_str(),
            "https://web.archive.org/web/20230101000000id_/https://www.example.com/"
        );
    }

    #[test]
    fn api_url_without_trailing_slash_is_normalized() {
        let base = Url::parse("https://web.archive.org/web").unwrap();
        let url = memento_url(&base, &url_target(None), false).unwrap();
        assert!(url
            .as_str()
            .starts_with("https://web.archive.org/web/*/https://"));
    }

    #[test]
    fn capture_target_uses_the_capture_timestamp() {
        let capture = crate::cdx::CdxCapture {
            url: "https://www.example.com/".to_string(),
            timestamp: Utc.with_ymd_and_hms(2022, 6, 15, 12, 30, 45).unwrap(),
            mimetype: None,
            status_code: None,
        };
        let url = memento_url(&api_url(), &MementoTarget::Capture(capture), false).unwrap();
        assert!(url.path().starts_with("/web/20220615123045/"));
    }

    #[test]
    fn empty_original_url_is_an_invalid_target() {
        let target = MementoTarget::Url {
            url: "  ".to_string(),
            timestamp: None,
        };
        let err = memento_url(&api_url(), &target, false).unwrap_err();
        assert!(matches!(err, MementoError::InvalidTarget(_)));
    }
}
