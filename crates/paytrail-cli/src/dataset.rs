//! Schedule file loading.
//!
//! A schedule is a TOML document with one `[[points]]` table per point, in
//! x-axis order:
//!
//! ```toml
//! [[points]]
//! id = "90"
//! year = "A90"
//! major = true
//! value = "150,000"
//! last_payment = true
//! ```

use std::{fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use paytrail::{PaytrailError, semantic::DataPoint};

#[derive(Debug, Deserialize)]
struct Schedule {
    #[serde(default)]
    points: Vec<DataPoint>,
}

/// Reads and parses a schedule file.
///
/// # Errors
///
/// Returns `PaytrailError::Io` if the file cannot be read and
/// `PaytrailError::Dataset` if it is not a valid schedule.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, PaytrailError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading schedule");

    let content = fs::read_to_string(path)?;
    let points = parse_schedule(&content)?;

    debug!(points_count = points.len(); "Schedule loaded");
    Ok(points)
}

/// Parses a schedule from TOML text.
///
/// # Errors
///
/// Returns `PaytrailError::Dataset` for malformed TOML or points missing an
/// `id`.
pub fn parse_schedule(content: &str) -> Result<Vec<DataPoint>, PaytrailError> {
    let schedule: Schedule = toml::from_str(content)
        .map_err(|err| PaytrailError::Dataset(format!("Invalid schedule: {err}")))?;
    Ok(schedule.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schedule() {
        let points = parse_schedule(
            r#"
            [[points]]
            id = "1"
            label = "1"
            year = "1"

            [[points]]
            id = "90"
            year = "A90"
            major = true
            note = "Maturity"
            value = "150,000"
            level = 0
            amount_label = "100,000"
            last_payment = true
            divide_sa = true
            "#,
        )
        .unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id(), "1");
        assert!(!points[0].is_major());

        let last = &points[1];
        assert!(last.is_major());
        assert!(last.is_last_payment());
        assert!(last.divides_sum_assured());
        assert_eq!(last.value(), Some("150,000"));
        assert_eq!(last.level(), Some(0));
        assert_eq!(last.amount_label(), Some("100,000"));
        assert_eq!(last.note(), Some("Maturity"));
    }

    #[test]
    fn test_empty_schedule() {
        assert!(parse_schedule("").unwrap().is_empty());
    }

    #[test]
    fn test_point_without_id_is_dataset_error() {
        let err = parse_schedule("[[points]]\nlabel = \"x\"").unwrap_err();
        assert!(matches!(err, PaytrailError::Dataset(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_schedule("no/such/schedule.toml").unwrap_err();
        assert!(matches!(err, PaytrailError::Io(_)));
    }
}
