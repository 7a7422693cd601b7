//! Argument checks and query formatting shared by the client operations.

use entity::stats::{normalize_timestamp, parse_timestamp};
use entity::vocabulary::{
    EXTRACT_PIPELINES, LIST_JOBS_ORDER_BY, SUMMARY_LENGTHS_RANGE, SUMMARY_PIPELINES, SUMMARY_TYPES,
};
use log::*;

use crate::error::{invalid_error, Error, InvalidErrorKind};
use crate::options::SummaryLength;

pub fn check_not_empty(name: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        warn!("Empty {} rejected", name);
        return Err(invalid_error(
            InvalidErrorKind::Empty(name),
            &format!("You must provide a {}.", name),
        ));
    }
    Ok(())
}

pub fn check_page_size(page_size: u32) -> Result<(), Error> {
    if page_size == 0 {
        return Err(invalid_error(
            InvalidErrorKind::PageSize,
            "page_size must be at least 1.",
        ));
    }
    Ok(())
}

pub fn check_order_by(order_by: &str) -> Result<(), Error> {
    if !LIST_JOBS_ORDER_BY.contains(&order_by) {
        return Err(invalid_error(
            InvalidErrorKind::OrderBy(order_by.to_string()),
            &format!(
                "order_by must be one of {:?}, not {}.",
                LIST_JOBS_ORDER_BY, order_by
            ),
        ));
    }
    Ok(())
}

pub fn check_summary_type(summary_type: &str) -> Result<(), Error> {
    if !SUMMARY_TYPES.contains(&summary_type) {
        return Err(invalid_error(
            InvalidErrorKind::SummaryType(summary_type.to_string()),
            &format!(
                "Invalid summary type. Available types are: {}",
                SUMMARY_TYPES.join(", ")
            ),
        ));
    }
    Ok(())
}

pub fn check_summary_length(summary_length: &SummaryLength) -> Result<(), Error> {
    let lengths = summary_length.values();
    if lengths.is_empty() {
        return Err(invalid_error(
            InvalidErrorKind::Empty("summary_length"),
            "You must provide at least one summary length.",
        ));
    }

    let (min, max) = SUMMARY_LENGTHS_RANGE;
    match lengths.iter().find(|length| **length < min || **length > max) {
        Some(length) => Err(invalid_error(
            InvalidErrorKind::SummaryLength(*length),
            &format!(
                "You must specify a valid summary length. Summary length must be between {} and {}.",
                min, max
            ),
        )),
        None => Ok(()),
    }
}

pub fn check_summary_pipelines(pipelines: &[String]) -> Result<(), Error> {
    check_pipelines(pipelines, SUMMARY_PIPELINES)
}

pub fn check_extract_pipelines(pipelines: &[String]) -> Result<(), Error> {
    check_pipelines(pipelines, EXTRACT_PIPELINES)
}

fn check_pipelines(pipelines: &[String], available: &[&str]) -> Result<(), Error> {
    if pipelines.is_empty() {
        return Err(invalid_error(
            InvalidErrorKind::Empty("pipelines"),
            "You must provide at least one pipeline.",
        ));
    }

    match pipelines
        .iter()
        .find(|pipeline| !available.contains(&pipeline.as_str()))
    {
        Some(pipeline) => Err(invalid_error(
            InvalidErrorKind::Pipeline(pipeline.clone()),
            &format!(
                "You must specify a valid pipeline. Available pipelines are: {}",
                available.join(", ")
            ),
        )),
        None => Ok(()),
    }
}

/// Normalises an optional `min_created`/`max_created` pair to
/// `YYYY-MM-DDTHH:MM:SS`, checking the range is ordered.
pub fn normalize_time_range(
    min_created: Option<&str>,
    max_created: Option<&str>,
) -> Result<(Option<String>, Option<String>), Error> {
    let normalize = |value: Option<&str>| -> Result<Option<String>, Error> {
        value
            .map(|timestamp| {
                normalize_timestamp(timestamp).map_err(|e| {
                    warn!("Invalid timestamp {}: {}", timestamp, e);
                    invalid_error(
                        InvalidErrorKind::Timestamp(timestamp.to_string()),
                        &format!(
                            "{} must be formatted as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.",
                            timestamp
                        ),
                    )
                })
            })
            .transpose()
    };

    let min = normalize(min_created)?;
    let max = normalize(max_created)?;

    if let (Some(min), Some(max)) = (&min, &max) {
        let ordered = match (parse_timestamp(min), parse_timestamp(max)) {
            (Ok(min), Ok(max)) => min <= max,
            _ => false,
        };
        if !ordered {
            return Err(invalid_error(
                InvalidErrorKind::TimeRange,
                &format!("min_created {} must not be after max_created {}.", min, max),
            ));
        }
    }

    Ok((min, max))
}

pub fn format_lengths(summary_length: &SummaryLength) -> String {
    summary_length
        .values()
        .iter()
        .map(|length| length.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

pub fn format_pipelines(pipelines: &[String]) -> String {
    pipelines.join(",")
}

pub fn format_tags(tags: &[String]) -> String {
    tags.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_check_not_empty() {
        assert!(check_not_empty("job_name", "job_1").is_ok());
        let err = check_not_empty("job_name", "  ").unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::Empty("job_name"))
        );
    }

    #[test]
    fn test_check_order_by() {
        for order_by in LIST_JOBS_ORDER_BY {
            assert!(check_order_by(order_by).is_ok());
        }
        for order_by in ["invalid", "+time_started", "+time_completed"] {
            assert!(check_order_by(order_by).is_err(), "{} is not valid", order_by);
        }
    }

    #[test]
    fn test_check_page_size() {
        assert!(check_page_size(1).is_ok());
        assert_eq!(
            check_page_size(0).unwrap_err().error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::PageSize)
        );
    }

    #[test]
    fn test_check_summary_length() {
        assert!(check_summary_length(&SummaryLength::One(1)).is_ok());
        assert!(check_summary_length(&SummaryLength::Many(vec![1, 3, 5])).is_ok());

        assert_eq!(
            check_summary_length(&SummaryLength::One(0))
                .unwrap_err()
                .error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::SummaryLength(0))
        );
        assert_eq!(
            check_summary_length(&SummaryLength::Many(vec![2, 6]))
                .unwrap_err()
                .error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::SummaryLength(6))
        );
        assert!(check_summary_length(&SummaryLength::Many(vec![])).is_err());
    }

    #[test]
    fn test_check_pipelines() {
        assert!(check_summary_pipelines(&strings(&["transcribe", "summarize"])).is_ok());
        assert!(check_summary_pipelines(&strings(&["summarize"])).is_ok());
        assert_eq!(
            check_summary_pipelines(&strings(&["invalid"]))
                .unwrap_err()
                .error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::Pipeline("invalid".to_string()))
        );
        assert!(
            check_summary_pipelines(&strings(&["emotions"])).is_err(),
            "extract pipelines cannot run in a summary"
        );

        assert!(check_extract_pipelines(&strings(&["emotions", "topic_segments"])).is_ok());
        assert!(check_extract_pipelines(&strings(&["summarize"])).is_err());
        assert!(check_extract_pipelines(&[]).is_err());
    }

    #[test]
    fn test_check_summary_type() {
        for summary_type in SUMMARY_TYPES {
            assert!(check_summary_type(summary_type).is_ok());
        }
        assert!(check_summary_type("invalid").is_err());
    }

    #[test]
    fn test_normalize_time_range() {
        let (min, max) = normalize_time_range(Some("2021-01-01"), Some("2021-01-31")).unwrap();
        assert_eq!(min.as_deref(), Some("2021-01-01T00:00:00"));
        assert_eq!(max.as_deref(), Some("2021-01-31T00:00:00"));

        assert_eq!(normalize_time_range(None, None).unwrap(), (None, None));

        assert_eq!(
            normalize_time_range(Some("2021-02-01"), Some("2021-01-31"))
                .unwrap_err()
                .error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::TimeRange)
        );
        assert_eq!(
            normalize_time_range(Some("01/01/2021"), None)
                .unwrap_err()
                .error_kind,
            DomainErrorKind::Invalid(InvalidErrorKind::Timestamp("01/01/2021".to_string()))
        );
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_lengths(&SummaryLength::One(3)), "3");
        assert_eq!(format_lengths(&SummaryLength::Many(vec![1, 3, 5])), "1,3,5");
        assert_eq!(
            format_pipelines(&strings(&["transcribe", "summarize"])),
            "transcribe,summarize"
        );
        assert_eq!(format_tags(&strings(&["sales", "q3"])), "sales,q3");
        assert_eq!(format_tags(&strings(&["sales"])), "sales");
    }
}
