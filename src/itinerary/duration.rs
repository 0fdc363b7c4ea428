use chrono::NaiveDate;

use super::ItineraryError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive number of trip days between two `YYYY-MM-DD` dates.
///
/// An end date before the start date is not rejected: the result is simply
/// zero or negative.
pub fn calculate_duration(start_date: &str, end_date: &str) -> Result<i64, ItineraryError> {
    let start = parse_date("start_date", start_date)?;
    let end = parse_date("end_date", end_date)?;
    Ok((end - start).num_days() + 1)
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ItineraryError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| ItineraryError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_day_count() {
        assert_eq!(calculate_duration("2024-01-01", "2024-01-03").unwrap(), 3);
    }

    #[test]
    fn test_same_day_trip() {
        assert_eq!(calculate_duration("2024-05-10", "2024-05-10").unwrap(), 1);
    }

    #[test]
    fn test_spans_leap_day_and_month_end() {
        assert_eq!(calculate_duration("2024-02-28", "2024-03-01").unwrap(), 3);
        assert_eq!(calculate_duration("2023-12-30", "2024-01-02").unwrap(), 4);
    }

    #[test]
    fn test_reversed_dates_pass_through() {
        assert_eq!(calculate_duration("2024-01-03", "2024-01-01").unwrap(), -1);
        assert_eq!(calculate_duration("2024-01-02", "2024-01-01").unwrap(), 0);
    }

    #[test]
    fn test_invalid_start_date() {
        let err = calculate_duration("01-01-2024", "2024-01-03").unwrap_err();
        match err {
            ItineraryError::InvalidDate { field, value, .. } => {
                assert_eq!(field, "start_date");
                assert_eq!(value, "01-01-2024");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_end_date() {
        let err = calculate_duration("2024-01-01", "").unwrap_err();
        match err {
            ItineraryError::InvalidDate { field, .. } => assert_eq!(field, "end_date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
