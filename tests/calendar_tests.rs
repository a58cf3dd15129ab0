//! Date and time integration tests
//!
//! Fixed dates throughout; zone cases pin zones whose UTC offset does not
//! change across years (Asia/Tokyo) or pick dates safely inside DST terms.

use opskit::calendar::{self, Shift};
use opskit::OpsError;

mod shift_tests {
    use super::*;

    #[test]
    fn test_add_days_to_bare_date() {
        let shifted = calendar::shift("2024-09-10", Shift { days: 5, ..Default::default() }).unwrap();
        assert_eq!(shifted, "2024-09-15 00:00:00");
    }

    #[test]
    fn test_add_weeks() {
        let shifted = calendar::shift("2024-09-10", Shift { weeks: 1, ..Default::default() }).unwrap();
        assert_eq!(shifted, "2024-09-17 00:00:00");
    }

    #[test]
    fn test_months_count_as_thirty_days() {
        let shifted = calendar::shift("2024-09-10", Shift { months: 1, ..Default::default() }).unwrap();
        assert_eq!(shifted, "2024-10-10 00:00:00");
    }

    #[test]
    fn test_combined_shift() {
        let delta = Shift {
            days: 1,
            weeks: 1,
            months: 1,
        };
        let shifted = calendar::shift("2024-09-10", delta).unwrap();
        assert_eq!(shifted, "2024-10-18 00:00:00");
    }

    #[test]
    fn test_time_component_survives_shift() {
        let shifted =
            calendar::shift("2024-09-10 06:30:00", Shift { days: 5, ..Default::default() })
                .unwrap();
        assert_eq!(shifted, "2024-09-15 06:30:00");
    }

    #[test]
    fn test_negative_days_move_backwards() {
        let shifted = calendar::shift("2024-09-10", Shift { days: -10, ..Default::default() })
            .unwrap();
        assert_eq!(shifted, "2024-08-31 00:00:00");
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let result = calendar::shift("10/09/2024", Shift::default());
        assert!(matches!(result, Err(OpsError::DateParse(_))));
    }
}

mod difference_tests {
    use super::*;

    #[test]
    fn test_whole_day_difference() {
        let span = calendar::difference("2024-09-10", "2024-09-15").unwrap();
        assert_eq!(span.days, 5);
        assert_eq!(span.hours, 0);
        assert_eq!(span.minutes, 0);
        assert_eq!(span.to_string(), "5 days, 0 hours, 0 minutes");
    }

    #[test]
    fn test_sub_day_units_are_split_out() {
        let span = calendar::difference("2024-09-10 08:30:00", "2024-09-12 10:45:00").unwrap();
        assert_eq!(span.days, 2);
        assert_eq!(span.hours, 2);
        assert_eq!(span.minutes, 15);
    }

    #[test]
    fn test_reversed_order_goes_negative() {
        let span = calendar::difference("2024-09-15", "2024-09-10").unwrap();
        assert_eq!(span.days, -5);
    }
}

mod zone_tests {
    use super::*;

    #[test]
    fn test_convert_utc_to_tokyo() {
        let converted = calendar::convert("2024-09-10 12:00:00", "UTC", "Asia/Tokyo").unwrap();
        assert_eq!(converted, "2024-09-10 21:00:00 JST+0900");
    }

    #[test]
    fn test_convert_crosses_midnight() {
        let converted = calendar::convert("2024-09-10 20:00:00", "UTC", "Asia/Tokyo").unwrap();
        assert_eq!(converted, "2024-09-11 05:00:00 JST+0900");
    }

    #[test]
    fn test_convert_to_new_york_in_winter() {
        // mid-January is outside DST
        let converted =
            calendar::convert("2024-01-15 12:00:00", "UTC", "America/New_York").unwrap();
        assert_eq!(converted, "2024-01-15 07:00:00 EST-0500");
    }

    #[test]
    fn test_bare_date_converts_as_midnight() {
        let converted = calendar::convert("2024-09-10", "UTC", "Asia/Tokyo").unwrap();
        assert_eq!(converted, "2024-09-10 09:00:00 JST+0900");
    }

    #[test]
    fn test_unknown_zone_is_an_error() {
        let result = calendar::convert("2024-09-10 12:00:00", "UTC", "Mars/Olympus");
        assert!(matches!(result, Err(OpsError::UnknownTimezone(zone)) if zone == "Mars/Olympus"));
    }

    #[test]
    fn test_now_formats_with_zone_and_offset() {
        let stamp = calendar::now("Asia/Tokyo").unwrap();
        assert!(stamp.ends_with("JST+0900"), "unexpected stamp: {stamp}");
    }
}
