//! Resolves canonical timezone names, e.g. "America/Sao_Paulo", to UTC offsets.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Whether `canonical_timezone` names a timezone in the tz database.
pub fn is_valid_timezone(canonical_timezone: &str) -> bool {
    time_tz::timezones::get_by_name(canonical_timezone).is_some()
}

/// The UTC offset that `canonical_timezone` had at `instant`.
///
/// The offset depends on the instant because of daylight saving time.
pub fn get_offset_at(canonical_timezone: &str, instant: &OffsetDateTime) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(instant).to_utc())
}

/// The calendar date of `instant` as seen from `canonical_timezone`.
pub fn local_date(canonical_timezone: &str, instant: OffsetDateTime) -> Option<Date> {
    get_offset_at(canonical_timezone, &instant).map(|offset| instant.to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::{is_valid_timezone, local_date};

    #[test]
    fn recognises_canonical_names() {
        assert!(is_valid_timezone("Etc/UTC"));
        assert!(is_valid_timezone("America/Sao_Paulo"));
        assert!(!is_valid_timezone("Mars/Olympus_Mons"));
    }

    #[test]
    fn utc_midnight_stays_on_same_day_in_utc() {
        let got = local_date("Etc/UTC", datetime!(2020-05-01 00:00:00 UTC));

        assert_eq!(got, Some(date!(2020 - 05 - 01)));
    }

    #[test]
    fn utc_midnight_is_previous_day_west_of_greenwich() {
        let got = local_date("America/Sao_Paulo", datetime!(2020-05-01 00:00:00 UTC));

        assert_eq!(got, Some(date!(2020 - 04 - 30)));
    }

    #[test]
    fn unknown_timezone_has_no_local_date() {
        let got = local_date("Mars/Olympus_Mons", datetime!(2020-05-01 00:00:00 UTC));

        assert_eq!(got, None);
    }
}
