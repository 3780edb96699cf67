use chrono::{Duration, NaiveDate, Utc};

use crate::membership::SchengenLookup;
use crate::trip::validate_future_trip;
use crate::types::{CountryVisit, SafeTravelDates};

/// Default number of candidate start dates examined by the search
pub const DEFAULT_SEARCH_HORIZON_DAYS: u32 = 365;

/// Tuning for the safe-date search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How many days past the earliest date to examine (default: 365)
    pub horizon_days: u32,

    /// Schengen country used for the simulated trip (default: France).
    /// Must be a member under the supplied lookup; the choice does not
    /// affect the day arithmetic.
    pub probe_country: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_SEARCH_HORIZON_DAYS,
            probe_country: "France".to_string(),
        }
    }
}

/// Strategy for locating the earliest compliant travel window.
///
/// Kept behind a trait so the scan can be swapped for a closed-form or
/// greedy search without touching callers.
pub trait SafeDateSearch {
    /// Finds the earliest window of `duration_days` days starting on or
    /// after `earliest_date` that the 90/180 rule allows, or `None` when
    /// no such window exists inside the search horizon.
    fn find_safe_travel_dates(
        &self,
        visits: &[CountryVisit],
        duration_days: u32,
        earliest_date: NaiveDate,
        membership: &dyn SchengenLookup,
    ) -> Option<SafeTravelDates>;
}

/// Brute-force scan over every candidate start date.
///
/// Each candidate costs one trip validation, so the whole search is
/// O(horizon x visits). Fine for personal travel histories.
#[derive(Debug, Clone)]
pub struct LinearScanSearch {
    config: SearchConfig,
}

impl LinearScanSearch {
    /// Creates a search with the given configuration, or defaults
    pub fn new(config: Option<SearchConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }
}

impl SafeDateSearch for LinearScanSearch {
    fn find_safe_travel_dates(
        &self,
        visits: &[CountryVisit],
        duration_days: u32,
        earliest_date: NaiveDate,
        membership: &dyn SchengenLookup,
    ) -> Option<SafeTravelDates> {
        if duration_days == 0 {
            return None;
        }

        for offset in 0..self.config.horizon_days {
            let start = earliest_date + Duration::days(offset as i64);
            let end = start + Duration::days(duration_days as i64 - 1);

            let validation =
                validate_future_trip(visits, start, end, &self.config.probe_country, membership);

            if validation.can_travel && !validation.violates_rule {
                return Some(SafeTravelDates { start, end });
            }
        }

        log::debug!(
            "no compliant {}-day window found within {} days of {}",
            duration_days,
            self.config.horizon_days,
            earliest_date
        );
        None
    }
}

/// Searches from today (UTC) with the default configuration.
pub fn find_safe_travel_dates_from_today(
    visits: &[CountryVisit],
    duration_days: u32,
    membership: &dyn SchengenLookup,
) -> Option<SafeTravelDates> {
    LinearScanSearch::new(None).find_safe_travel_dates(
        visits,
        duration_days,
        Utc::now().date_naive(),
        membership,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::SchengenCountries;

    fn members() -> SchengenCountries {
        SchengenCountries::new(["France", "Germany", "Spain"])
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn visit(country: &str, entry: NaiveDate, exit: Option<NaiveDate>) -> CountryVisit {
        CountryVisit {
            country: country.to_string(),
            entry_date: entry,
            exit_date: exit,
            visa_type: None,
            max_days: None,
            notes: None,
        }
    }

    #[test]
    fn test_empty_history_allows_immediate_travel() {
        let earliest = date(2024, 6, 1);
        let search = LinearScanSearch::new(None);
        let found = search
            .find_safe_travel_dates(&[], 14, earliest, &members())
            .unwrap();

        assert_eq!(found.start, earliest);
        assert_eq!(found.end, earliest + Duration::days(13));
    }

    #[test]
    fn test_found_window_validates_clean() {
        let earliest = date(2024, 6, 1);
        let visits = vec![visit(
            "France",
            earliest - Duration::days(80),
            Some(earliest - Duration::days(1)),
        )];
        let search = LinearScanSearch::new(None);
        let found = search
            .find_safe_travel_dates(&visits, 30, earliest, &members())
            .unwrap();

        let validation =
            validate_future_trip(&visits, found.start, found.end, "France", &members());
        assert!(validation.can_travel);
        assert!(!validation.violates_rule);
    }

    #[test]
    fn test_no_earlier_start_is_compliant() {
        let earliest = date(2024, 6, 1);
        let visits = vec![visit(
            "France",
            earliest - Duration::days(80),
            Some(earliest - Duration::days(1)),
        )];
        let search = LinearScanSearch::new(None);
        let found = search
            .find_safe_travel_dates(&visits, 30, earliest, &members())
            .unwrap();

        assert!(found.start > earliest);

        let mut candidate = earliest;
        while candidate < found.start {
            let validation = validate_future_trip(
                &visits,
                candidate,
                candidate + Duration::days(29),
                "France",
                &members(),
            );
            assert!(!validation.can_travel || validation.violates_rule);
            candidate += Duration::days(1);
        }
    }

    #[test]
    fn test_none_when_horizon_exhausted() {
        // An ongoing stay keeps the traveler pinned at the limit, and a tiny
        // horizon gives the scan no room to find daylight
        let earliest = date(2024, 6, 1);
        let visits = vec![visit("France", earliest - Duration::days(120), None)];
        let search = LinearScanSearch::new(Some(SearchConfig {
            horizon_days: 30,
            ..SearchConfig::default()
        }));

        assert!(
            search
                .find_safe_travel_dates(&visits, 60, earliest, &members())
                .is_none()
        );
    }

    #[test]
    fn test_zero_duration_returns_none() {
        let search = LinearScanSearch::new(None);

        assert!(
            search
                .find_safe_travel_dates(&[], 0, date(2024, 6, 1), &members())
                .is_none()
        );
    }

    #[test]
    fn test_single_day_window() {
        let earliest = date(2024, 6, 1);
        let search = LinearScanSearch::new(None);
        let found = search
            .find_safe_travel_dates(&[], 1, earliest, &members())
            .unwrap();

        assert_eq!(found.start, found.end);
    }
}
