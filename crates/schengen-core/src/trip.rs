use chrono::{Duration, NaiveDate};

use crate::membership::SchengenLookup;
use crate::status::calculate_schengen_status;
use crate::types::{CountryVisit, FutureTripValidation};

/// Checks a hypothetical future trip against the 90/180 rule.
///
/// Runs the status calculation at two simulated reference dates: the planned
/// entry (existing visits only) and the planned exit (with the planned trip
/// appended). Each warning rule is evaluated independently, so a trip can
/// fail more than one. Callers must supply `planned_entry <= planned_exit`.
pub fn validate_future_trip(
    visits: &[CountryVisit],
    planned_entry: NaiveDate,
    planned_exit: NaiveDate,
    planned_country: &str,
    membership: &dyn SchengenLookup,
) -> FutureTripValidation {
    let planned_days = ((planned_exit - planned_entry).num_days() + 1) as u32;

    if !membership.is_schengen(planned_country) {
        // Days in the existing history still roll through the window,
        // but this trip adds none of its own
        let status_at_exit = calculate_schengen_status(visits, planned_exit, membership);

        return FutureTripValidation {
            can_travel: true,
            warnings: Vec::new(),
            suggestions: vec![format!(
                "{} is not in the Schengen Area; the 90/180 rule does not apply to this trip",
                planned_country
            )],
            max_stay_days: planned_days,
            violates_rule: false,
            days_used_after_trip: status_at_exit.used_days,
            remaining_days_after_trip: status_at_exit.remaining_days,
        };
    }

    let status_on_entry = calculate_schengen_status(visits, planned_entry, membership);

    let mut with_trip = visits.to_vec();
    with_trip.push(CountryVisit {
        country: planned_country.to_string(),
        entry_date: planned_entry,
        exit_date: Some(planned_exit),
        visa_type: None,
        max_days: None,
        notes: None,
    });
    let status_after_trip = calculate_schengen_status(&with_trip, planned_exit, membership);

    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    if status_on_entry.remaining_days == 0 {
        warnings.push(format!(
            "You are already at the 90-day limit on {}",
            planned_entry
        ));
        suggestions.push(format!(
            "Wait until {} for used days to start dropping out of the window",
            status_on_entry.next_reset_date
        ));
    }

    if planned_days > status_on_entry.remaining_days {
        warnings.push(format!(
            "The planned {}-day trip exceeds the {} days available on {}",
            planned_days, status_on_entry.remaining_days, planned_entry
        ));
        suggestions.push(format!(
            "Shorten the trip to at most {} days",
            status_on_entry.remaining_days
        ));
    }

    if !status_after_trip.is_compliant {
        warnings.push(format!(
            "This trip would violate the 90/180 rule: {} days used by {}",
            status_after_trip.used_days, planned_exit
        ));
        if status_on_entry.remaining_days > 0 {
            let safe_exit =
                planned_entry + Duration::days(status_on_entry.remaining_days as i64 - 1);
            suggestions.push(format!("Exit by {} to stay within the limit", safe_exit));
        }
    }

    if warnings.is_empty() {
        suggestions.push(format!(
            "Trip is within the 90/180 rule; {} days will remain after you exit on {}",
            status_after_trip.remaining_days, planned_exit
        ));
    }

    FutureTripValidation {
        can_travel: warnings.is_empty(),
        max_stay_days: status_on_entry.remaining_days,
        violates_rule: !status_after_trip.is_compliant,
        days_used_after_trip: status_after_trip.used_days,
        remaining_days_after_trip: status_after_trip.remaining_days,
        warnings,
        suggestions,
    }
}
