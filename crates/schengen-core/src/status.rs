use chrono::{Duration, NaiveDate, Utc};

use crate::membership::SchengenLookup;
use crate::types::{CountryVisit, ProcessedVisit, SchengenStatus, SchengenViolation};

/// Maximum days allowed inside the rolling window under the 90/180 rule
pub const SCHENGEN_DAY_LIMIT: u32 = 90;

/// Length of the rolling window in days
pub const ROLLING_WINDOW_DAYS: i64 = 180;

/// Remaining-day count at or below which an advisory warning is raised
const LOW_REMAINING_THRESHOLD: u32 = 10;

/// Resolves Schengen membership for each visit.
///
/// An ongoing stay (`exit_date = None`) stays unresolved here; the status
/// calculation clips it against the reference date.
pub fn normalize_visits(
    visits: &[CountryVisit],
    membership: &dyn SchengenLookup,
) -> Vec<ProcessedVisit> {
    visits
        .iter()
        .map(|visit| ProcessedVisit {
            country: visit.country.clone(),
            entry_date: visit.entry_date,
            exit_date: visit.exit_date,
            is_schengen: membership.is_schengen(&visit.country),
        })
        .collect()
}

/// Computes the 90/180 compliance snapshot for `visits` as of `reference_date`.
///
/// Pure and deterministic: the same visits, reference date, and membership
/// always produce the same status. Entry and exit days both count as full
/// days present, and visit spans are clipped to the 180-day window ending
/// at the reference date. Overlapping visits are summed independently.
pub fn calculate_schengen_status(
    visits: &[CountryVisit],
    reference_date: NaiveDate,
    membership: &dyn SchengenLookup,
) -> SchengenStatus {
    let window_start = reference_date - Duration::days(ROLLING_WINDOW_DAYS);
    let processed = normalize_visits(visits, membership);

    let relevant: Vec<&ProcessedVisit> = processed
        .iter()
        .filter(|visit| visit.is_schengen)
        .filter(|visit| {
            let effective_end = visit.exit_date.unwrap_or(reference_date);
            effective_end >= window_start && visit.entry_date <= reference_date
        })
        .collect();

    let used_days: u32 = relevant
        .iter()
        .map(|visit| days_in_window(visit, window_start, reference_date))
        .sum::<i64>() as u32;

    log::debug!(
        "{} Schengen days used in the window ending {}",
        used_days,
        reference_date
    );

    let mut violations = Vec::new();
    if used_days > SCHENGEN_DAY_LIMIT {
        let days_over_limit = used_days - SCHENGEN_DAY_LIMIT;
        violations.push(SchengenViolation {
            date: reference_date,
            days_over_limit,
            description: format!(
                "{} days over the 90-day limit as of {}",
                days_over_limit, reference_date
            ),
        });
    }

    // The count starts dropping 180 days after the oldest in-window entry
    let next_reset_date = relevant
        .iter()
        .filter(|visit| visit.entry_date >= window_start)
        .map(|visit| visit.entry_date)
        .min()
        .unwrap_or(reference_date)
        + Duration::days(ROLLING_WINDOW_DAYS);

    SchengenStatus {
        used_days,
        remaining_days: SCHENGEN_DAY_LIMIT.saturating_sub(used_days),
        next_reset_date,
        is_compliant: violations.is_empty(),
        violations,
    }
}

/// Computes the compliance snapshot as of today (UTC).
pub fn calculate_schengen_status_today(
    visits: &[CountryVisit],
    membership: &dyn SchengenLookup,
) -> SchengenStatus {
    calculate_schengen_status(visits, Utc::now().date_naive(), membership)
}

/// Days a visit contributes inside the window, inclusive of both endpoints.
///
/// Callers must only pass visits that intersect the window.
fn days_in_window(visit: &ProcessedVisit, window_start: NaiveDate, reference_date: NaiveDate) -> i64 {
    let start = visit.entry_date.max(window_start);
    let end = visit.exit_date.unwrap_or(reference_date).min(reference_date);
    (end - start).num_days() + 1
}

/// Advisory messages for a computed status, ordered by severity.
pub fn generate_warnings(status: &SchengenStatus) -> Vec<String> {
    let mut warnings = Vec::new();

    if !status.is_compliant {
        warnings.push(format!(
            "You have exceeded the 90-day limit: {} days used in the last 180 days",
            status.used_days
        ));
    }

    if status.remaining_days > 0 && status.remaining_days <= LOW_REMAINING_THRESHOLD {
        warnings.push(format!(
            "Only {} Schengen days remaining in the current 180-day window",
            status.remaining_days
        ));
    }

    if status.remaining_days == 0 && status.is_compliant {
        warnings.push(format!(
            "You have reached the 90-day limit; used days start dropping out on {}",
            status.next_reset_date
        ));
    }

    warnings
}
