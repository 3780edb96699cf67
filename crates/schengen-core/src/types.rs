use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded stay in a country, as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryVisit {
    /// Country visited, matched case-sensitively against the membership list
    pub country: String,

    /// First day of the stay
    pub entry_date: NaiveDate,

    /// Last day of the stay; `None` means the stay is ongoing
    pub exit_date: Option<NaiveDate>,

    /// Visa type the stay was made under, if recorded
    pub visa_type: Option<String>,

    /// Maximum days allowed for this visa, if recorded
    pub max_days: Option<u32>,

    /// Free-form notes attached by the traveler
    pub notes: Option<String>,
}

/// A visit after normalization, with Schengen membership resolved
#[derive(Debug, Clone)]
pub struct ProcessedVisit {
    /// Country visited
    pub country: String,
    /// First day of the stay
    pub entry_date: NaiveDate,
    /// Last day of the stay; `None` until resolved against a reference date
    pub exit_date: Option<NaiveDate>,
    /// Whether the country is a Schengen member
    pub is_schengen: bool,
}

/// Compliance snapshot for a traveler as of a reference date
#[derive(Debug, Clone, Serialize)]
pub struct SchengenStatus {
    /// Schengen days used inside the 180-day window ending at the reference date
    pub used_days: u32,
    /// Days still available under the 90-day limit
    pub remaining_days: u32,
    /// When the used-day count starts decreasing if no new visits occur
    pub next_reset_date: NaiveDate,
    /// Whether the traveler is within the 90-day limit
    pub is_compliant: bool,
    /// Rule violations found by this calculation; at most one
    pub violations: Vec<SchengenViolation>,
}

/// A single out-of-compliance finding for one calculation
#[derive(Debug, Clone, Serialize)]
pub struct SchengenViolation {
    /// Reference date the violation was computed for
    pub date: NaiveDate,
    /// How many days over the 90-day limit the traveler is
    pub days_over_limit: u32,
    /// Human-readable summary of the violation
    pub description: String,
}

/// Result of checking a hypothetical future trip against the rule
#[derive(Debug, Clone, Serialize)]
pub struct FutureTripValidation {
    /// Whether the trip can be taken as planned
    pub can_travel: bool,
    /// Problems found with the planned trip
    pub warnings: Vec<String>,
    /// Advice for adjusting or confirming the plan
    pub suggestions: Vec<String>,
    /// Maximum days the traveler can stay for this trip without breaking the rule
    pub max_stay_days: u32,
    /// Whether the trip as planned would break the 90/180 rule
    pub violates_rule: bool,
    /// Schengen days used as of the planned exit, trip included
    pub days_used_after_trip: u32,
    /// Days still available as of the planned exit, trip included
    pub remaining_days_after_trip: u32,
}

/// A travel window found by the safe-date search
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SafeTravelDates {
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window
    pub end: NaiveDate,
}
