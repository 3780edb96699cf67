use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Raw visit record as submitted by the application, before type conversion
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VisitRecord {
    /// Country visited
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    /// Entry date in ISO `YYYY-MM-DD` form
    pub entry_date: String,

    /// Exit date in ISO `YYYY-MM-DD` form; omitted for ongoing stays
    pub exit_date: Option<String>,

    /// Visa type the stay was made under
    pub visa_type: Option<String>,

    /// Maximum days allowed for this visa
    #[validate(range(min = 1, max = 365, message = "Visa day allowance must be 1-365"))]
    pub max_days: Option<u32>,

    /// Free-form traveler notes
    pub notes: Option<String>,
}

/// Raw planned-trip request, before type conversion
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlanTripRequest {
    /// Destination country for the planned trip
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    /// Planned entry date in ISO `YYYY-MM-DD` form
    pub entry_date: String,

    /// Planned exit date in ISO `YYYY-MM-DD` form
    pub exit_date: String,
}

/// A planned trip after validation, ready for the compliance engine
#[derive(Debug, Clone)]
pub struct TripPlan {
    /// Destination country
    pub country: String,
    /// Planned entry date
    pub entry_date: NaiveDate,
    /// Planned exit date
    pub exit_date: NaiveDate,
}

/// Custom error type for visit validation
#[derive(thiserror::Error, Debug)]
pub enum ValidationFailure {
    /// Date string not in ISO `YYYY-MM-DD` form
    #[error("Invalid {field} value: {value}")]
    InvalidDate {
        /// Which date field failed to parse
        field: &'static str,
        /// The rejected raw value
        value: String,
    },

    /// Entry date after exit date
    #[error("Invalid date range: entry date {entry} is after exit date {exit}")]
    EntryAfterExit {
        /// The submitted entry date
        entry: NaiveDate,
        /// The submitted exit date
        exit: NaiveDate,
    },

    /// Country not in the recognized-country list
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    /// Structural validation failure on the raw request
    #[error("Validation error: {0}")]
    Request(#[from] validator::ValidationErrors),
}
