//! # Visit Validation
//!
//! This crate provides the validation boundary for traveler-submitted visit
//! records. It checks raw input for malformed dates, inverted date ranges,
//! and unrecognized countries, then hands typed values to the compliance
//! engine. The engine itself never validates; everything reaching it is
//! assumed well-formed.

/// Service for validating and converting raw visit records.
pub mod service;
/// Types and structures used in visit validation.
pub mod types;

pub use service::VisitValidator;
pub use types::{PlanTripRequest, TripPlan, ValidationFailure, VisitRecord};
