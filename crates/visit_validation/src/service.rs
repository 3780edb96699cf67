use std::collections::HashSet;

use chrono::NaiveDate;
use schengen_core::CountryVisit;
use validator::Validate;

use crate::types::{PlanTripRequest, TripPlan, ValidationFailure, VisitRecord};

/// Converts raw traveler-submitted records into typed engine inputs
pub struct VisitValidator {
    known_countries: Option<HashSet<String>>,
}

impl VisitValidator {
    /// Creates a validator that checks structure and dates only
    pub fn new() -> Self {
        Self {
            known_countries: None,
        }
    }

    /// Creates a validator that additionally rejects countries missing
    /// from the application's recognized-country list
    pub fn with_known_countries<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_countries: Some(countries.into_iter().map(Into::into).collect()),
        }
    }

    /// Validates a raw record and converts it into a typed `CountryVisit`.
    ///
    /// A zero-length stay (`entry_date == exit_date`) is valid and counts
    /// as one day in the engine.
    pub fn validate_visit(&self, record: &VisitRecord) -> Result<CountryVisit, ValidationFailure> {
        record.validate()?;

        let entry_date = parse_iso_date("entry_date", &record.entry_date)?;
        let exit_date = match &record.exit_date {
            Some(raw) => Some(parse_iso_date("exit_date", raw)?),
            None => None,
        };

        if let Some(exit) = exit_date {
            if entry_date > exit {
                return Err(ValidationFailure::EntryAfterExit {
                    entry: entry_date,
                    exit,
                });
            }
        }

        self.check_country(&record.country)?;

        Ok(CountryVisit {
            country: record.country.clone(),
            entry_date,
            exit_date,
            visa_type: record.visa_type.clone(),
            max_days: record.max_days,
            notes: record.notes.clone(),
        })
    }

    /// Validates a batch of raw records; the first failure aborts the batch
    pub fn validate_visits(
        &self,
        records: &[VisitRecord],
    ) -> Result<Vec<CountryVisit>, ValidationFailure> {
        records
            .iter()
            .map(|record| self.validate_visit(record))
            .collect()
    }

    /// Validates a raw planned-trip request into a typed `TripPlan`
    pub fn validate_trip_plan(
        &self,
        request: &PlanTripRequest,
    ) -> Result<TripPlan, ValidationFailure> {
        request.validate()?;

        let entry_date = parse_iso_date("entry_date", &request.entry_date)?;
        let exit_date = parse_iso_date("exit_date", &request.exit_date)?;

        if entry_date > exit_date {
            return Err(ValidationFailure::EntryAfterExit {
                entry: entry_date,
                exit: exit_date,
            });
        }

        self.check_country(&request.country)?;

        log::debug!(
            "validated trip plan: {} from {} to {}",
            request.country,
            entry_date,
            exit_date
        );

        Ok(TripPlan {
            country: request.country.clone(),
            entry_date,
            exit_date,
        })
    }

    fn check_country(&self, country: &str) -> Result<(), ValidationFailure> {
        if let Some(known) = &self.known_countries {
            if !known.contains(country) {
                return Err(ValidationFailure::UnknownCountry(country.to_string()));
            }
        }
        Ok(())
    }
}

fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationFailure> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationFailure::InvalidDate {
        field,
        value: value.to_string(),
    })
}
