use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use shared_models::Location;

// ==============================================================================
// PROVIDER RECORDS
// ==============================================================================

/// A care provider as served to the directory screens. Records are seeded
/// once at startup and never mutated by any cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub experience_years: u32,
    pub rating: f32,
    pub review_count: u32,
    pub location: Location,
    pub hospital: String,
    pub consultation_fee: u32,
    pub languages: Vec<String>,
    pub accepts_ayushman: bool,
    pub available_slots: Vec<String>,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub specialties: Vec<String>,
    pub has_emergency: bool,
    pub beds: u32,
    pub phone: String,
}

// ==============================================================================
// SEARCH CRITERIA
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Rating,
    Experience,
    Fee,
}

impl SortBy {
    pub fn from_key(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "rating" => Some(SortBy::Rating),
            "experience" => Some(SortBy::Experience),
            "fee" => Some(SortBy::Fee),
            _ => None,
        }
    }
}

/// The caller-owned filter state. Every field is optional; an absent field
/// disables that predicate entirely, so the zero value matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub location: Option<Location>,
    pub specialization: Option<String>,
    pub min_rating: Option<f32>,
    pub min_experience: Option<u32>,
    pub fee_min: Option<u32>,
    pub fee_max: Option<u32>,
    pub languages: Option<Vec<String>>,
    pub ayushman_only: Option<bool>,
    pub sort_by: Option<SortBy>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("{field} must be a non-negative number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be true or false, got {value:?}")]
    InvalidFlag { field: &'static str, value: String },

    #[error("unknown sort key {0:?}, expected rating, experience or fee")]
    UnknownSortKey(String),

    #[error("location filter needs both city and state")]
    IncompleteLocation,
}

impl SearchFilters {
    /// Build filters from raw query-string parameters. Blank values count as
    /// absent, mirroring an empty form field. Anything unparseable is an
    /// error for the boundary to report; the engine itself never sees it.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, CriteriaError> {
        let city = non_blank(params, "city");
        let state = non_blank(params, "state");
        let location = match (city, state) {
            (Some(city), Some(state)) => Some(Location { city, state }),
            (None, None) => None,
            _ => return Err(CriteriaError::IncompleteLocation),
        };

        let min_rating = match non_blank(params, "min_rating") {
            Some(raw) => {
                let value: f32 = raw.parse().map_err(|_| CriteriaError::InvalidNumber {
                    field: "min_rating",
                    value: raw.clone(),
                })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(CriteriaError::InvalidNumber {
                        field: "min_rating",
                        value: raw,
                    });
                }
                Some(value)
            }
            None => None,
        };

        let sort_by = match non_blank(params, "sort_by") {
            Some(raw) => {
                Some(SortBy::from_key(&raw).ok_or(CriteriaError::UnknownSortKey(raw))?)
            }
            None => None,
        };

        let languages = non_blank(params, "languages").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect::<Vec<String>>()
        });

        Ok(Self {
            query: non_blank(params, "q"),
            location,
            specialization: non_blank(params, "specialization"),
            min_rating,
            min_experience: parse_number(params, "min_experience")?,
            fee_min: parse_number(params, "fee_min")?,
            fee_max: parse_number(params, "fee_max")?,
            languages: languages.filter(|l| !l.is_empty()),
            ayushman_only: parse_flag(params, "ayushman_only")?,
            sort_by,
        })
    }
}

fn non_blank(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn parse_number(
    params: &HashMap<String, String>,
    field: &'static str,
) -> Result<Option<u32>, CriteriaError> {
    match non_blank(params, field) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| CriteriaError::InvalidNumber { field, value: raw }),
        None => Ok(None),
    }
}

fn parse_flag(
    params: &HashMap<String, String>,
    field: &'static str,
) -> Result<Option<bool>, CriteriaError> {
    match non_blank(params, field) {
        Some(raw) => match raw.to_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(CriteriaError::InvalidFlag { field, value: raw }),
        },
        None => Ok(None),
    }
}

// Error types specific to directory lookups
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("doctor {0} not found")]
    DoctorNotFound(String),

    #[error("hospital {0} not found")]
    HospitalNotFound(String),
}
