//! Doctor search/filter engine.
//!
//! A pure function of (collection, filters) -> result: no I/O, no shared
//! state, no mutation of inputs. The UI layer owns the filter state and
//! re-invokes the engine on every change, so the same inputs must always
//! produce the same output, down to tie ordering.

use serde::Serialize;

use crate::models::{Doctor, SearchFilters, SortBy};

/// Outcome of a filter pass. `error` is only populated by the criteria
/// boundary (see `DoctorSearchService`); the engine itself is total and
/// cannot fail.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResult {
    pub doctors: Vec<Doctor>,
    pub error: Option<String>,
}

impl FilterResult {
    pub fn matched(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors,
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            doctors: Vec::new(),
            error: Some(reason.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Apply every active predicate (AND-combined), then the requested ordering.
/// Records keep their collection order unless a sort key is given; sorting is
/// stable, so equal-key records also keep their collection order.
pub fn filter(doctors: &[Doctor], filters: &SearchFilters) -> FilterResult {
    let mut matched: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| matches(filters, doctor))
        .cloned()
        .collect();

    if let Some(key) = filters.sort_by {
        sort(&mut matched, key);
    }

    FilterResult::matched(matched)
}

fn matches(filters: &SearchFilters, doctor: &Doctor) -> bool {
    matches_query(filters, doctor)
        && matches_location(filters, doctor)
        && matches_specialization(filters, doctor)
        && matches_rating(filters, doctor)
        && matches_experience(filters, doctor)
        && matches_fee(filters, doctor)
        && matches_languages(filters, doctor)
        && matches_ayushman(filters, doctor)
}

fn matches_query(filters: &SearchFilters, doctor: &Doctor) -> bool {
    match &filters.query {
        None => true,
        Some(term) => {
            let term = term.to_lowercase();
            doctor.name.to_lowercase().contains(&term)
                || doctor.specialization.to_lowercase().contains(&term)
        }
    }
}

fn matches_location(filters: &SearchFilters, doctor: &Doctor) -> bool {
    match &filters.location {
        None => true,
        Some(wanted) => doctor.location.city == wanted.city && doctor.location.state == wanted.state,
    }
}

fn matches_specialization(filters: &SearchFilters, doctor: &Doctor) -> bool {
    match &filters.specialization {
        None => true,
        Some(wanted) => doctor.specialization.eq_ignore_ascii_case(wanted),
    }
}

fn matches_rating(filters: &SearchFilters, doctor: &Doctor) -> bool {
    filters
        .min_rating
        .map_or(true, |min| doctor.rating >= min)
}

fn matches_experience(filters: &SearchFilters, doctor: &Doctor) -> bool {
    filters
        .min_experience
        .map_or(true, |min| doctor.experience_years >= min)
}

// An inverted range (min > max) matches nothing rather than erroring.
fn matches_fee(filters: &SearchFilters, doctor: &Doctor) -> bool {
    let above_min = filters
        .fee_min
        .map_or(true, |min| doctor.consultation_fee >= min);
    let below_max = filters
        .fee_max
        .map_or(true, |max| doctor.consultation_fee <= max);
    above_min && below_max
}

// Match-any: a single shared language is enough.
fn matches_languages(filters: &SearchFilters, doctor: &Doctor) -> bool {
    match &filters.languages {
        None => true,
        Some(wanted) => wanted.iter().any(|lang| {
            doctor
                .languages
                .iter()
                .any(|spoken| spoken.eq_ignore_ascii_case(lang))
        }),
    }
}

fn matches_ayushman(filters: &SearchFilters, doctor: &Doctor) -> bool {
    !filters.ayushman_only.unwrap_or(false) || doctor.accepts_ayushman
}

fn sort(doctors: &mut [Doctor], key: SortBy) {
    // Vec::sort_by is stable; total_cmp keeps the rating comparison total.
    match key {
        SortBy::Rating => doctors.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Experience => doctors.sort_by(|a, b| b.experience_years.cmp(&a.experience_years)),
        SortBy::Fee => doctors.sort_by(|a, b| a.consultation_fee.cmp(&b.consultation_fee)),
    }
}
