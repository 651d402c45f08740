//! In-memory provider registry.
//!
//! The registry is loaded once at startup and treated as read-only
//! afterwards, so handlers can share it behind a plain `Arc`.

use anyhow::{bail, ensure, Result};
use std::collections::HashSet;

use shared_models::Location;

use crate::models::{Doctor, Hospital};
use crate::seed;

pub struct CareRegistry {
    doctors: Vec<Doctor>,
    hospitals: Vec<Hospital>,
}

impl CareRegistry {
    /// Build a registry from raw records, rejecting data that would make
    /// downstream behavior undefined (duplicate ids, out-of-range ratings,
    /// doctors listing no languages).
    pub fn from_records(doctors: Vec<Doctor>, hospitals: Vec<Hospital>) -> Result<Self> {
        let mut seen_doctor_ids = HashSet::new();
        for doctor in &doctors {
            ensure!(!doctor.id.trim().is_empty(), "doctor with empty id");
            ensure!(
                seen_doctor_ids.insert(doctor.id.clone()),
                "duplicate doctor id {}",
                doctor.id
            );
            ensure!(
                !doctor.name.trim().is_empty(),
                "doctor {} has empty name",
                doctor.id
            );
            if !(0.0..=5.0).contains(&doctor.rating) {
                bail!("doctor {} rating {} outside 0..=5", doctor.id, doctor.rating);
            }
            ensure!(
                !doctor.languages.is_empty(),
                "doctor {} has no languages",
                doctor.id
            );
        }

        let mut seen_hospital_ids = HashSet::new();
        for hospital in &hospitals {
            ensure!(!hospital.id.trim().is_empty(), "hospital with empty id");
            ensure!(
                seen_hospital_ids.insert(hospital.id.clone()),
                "duplicate hospital id {}",
                hospital.id
            );
        }

        Ok(Self { doctors, hospitals })
    }

    /// Registry pre-loaded with the bundled provider directory.
    pub fn seeded() -> Result<Self> {
        Self::from_records(seed::doctors(), seed::hospitals())
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn hospital(&self, id: &str) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.id == id)
    }

    /// Distinct specializations, alphabetical, for filter dropdowns.
    pub fn specializations(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out: Vec<String> = self
            .doctors
            .iter()
            .filter(|d| seen.insert(d.specialization.to_lowercase()))
            .map(|d| d.specialization.clone())
            .collect();
        out.sort();
        out
    }

    /// Distinct practice locations, ordered by city then state.
    pub fn locations(&self) -> Vec<Location> {
        let mut seen = HashSet::new();
        let mut out: Vec<Location> = self
            .doctors
            .iter()
            .map(|d| d.location.clone())
            .filter(|l| seen.insert(l.clone()))
            .collect();
        out.sort_by(|a, b| a.city.cmp(&b.city).then_with(|| a.state.cmp(&b.state)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: &str, rating: f32) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            specialization: "General Medicine".to_string(),
            experience_years: 5,
            rating,
            review_count: 10,
            location: Location::new("Delhi", "Delhi"),
            hospital: "City Hospital".to_string(),
            consultation_fee: 500,
            languages: vec!["Hindi".to_string()],
            accepts_ayushman: false,
            available_slots: vec![],
            bio: String::new(),
        }
    }

    #[test]
    fn rejects_duplicate_doctor_ids() {
        let result = CareRegistry::from_records(vec![doctor("d1", 4.0), doctor("d1", 3.0)], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let result = CareRegistry::from_records(vec![doctor("d1", 5.3)], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_doctor_without_languages() {
        let mut d = doctor("d1", 4.0);
        d.languages.clear();
        let result = CareRegistry::from_records(vec![d], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn seeded_registry_is_well_formed() {
        let registry = CareRegistry::seeded().unwrap();
        assert!(!registry.doctors().is_empty());
        assert!(!registry.hospitals().is_empty());
        assert!(registry.hospitals().iter().any(|h| h.has_emergency));
    }

    #[test]
    fn facet_lists_are_deduplicated() {
        let mut a = doctor("d1", 4.0);
        a.specialization = "Cardiology".to_string();
        let mut b = doctor("d2", 4.0);
        b.specialization = "cardiology".to_string();
        let registry = CareRegistry::from_records(vec![a, b], vec![]).unwrap();
        assert_eq!(registry.specializations(), vec!["Cardiology"]);
        assert_eq!(registry.locations().len(), 1);
    }
}
