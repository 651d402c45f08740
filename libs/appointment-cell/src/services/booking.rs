// libs/appointment-cell/src/services/booking.rs
// Owns the in-memory appointment store. All transitions go through here so
// the (doctor, date, slot) uniqueness invariant holds for confirmed
// appointments.

use chrono::{NaiveDate, NaiveTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use directory_cell::{CareRegistry, Doctor};

use crate::filter::filter_appointments;
use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentStatus, BookAppointmentRequest,
    RescheduleAppointmentRequest,
};

pub struct BookingService {
    registry: Arc<CareRegistry>,
    store: Arc<RwLock<HashMap<Uuid, Appointment>>>,
}

impl BookingService {
    pub fn new(registry: Arc<CareRegistry>) -> Self {
        Self {
            registry,
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[instrument(skip(self, request), fields(doctor_id = %request.doctor_id))]
    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let doctor = self.doctor(&request.doctor_id)?;
        let slot_time = self.validate_slot(&doctor, &request.slot)?;
        validate_date(request.date)?;

        // Conflict check and insert under one write lock so two concurrent
        // requests cannot both claim the slot.
        let mut store = self.store.write().await;
        if store.values().any(|a| {
            a.doctor_id == request.doctor_id
                && a.date == request.date
                && a.slot == request.slot
                && a.status == AppointmentStatus::Confirmed
        }) {
            return Err(AppointmentError::SlotTaken {
                doctor_id: request.doctor_id,
                date: request.date,
                slot: request.slot,
            });
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            hospital: doctor.hospital.clone(),
            consultation_fee: doctor.consultation_fee,
            date: request.date,
            slot: request.slot,
            slot_time,
            mode: request.mode,
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        store.insert(appointment.id, appointment.clone());
        info!(appointment_id = %appointment.id, "appointment booked");
        Ok(appointment)
    }

    pub async fn get(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        self.store
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppointmentError::NotFound(id))
    }

    /// Filtered list in visit order: date, then slot time, then booking order.
    pub async fn list(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        let store = self.store.read().await;
        let all: Vec<Appointment> = store.values().cloned().collect();
        drop(store);

        let mut matched = filter_appointments(&all, filter);
        matched.sort_by(|a, b| {
            (a.date, a.slot_time, a.created_at).cmp(&(b.date, b.slot_time, b.created_at))
        });
        matched
    }

    #[instrument(skip(self))]
    pub async fn cancel(
        &self,
        id: Uuid,
        reason: Option<String>,
    ) -> Result<Appointment, AppointmentError> {
        let mut store = self.store.write().await;
        let appointment = store.get_mut(&id).ok_or(AppointmentError::NotFound(id))?;
        if appointment.status != AppointmentStatus::Confirmed {
            return Err(AppointmentError::InvalidTransition {
                status: appointment.status,
                action: "cancel",
            });
        }
        appointment.status = AppointmentStatus::Cancelled;
        if reason.is_some() {
            appointment.notes = reason;
        }
        appointment.updated_at = Utc::now();
        info!(appointment_id = %id, "appointment cancelled");
        Ok(appointment.clone())
    }

    #[instrument(skip(self, request))]
    pub async fn reschedule(
        &self,
        id: Uuid,
        request: RescheduleAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let mut store = self.store.write().await;
        let current = store.get(&id).cloned().ok_or(AppointmentError::NotFound(id))?;
        if current.status != AppointmentStatus::Confirmed {
            return Err(AppointmentError::InvalidTransition {
                status: current.status,
                action: "reschedule",
            });
        }

        let doctor = self.doctor(&current.doctor_id)?;
        let slot_time = self.validate_slot(&doctor, &request.slot)?;
        validate_date(request.date)?;

        if store.values().any(|a| {
            a.id != id
                && a.doctor_id == current.doctor_id
                && a.date == request.date
                && a.slot == request.slot
                && a.status == AppointmentStatus::Confirmed
        }) {
            return Err(AppointmentError::SlotTaken {
                doctor_id: current.doctor_id,
                date: request.date,
                slot: request.slot,
            });
        }

        let appointment = store.get_mut(&id).ok_or(AppointmentError::NotFound(id))?;
        appointment.date = request.date;
        appointment.slot = request.slot;
        appointment.slot_time = slot_time;
        appointment.updated_at = Utc::now();
        info!(appointment_id = %id, "appointment rescheduled");
        Ok(appointment.clone())
    }

    #[instrument(skip(self))]
    pub async fn complete(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        let mut store = self.store.write().await;
        let appointment = store.get_mut(&id).ok_or(AppointmentError::NotFound(id))?;
        if appointment.status != AppointmentStatus::Confirmed {
            return Err(AppointmentError::InvalidTransition {
                status: appointment.status,
                action: "complete",
            });
        }
        appointment.status = AppointmentStatus::Completed;
        appointment.updated_at = Utc::now();
        Ok(appointment.clone())
    }

    fn doctor(&self, doctor_id: &str) -> Result<Doctor, AppointmentError> {
        self.registry
            .doctor(doctor_id)
            .cloned()
            .ok_or_else(|| AppointmentError::DoctorNotFound(doctor_id.to_string()))
    }

    fn validate_slot(&self, doctor: &Doctor, slot: &str) -> Result<NaiveTime, AppointmentError> {
        if !doctor.available_slots.iter().any(|s| s == slot) {
            return Err(AppointmentError::SlotNotOffered {
                doctor_id: doctor.id.clone(),
                slot: slot.to_string(),
            });
        }
        parse_slot_time(slot)
    }
}

fn validate_date(date: NaiveDate) -> Result<(), AppointmentError> {
    if date < Utc::now().date_naive() {
        return Err(AppointmentError::PastDate(date));
    }
    Ok(())
}

// Slots are offered as "09:00 AM"; accept 24h form as well.
fn parse_slot_time(slot: &str) -> Result<NaiveTime, AppointmentError> {
    NaiveTime::parse_from_str(slot, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(slot, "%H:%M"))
        .map_err(|_| AppointmentError::UnparseableSlot(slot.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_twelve_hour_slots() {
        assert_eq!(
            parse_slot_time("09:00 AM").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            parse_slot_time("04:30 PM").unwrap(),
            NaiveTime::from_hms_opt(16, 30, 0).unwrap()
        );
    }

    #[test]
    fn parses_twenty_four_hour_slots() {
        assert_eq!(
            parse_slot_time("16:30").unwrap(),
            NaiveTime::from_hms_opt(16, 30, 0).unwrap()
        );
    }

    #[test]
    fn rejects_garbage_slots() {
        assert!(matches!(
            parse_slot_time("morning"),
            Err(AppointmentError::UnparseableSlot(_))
        ));
    }
}
