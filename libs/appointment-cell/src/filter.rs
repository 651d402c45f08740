//! Pure appointment list filtering, same shape as the doctor engine:
//! AND-combined optional predicates over an immutable slice.

use crate::models::{Appointment, AppointmentFilter};

pub fn filter_appointments(
    appointments: &[Appointment],
    filter: &AppointmentFilter,
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| matches(filter, appointment))
        .cloned()
        .collect()
}

fn matches(filter: &AppointmentFilter, appointment: &Appointment) -> bool {
    let patient_ok = filter
        .patient_id
        .as_deref()
        .map_or(true, |id| appointment.patient_id == id);
    let status_ok = filter
        .status
        .map_or(true, |status| appointment.status == status);
    let query_ok = filter.q.as_deref().map_or(true, |term| {
        let term = term.to_lowercase();
        appointment.doctor_name.to_lowercase().contains(&term)
            || appointment.specialization.to_lowercase().contains(&term)
            || appointment.hospital.to_lowercase().contains(&term)
    });
    // Inclusive bounds; an inverted range matches nothing.
    let from_ok = filter.from.map_or(true, |from| appointment.date >= from);
    let to_ok = filter.to.map_or(true, |to| appointment.date <= to);

    patient_ok && status_ok && query_ok && from_ok && to_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentStatus, ConsultationMode};
    use chrono::{NaiveDate, NaiveTime, Utc};
    use uuid::Uuid;

    fn appointment(patient: &str, doctor: &str, date: NaiveDate) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            patient_id: patient.to_string(),
            doctor_id: "doc-001".to_string(),
            doctor_name: doctor.to_string(),
            specialization: "Cardiology".to_string(),
            hospital: "Marina Heart Institute".to_string(),
            consultation_fee: 1000,
            date,
            slot: "09:00 AM".to_string(),
            slot_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            mode: ConsultationMode::InPerson,
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let list = vec![
            appointment("p1", "Dr. A", date(2030, 1, 10)),
            appointment("p2", "Dr. B", date(2030, 1, 11)),
        ];
        assert_eq!(filter_appointments(&list, &AppointmentFilter::default()), list);
    }

    #[test]
    fn patient_filter_is_exact() {
        let list = vec![
            appointment("p1", "Dr. A", date(2030, 1, 10)),
            appointment("p2", "Dr. B", date(2030, 1, 11)),
        ];
        let filter = AppointmentFilter {
            patient_id: Some("p1".to_string()),
            ..Default::default()
        };
        let kept = filter_appointments(&list, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].patient_id, "p1");
    }

    #[test]
    fn text_filter_covers_doctor_specialization_and_hospital() {
        let mut a = appointment("p1", "Dr. Ananya Iyer", date(2030, 1, 10));
        a.hospital = "Marina Heart Institute".to_string();
        let mut b = appointment("p1", "Dr. Rajan Mehta", date(2030, 1, 11));
        b.specialization = "Neurology".to_string();
        b.hospital = "Westline Multispecialty Hospital".to_string();
        let list = vec![a, b];

        let filter = AppointmentFilter {
            q: Some("marina".to_string()),
            ..Default::default()
        };
        let kept = filter_appointments(&list, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].doctor_name, "Dr. Ananya Iyer");

        let filter = AppointmentFilter {
            q: Some("NEURO".to_string()),
            ..Default::default()
        };
        let kept = filter_appointments(&list, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].doctor_name, "Dr. Rajan Mehta");
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let list = vec![
            appointment("p1", "Dr. A", date(2030, 1, 10)),
            appointment("p1", "Dr. B", date(2030, 1, 15)),
            appointment("p1", "Dr. C", date(2030, 1, 20)),
        ];
        let filter = AppointmentFilter {
            from: Some(date(2030, 1, 10)),
            to: Some(date(2030, 1, 15)),
            ..Default::default()
        };
        assert_eq!(filter_appointments(&list, &filter).len(), 2);
    }

    #[test]
    fn inverted_date_range_matches_nothing() {
        let list = vec![appointment("p1", "Dr. A", date(2030, 1, 10))];
        let filter = AppointmentFilter {
            from: Some(date(2030, 2, 1)),
            to: Some(date(2030, 1, 1)),
            ..Default::default()
        };
        assert!(filter_appointments(&list, &filter).is_empty());
    }
}
