//! Bundled provider directory.
//!
//! Stand-in data for environments without a live provider feed. All
//! records are fictional; ids are stable so bookings can reference them.

use shared_models::Location;

use crate::models::{Doctor, Hospital};

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    name: &str,
    specialization: &str,
    experience_years: u32,
    rating: f32,
    review_count: u32,
    city: &str,
    state: &str,
    hospital: &str,
    consultation_fee: u32,
    languages: &[&str],
    accepts_ayushman: bool,
    available_slots: &[&str],
    bio: &str,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        experience_years,
        rating,
        review_count,
        location: Location::new(city, state),
        hospital: hospital.to_string(),
        consultation_fee,
        languages: languages.iter().map(|l| l.to_string()).collect(),
        accepts_ayushman,
        available_slots: available_slots.iter().map(|s| s.to_string()).collect(),
        bio: bio.to_string(),
    }
}

fn hospital(
    id: &str,
    name: &str,
    city: &str,
    state: &str,
    specialties: &[&str],
    has_emergency: bool,
    beds: u32,
    phone: &str,
) -> Hospital {
    Hospital {
        id: id.to_string(),
        name: name.to_string(),
        location: Location::new(city, state),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        has_emergency,
        beds,
        phone: phone.to_string(),
    }
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "doc-001",
            "Dr. Ananya Iyer",
            "Cardiology",
            18,
            4.8,
            412,
            "Chennai",
            "Tamil Nadu",
            "Marina Heart Institute",
            1000,
            &["English", "Tamil"],
            true,
            &["09:00 AM", "09:30 AM", "11:00 AM", "04:00 PM"],
            "Interventional cardiologist focused on preventive cardiac care.",
        ),
        doctor(
            "doc-002",
            "Dr. Rajan Mehta",
            "Cardiology",
            25,
            4.6,
            890,
            "Mumbai",
            "Maharashtra",
            "Westline Multispecialty Hospital",
            1500,
            &["English", "Hindi", "Gujarati"],
            false,
            &["10:00 AM", "10:30 AM", "05:00 PM"],
            "Senior cardiologist with an angioplasty practice of two decades.",
        ),
        doctor(
            "doc-003",
            "Dr. Kavitha Rao",
            "Pediatrics",
            12,
            4.9,
            655,
            "Bengaluru",
            "Karnataka",
            "Little Sparrow Children's Hospital",
            600,
            &["English", "Kannada", "Telugu"],
            true,
            &["09:00 AM", "12:00 PM", "03:00 PM", "06:00 PM"],
            "Pediatrician known for newborn and vaccination counselling.",
        ),
        doctor(
            "doc-004",
            "Dr. Arvind Sharma",
            "General Medicine",
            9,
            4.2,
            233,
            "Delhi",
            "Delhi",
            "Yamuna Care Clinic",
            400,
            &["Hindi", "English"],
            true,
            &["08:00 AM", "08:30 AM", "09:00 AM", "07:00 PM"],
            "Family physician managing diabetes and hypertension clinics.",
        ),
        doctor(
            "doc-005",
            "Dr. Meenakshi Pillai",
            "Dermatology",
            14,
            4.7,
            501,
            "Kochi",
            "Kerala",
            "Backwater Skin and Laser Centre",
            800,
            &["Malayalam", "English", "Tamil"],
            false,
            &["10:00 AM", "11:00 AM", "02:00 PM"],
            "Dermatologist specialising in pigmentation and laser procedures.",
        ),
        doctor(
            "doc-006",
            "Dr. Farhan Qureshi",
            "Orthopedics",
            20,
            4.5,
            768,
            "Hyderabad",
            "Telangana",
            "Deccan Bone and Joint Hospital",
            900,
            &["Urdu", "Hindi", "English", "Telugu"],
            true,
            &["09:30 AM", "01:00 PM", "05:30 PM"],
            "Joint replacement surgeon with a sports injury clinic.",
        ),
        doctor(
            "doc-007",
            "Dr. Sunita Deshmukh",
            "Gynecology",
            16,
            4.4,
            389,
            "Pune",
            "Maharashtra",
            "Mother and Child Care Centre",
            700,
            &["Marathi", "Hindi", "English"],
            true,
            &["10:00 AM", "10:30 AM", "04:30 PM"],
            "Obstetrician handling high-risk pregnancies and laparoscopy.",
        ),
        doctor(
            "doc-008",
            "Dr. Debashish Sen",
            "Neurology",
            22,
            4.6,
            540,
            "Kolkata",
            "West Bengal",
            "Hooghly Neuro Institute",
            1200,
            &["Bengali", "English", "Hindi"],
            false,
            &["11:00 AM", "03:30 PM"],
            "Neurologist with a stroke and epilepsy practice.",
        ),
        doctor(
            "doc-009",
            "Dr. Harpreet Kaur",
            "General Medicine",
            6,
            3.9,
            121,
            "Ludhiana",
            "Punjab",
            "Satluj Health Centre",
            300,
            &["Punjabi", "Hindi"],
            true,
            &["08:00 AM", "09:00 AM", "06:00 PM", "06:30 PM"],
            "General physician running an evening walk-in clinic.",
        ),
        doctor(
            "doc-010",
            "Dr. Vikram Nair",
            "ENT",
            11,
            4.3,
            287,
            "Chennai",
            "Tamil Nadu",
            "Marina Heart Institute",
            650,
            &["Tamil", "Malayalam", "English"],
            false,
            &["09:00 AM", "12:30 PM", "05:00 PM"],
            "ENT surgeon focused on endoscopic sinus procedures.",
        ),
        doctor(
            "doc-011",
            "Dr. Pooja Agarwal",
            "Pediatrics",
            8,
            4.1,
            198,
            "Jaipur",
            "Rajasthan",
            "Aravalli Children's Clinic",
            450,
            &["Hindi", "English"],
            true,
            &["10:00 AM", "11:30 AM", "04:00 PM"],
            "Pediatrician with a focus on childhood asthma and allergies.",
        ),
        doctor(
            "doc-012",
            "Dr. Ibrahim Shaikh",
            "Cardiology",
            15,
            4.7,
            463,
            "Delhi",
            "Delhi",
            "Capital Heart Centre",
            1100,
            &["Hindi", "English", "Urdu"],
            true,
            &["09:00 AM", "02:00 PM", "06:00 PM"],
            "Cardiologist running an arrhythmia and pacemaker clinic.",
        ),
    ]
}

pub fn hospitals() -> Vec<Hospital> {
    vec![
        hospital(
            "hosp-001",
            "Marina Heart Institute",
            "Chennai",
            "Tamil Nadu",
            &["Cardiology", "ENT", "General Medicine"],
            true,
            320,
            "04428563412",
        ),
        hospital(
            "hosp-002",
            "Westline Multispecialty Hospital",
            "Mumbai",
            "Maharashtra",
            &["Cardiology", "Neurology", "Orthopedics", "Oncology"],
            true,
            540,
            "02226451800",
        ),
        hospital(
            "hosp-003",
            "Little Sparrow Children's Hospital",
            "Bengaluru",
            "Karnataka",
            &["Pediatrics", "Neonatology"],
            true,
            180,
            "08041225577",
        ),
        hospital(
            "hosp-004",
            "Yamuna Care Clinic",
            "Delhi",
            "Delhi",
            &["General Medicine", "Dermatology"],
            false,
            40,
            "01123379090",
        ),
        hospital(
            "hosp-005",
            "Deccan Bone and Joint Hospital",
            "Hyderabad",
            "Telangana",
            &["Orthopedics", "Rheumatology"],
            true,
            210,
            "04027806655",
        ),
        hospital(
            "hosp-006",
            "Mother and Child Care Centre",
            "Pune",
            "Maharashtra",
            &["Gynecology", "Pediatrics"],
            false,
            95,
            "02025531144",
        ),
        hospital(
            "hosp-007",
            "Hooghly Neuro Institute",
            "Kolkata",
            "West Bengal",
            &["Neurology", "Neurosurgery", "Psychiatry"],
            true,
            260,
            "03322879933",
        ),
        hospital(
            "hosp-008",
            "Capital Heart Centre",
            "Delhi",
            "Delhi",
            &["Cardiology", "Cardiothoracic Surgery"],
            true,
            150,
            "01126118822",
        ),
    ]
}
