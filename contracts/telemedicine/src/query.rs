use soroban_sdk::{Address, Env, Vec};

use crate::storage::{
    consultation_count, load_consultation, load_doctor, load_doctor_active_consultation_ids,
    load_doctor_consultation_ids, load_patient_consultation_ids,
};
use crate::types::{Consultation, ConsultationState, Doctor, Error};

pub fn get_consultation(env: &Env, id: u64) -> Result<Consultation, Error> {
    load_consultation(env, id).ok_or(Error::ConsultationNotFound)
}

pub fn get_doctor(env: &Env, identity: &Address) -> Result<Doctor, Error> {
    load_doctor(env, identity).ok_or(Error::DoctorNotFound)
}

fn collect(env: &Env, ids: Vec<u64>, state_filter: Option<ConsultationState>) -> Vec<Consultation> {
    let mut consultations = Vec::new(env);
    for id in ids.iter() {
        if let Some(consultation) = load_consultation(env, id) {
            if state_filter.map_or(true, |state| consultation.state == state) {
                consultations.push_back(consultation);
            }
        }
    }
    consultations
}

/// All consultations booked with `doctor`, oldest first, optionally
/// restricted to one state.
pub fn list_bookings_for_doctor(
    env: &Env,
    doctor: &Address,
    state_filter: Option<ConsultationState>,
) -> Vec<Consultation> {
    collect(env, load_doctor_consultation_ids(env, doctor), state_filter)
}

/// Consultations still holding a slot in `doctor`'s calendar. Reads only
/// the active index, so the cost does not grow with completed history.
pub fn active_bookings_for_doctor(env: &Env, doctor: &Address) -> Vec<Consultation> {
    collect(env, load_doctor_active_consultation_ids(env, doctor), None)
}

pub fn list_consultations_for_patient(
    env: &Env,
    patient: &Address,
    state_filter: Option<ConsultationState>,
) -> Vec<Consultation> {
    collect(env, load_patient_consultation_ids(env, patient), state_filter)
}

/// Number of consultations ever scheduled; also the highest id issued.
pub fn total_consultations(env: &Env) -> u64 {
    consultation_count(env)
}

/// Mean rating for a doctor scaled by 100 (e.g. 450 is 4.5 stars), or
/// `None` if the doctor is unknown or has no ratings yet.
pub fn average_rating(env: &Env, doctor: &Address) -> Option<u32> {
    let doctor = load_doctor(env, doctor)?;
    if doctor.rating_count == 0 {
        return None;
    }
    let scaled = u64::from(doctor.rating_sum) * 100 / u64::from(doctor.rating_count);
    Some(scaled as u32)
}
