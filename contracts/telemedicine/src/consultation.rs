//! Consultation lifecycle: `Scheduled -> InProgress -> Completed`, plus a
//! one-time patient rating once completed.
//!
//! Every check runs before the first write, so a failed call leaves storage
//! as it found it.

use soroban_sdk::{log, Address, Bytes, Env};

use crate::events;
use crate::query;
use crate::scheduling;
use crate::storage::{
    add_doctor_active_consultation, add_doctor_consultation, add_patient_consultation,
    extend_instance, load_doctor, next_consultation_id, remove_doctor_active_consultation,
    save_consultation, save_doctor,
};
use crate::types::{Consultation, ConsultationState, Error};

pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 5;

pub fn schedule(
    env: &Env,
    patient: &Address,
    doctor: &Address,
    start: u64,
    duration: u64,
) -> Result<u64, Error> {
    if patient == doctor {
        return Err(Error::SelfConsultation);
    }

    let record = load_doctor(env, doctor).ok_or(Error::DoctorNotFound)?;
    if !record.verified {
        return Err(Error::DoctorUnverified);
    }

    let bookings = query::active_bookings_for_doctor(env, doctor);
    scheduling::check_conflict(doctor, start, duration, &bookings)?;

    let id = next_consultation_id(env);
    let consultation = Consultation {
        id,
        doctor: doctor.clone(),
        patient: patient.clone(),
        start,
        duration,
        state: ConsultationState::Scheduled,
        record_ref: None,
        rating: None,
        created_at: env.ledger().timestamp(),
        started_at: None,
        completed_at: None,
    };

    save_consultation(env, &consultation);
    add_doctor_consultation(env, doctor, id);
    add_doctor_active_consultation(env, doctor, id);
    add_patient_consultation(env, patient, id);
    extend_instance(env);

    log!(env, "consultation {} scheduled at {}", id, start);
    events::consultation_scheduled(env, id, patient, doctor);

    Ok(id)
}

fn load_for_doctor(env: &Env, caller: &Address, id: u64) -> Result<Consultation, Error> {
    let consultation = query::get_consultation(env, id)?;
    if consultation.doctor != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(consultation)
}

pub fn start(env: &Env, caller: &Address, id: u64) -> Result<(), Error> {
    let mut consultation = load_for_doctor(env, caller, id)?;

    consultation.state = consultation.state.start()?;
    consultation.started_at = Some(env.ledger().timestamp());
    save_consultation(env, &consultation);

    events::consultation_started(env, id, caller);
    Ok(())
}

/// Finish an in-progress consultation. `record_ref` is stored as given; it is
/// usually a hash of or pointer to the off-chain clinical record.
pub fn complete(env: &Env, caller: &Address, id: u64, record_ref: &Bytes) -> Result<(), Error> {
    let mut consultation = load_for_doctor(env, caller, id)?;

    consultation.state = consultation.state.complete()?;
    consultation.completed_at = Some(env.ledger().timestamp());
    consultation.record_ref = Some(record_ref.clone());
    save_consultation(env, &consultation);
    remove_doctor_active_consultation(env, caller, id);

    if let Some(mut doctor) = load_doctor(env, caller) {
        doctor.completed_consultations = doctor.completed_consultations.saturating_add(1);
        save_doctor(env, &doctor);
    }

    log!(env, "consultation {} completed", id);
    events::consultation_completed(env, id, caller);
    Ok(())
}

pub fn rate(env: &Env, caller: &Address, id: u64, score: u32) -> Result<(), Error> {
    let mut consultation = query::get_consultation(env, id)?;

    if consultation.patient != *caller {
        return Err(Error::Unauthorized);
    }
    if consultation.state != ConsultationState::Completed {
        return Err(Error::InvalidTransition);
    }
    if consultation.rating.is_some() {
        return Err(Error::AlreadyRated);
    }
    if !(MIN_RATING..=MAX_RATING).contains(&score) {
        return Err(Error::InvalidRating);
    }

    consultation.rating = Some(score);
    save_consultation(env, &consultation);

    if let Some(mut doctor) = load_doctor(env, &consultation.doctor) {
        doctor.rating_sum = doctor.rating_sum.saturating_add(score);
        doctor.rating_count = doctor.rating_count.saturating_add(1);
        save_doctor(env, &doctor);
    }

    events::consultation_rated(env, id, caller, score);
    Ok(())
}
