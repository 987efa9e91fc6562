#![no_std]

mod consultation;
mod events;
mod query;
mod registry;
mod scheduling;
mod specialization;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Vec};
pub use types::*;

#[contract]
pub struct TelemedicineContract;

#[contractimpl]
impl TelemedicineContract {
    /// One-time setup: record the admin and the initial verifier set.
    pub fn initialize(env: Env, admin: Address, verifiers: Vec<Address>) -> Result<(), Error> {
        admin.require_auth();
        registry::initialize(&env, &admin, &verifiers)
    }

    pub fn add_verifier(env: Env, admin: Address, verifier: Address) -> Result<(), Error> {
        admin.require_auth();
        registry::add_verifier(&env, &admin, &verifier)
    }

    pub fn remove_verifier(env: Env, admin: Address, verifier: Address) -> Result<(), Error> {
        admin.require_auth();
        registry::remove_verifier(&env, &admin, &verifier)
    }

    pub fn get_verifiers(env: Env) -> Vec<Address> {
        storage::load_verifiers(&env)
    }

    pub fn is_verifier(env: Env, identity: Address) -> bool {
        registry::is_verifier(&env, &identity)
    }

    /// Register the calling wallet as a doctor.
    ///
    /// `specialization` is matched against the fixed vocabulary after
    /// trimming surrounding whitespace.
    pub fn register_doctor(env: Env, doctor: Address, specialization: String) -> Result<Address, Error> {
        doctor.require_auth();
        registry::register(&env, &doctor, &specialization)
    }

    /// Mark a registered doctor as verified. Only addresses in the verifier
    /// set may call this; repeating it on a verified doctor is a no-op.
    pub fn verify_doctor(env: Env, verifier: Address, doctor: Address) -> Result<(), Error> {
        verifier.require_auth();
        registry::verify(&env, &verifier, &doctor)
    }

    pub fn is_doctor_verified(env: Env, doctor: Address) -> bool {
        registry::is_verified(&env, &doctor)
    }

    pub fn get_doctor_specialization(env: Env, doctor: Address) -> Option<Specialization> {
        registry::doctor_specialization(&env, &doctor)
    }

    pub fn get_doctor(env: Env, doctor: Address) -> Result<Doctor, Error> {
        query::get_doctor(&env, &doctor)
    }

    /// Book `[start, start + duration)` with a verified doctor. Returns the
    /// new consultation id.
    pub fn schedule_consultation_with_time(
        env: Env,
        patient: Address,
        doctor: Address,
        start: u64,
        duration: u64,
    ) -> Result<u64, Error> {
        patient.require_auth();
        consultation::schedule(&env, &patient, &doctor, start, duration)
    }

    pub fn start_consultation(env: Env, doctor: Address, consultation_id: u64) -> Result<(), Error> {
        doctor.require_auth();
        consultation::start(&env, &doctor, consultation_id)
    }

    pub fn complete_consultation(
        env: Env,
        doctor: Address,
        consultation_id: u64,
        record_ref: Bytes,
    ) -> Result<(), Error> {
        doctor.require_auth();
        consultation::complete(&env, &doctor, consultation_id, &record_ref)
    }

    /// Rate a completed consultation from 1 to 5. Each consultation can be
    /// rated once, by its patient.
    pub fn rate_consultation(
        env: Env,
        patient: Address,
        consultation_id: u64,
        score: u32,
    ) -> Result<(), Error> {
        patient.require_auth();
        consultation::rate(&env, &patient, consultation_id, score)
    }

    pub fn get_consultation(env: Env, consultation_id: u64) -> Result<Consultation, Error> {
        query::get_consultation(&env, consultation_id)
    }

    pub fn get_doctor_consultations(
        env: Env,
        doctor: Address,
        state: Option<ConsultationState>,
    ) -> Vec<Consultation> {
        query::list_bookings_for_doctor(&env, &doctor, state)
    }

    pub fn get_patient_consultations(
        env: Env,
        patient: Address,
        state: Option<ConsultationState>,
    ) -> Vec<Consultation> {
        query::list_consultations_for_patient(&env, &patient, state)
    }

    pub fn get_consultation_count(env: Env) -> u64 {
        query::total_consultations(&env)
    }

    /// Average rating scaled by 100, `None` until the doctor has a rating.
    pub fn get_doctor_average_rating(env: Env, doctor: Address) -> Option<u32> {
        query::average_rating(&env, &doctor)
    }
}
