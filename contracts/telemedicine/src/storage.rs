use soroban_sdk::{Address, Env, Vec};

use crate::types::{Consultation, DataKey, Doctor};

// Roughly one day and thirty days of ledgers at ~5s per ledger.
const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

pub fn load_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn load_verifiers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Verifiers)
        .unwrap_or(Vec::new(env))
}

pub fn save_verifiers(env: &Env, verifiers: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Verifiers, verifiers);
}

// -----------------------------------------------------------------------
// Counters
// -----------------------------------------------------------------------

pub fn consultation_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ConsultationCounter)
        .unwrap_or(0)
}

pub fn next_consultation_id(env: &Env) -> u64 {
    let next = consultation_count(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::ConsultationCounter, &next);
    next
}

// -----------------------------------------------------------------------
// Doctors
// -----------------------------------------------------------------------

pub fn has_doctor(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Doctor(identity.clone()))
}

pub fn load_doctor(env: &Env, identity: &Address) -> Option<Doctor> {
    env.storage()
        .persistent()
        .get(&DataKey::Doctor(identity.clone()))
}

pub fn save_doctor(env: &Env, doctor: &Doctor) {
    let key = DataKey::Doctor(doctor.identity.clone());
    env.storage().persistent().set(&key, doctor);
    extend_persistent(env, &key);
}

// -----------------------------------------------------------------------
// Consultations
// -----------------------------------------------------------------------

pub fn load_consultation(env: &Env, id: u64) -> Option<Consultation> {
    env.storage().persistent().get(&DataKey::Consultation(id))
}

pub fn save_consultation(env: &Env, consultation: &Consultation) {
    let key = DataKey::Consultation(consultation.id);
    env.storage().persistent().set(&key, consultation);
    extend_persistent(env, &key);
}

fn append_id(env: &Env, key: DataKey, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
    extend_persistent(env, &key);
}

pub fn add_doctor_consultation(env: &Env, doctor: &Address, id: u64) {
    append_id(env, DataKey::DoctorConsultations(doctor.clone()), id);
}

pub fn add_doctor_active_consultation(env: &Env, doctor: &Address, id: u64) {
    append_id(env, DataKey::DoctorActiveConsultations(doctor.clone()), id);
}

pub fn remove_doctor_active_consultation(env: &Env, doctor: &Address, id: u64) {
    let key = DataKey::DoctorActiveConsultations(doctor.clone());
    let mut ids = load_doctor_active_consultation_ids(env, doctor);
    let Some(index) = ids.first_index_of(id) else {
        return;
    };
    ids.remove(index);
    if ids.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &ids);
        extend_persistent(env, &key);
    }
}

pub fn add_patient_consultation(env: &Env, patient: &Address, id: u64) {
    append_id(env, DataKey::PatientConsultations(patient.clone()), id);
}

pub fn load_doctor_consultation_ids(env: &Env, doctor: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::DoctorConsultations(doctor.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn load_doctor_active_consultation_ids(env: &Env, doctor: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::DoctorActiveConsultations(doctor.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn load_patient_consultation_ids(env: &Env, patient: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientConsultations(patient.clone()))
        .unwrap_or(Vec::new(env))
}
