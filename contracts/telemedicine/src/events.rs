use soroban_sdk::{symbol_short, Address, Env};

use crate::types::Specialization;

pub fn initialized(env: &Env, admin: &Address, verifier_count: u32) {
    env.events()
        .publish((symbol_short!("init"), admin.clone()), verifier_count);
}

pub fn verifier_added(env: &Env, admin: &Address, verifier: &Address) {
    env.events().publish(
        (symbol_short!("ver_add"), verifier.clone()),
        admin.clone(),
    );
}

pub fn verifier_removed(env: &Env, admin: &Address, verifier: &Address) {
    env.events().publish(
        (symbol_short!("ver_rm"), verifier.clone()),
        admin.clone(),
    );
}

pub fn doctor_registered(env: &Env, doctor: &Address, specialization: Specialization) {
    env.events().publish(
        (symbol_short!("doc_reg"), doctor.clone()),
        specialization,
    );
}

pub fn doctor_verified(env: &Env, verifier: &Address, doctor: &Address) {
    env.events().publish(
        (symbol_short!("doc_ver"), doctor.clone()),
        verifier.clone(),
    );
}

pub fn consultation_scheduled(env: &Env, id: u64, patient: &Address, doctor: &Address) {
    env.events().publish(
        (symbol_short!("cons_sch"), id),
        (patient.clone(), doctor.clone()),
    );
}

pub fn consultation_started(env: &Env, id: u64, doctor: &Address) {
    env.events()
        .publish((symbol_short!("cons_st"), id), doctor.clone());
}

pub fn consultation_completed(env: &Env, id: u64, doctor: &Address) {
    env.events()
        .publish((symbol_short!("cons_cmp"), id), doctor.clone());
}

pub fn consultation_rated(env: &Env, id: u64, patient: &Address, score: u32) {
    env.events()
        .publish((symbol_short!("cons_rate"), id), (patient.clone(), score));
}
