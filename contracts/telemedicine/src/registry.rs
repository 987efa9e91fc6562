//! Doctor registration, the verification gate, and the verifier set that
//! controls it.
//!
//! Callers are expected to have authenticated every `Address` argument that
//! acts as a caller before reaching these functions.

use soroban_sdk::{log, Address, Env, String, Vec};

use crate::events;
use crate::specialization;
use crate::storage::{
    extend_instance, has_doctor, load_admin, load_doctor, load_verifiers, save_admin,
    save_doctor, save_verifiers,
};
use crate::types::{Doctor, Error, Specialization};

// -----------------------------------------------------------------------
// Verifier set
// -----------------------------------------------------------------------

pub fn initialize(env: &Env, admin: &Address, verifiers: &Vec<Address>) -> Result<(), Error> {
    if load_admin(env).is_some() {
        return Err(Error::AlreadyInitialized);
    }

    let mut unique: Vec<Address> = Vec::new(env);
    for verifier in verifiers.iter() {
        if !unique.contains(&verifier) {
            unique.push_back(verifier);
        }
    }

    save_admin(env, admin);
    save_verifiers(env, &unique);
    extend_instance(env);

    events::initialized(env, admin, unique.len());
    Ok(())
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = load_admin(env).ok_or(Error::NotInitialized)?;
    if admin != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn add_verifier(env: &Env, admin: &Address, verifier: &Address) -> Result<(), Error> {
    require_admin(env, admin)?;

    let mut verifiers = load_verifiers(env);
    if verifiers.contains(verifier) {
        return Ok(());
    }
    verifiers.push_back(verifier.clone());
    save_verifiers(env, &verifiers);

    events::verifier_added(env, admin, verifier);
    Ok(())
}

pub fn remove_verifier(env: &Env, admin: &Address, verifier: &Address) -> Result<(), Error> {
    require_admin(env, admin)?;

    let mut verifiers = load_verifiers(env);
    let Some(index) = verifiers.first_index_of(verifier) else {
        return Ok(());
    };
    verifiers.remove(index);
    save_verifiers(env, &verifiers);

    events::verifier_removed(env, admin, verifier);
    Ok(())
}

pub fn is_verifier(env: &Env, identity: &Address) -> bool {
    load_verifiers(env).contains(identity)
}

// -----------------------------------------------------------------------
// Doctors
// -----------------------------------------------------------------------

/// Register `identity` as an unverified doctor. Returns the doctor id, which
/// is the identity itself.
pub fn register(env: &Env, identity: &Address, specialization_text: &String) -> Result<Address, Error> {
    let specialization = specialization::parse(specialization_text)?;

    if has_doctor(env, identity) {
        return Err(Error::AlreadyRegistered);
    }

    let doctor = Doctor {
        identity: identity.clone(),
        specialization,
        verified: false,
        registered_at: env.ledger().timestamp(),
        verified_at: None,
        verified_by: None,
        completed_consultations: 0,
        rating_sum: 0,
        rating_count: 0,
    };
    save_doctor(env, &doctor);

    log!(env, "doctor registered: {}", identity.clone());
    events::doctor_registered(env, identity, specialization);

    Ok(identity.clone())
}

/// Mark a doctor verified. Verifying an already verified doctor succeeds
/// without touching the stored record.
pub fn verify(env: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
    if !is_verifier(env, caller) {
        return Err(Error::Unauthorized);
    }

    let mut doctor = load_doctor(env, identity).ok_or(Error::DoctorNotFound)?;
    if doctor.verified {
        return Ok(());
    }

    doctor.verified = true;
    doctor.verified_at = Some(env.ledger().timestamp());
    doctor.verified_by = Some(caller.clone());
    save_doctor(env, &doctor);

    log!(env, "doctor verified: {}", identity.clone());
    events::doctor_verified(env, caller, identity);

    Ok(())
}

pub fn is_verified(env: &Env, identity: &Address) -> bool {
    load_doctor(env, identity)
        .map(|doctor| doctor.verified)
        .unwrap_or(false)
}

pub fn doctor_specialization(env: &Env, identity: &Address) -> Option<Specialization> {
    load_doctor(env, identity).map(|doctor| doctor.specialization)
}
