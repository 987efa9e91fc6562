use soroban_sdk::String;

use crate::types::{Error, Specialization};

/// Longest input accepted before trimming. No valid name comes close, so
/// anything longer is rejected without copying it out of the host.
pub const MAX_SPECIALIZATION_LEN: u32 = 64;

impl Specialization {
    fn from_name(name: &[u8]) -> Option<Specialization> {
        let specialization = match name {
            b"Cardiology" => Specialization::Cardiology,
            b"Dermatology" => Specialization::Dermatology,
            b"Pediatrics" => Specialization::Pediatrics,
            b"GeneralPractice" => Specialization::GeneralPractice,
            b"Neurology" => Specialization::Neurology,
            b"Psychiatry" => Specialization::Psychiatry,
            b"Orthopedics" => Specialization::Orthopedics,
            b"Oncology" => Specialization::Oncology,
            _ => return None,
        };
        Some(specialization)
    }
}

/// Parse free text into a [`Specialization`].
///
/// Surrounding ASCII whitespace is ignored; the remaining text must match a
/// variant name exactly (case-sensitive).
pub fn parse(text: &String) -> Result<Specialization, Error> {
    let len = text.len();
    if len > MAX_SPECIALIZATION_LEN {
        return Err(Error::InvalidSpecialization);
    }

    let mut buf = [0u8; MAX_SPECIALIZATION_LEN as usize];
    let raw = &mut buf[..len as usize];
    text.copy_into_slice(raw);

    Specialization::from_name(raw.trim_ascii()).ok_or(Error::InvalidSpecialization)
}
