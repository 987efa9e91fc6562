//! Time-slot conflict detection for a doctor's calendar.
//!
//! Slots are half-open intervals `[start, start + duration)`, so a
//! consultation ending exactly when another begins does not conflict.

use soroban_sdk::{Address, Vec};

use crate::types::{Consultation, Error};

/// Returns the exclusive end of the slot, or `InvalidSchedule` for a zero
/// start, zero duration, or a slot that runs past `u64::MAX`.
fn slot_end(start: u64, duration: u64) -> Result<u64, Error> {
    if start == 0 || duration == 0 {
        return Err(Error::InvalidSchedule);
    }
    start.checked_add(duration).ok_or(Error::InvalidSchedule)
}

fn overlaps(start: u64, end: u64, other: &Consultation) -> bool {
    start < other.end() && other.start < end
}

/// Check a proposed slot against `bookings`.
///
/// Only bookings belonging to `doctor` that are still active (Scheduled or
/// InProgress) take part; completed consultations free their slot.
pub fn check_conflict(
    doctor: &Address,
    start: u64,
    duration: u64,
    bookings: &Vec<Consultation>,
) -> Result<(), Error> {
    let end = slot_end(start, duration)?;

    for booking in bookings.iter() {
        if booking.doctor != *doctor || !booking.state.is_active() {
            continue;
        }
        if overlaps(start, end, &booking) {
            return Err(Error::TimeConflict);
        }
    }

    Ok(())
}
