use soroban_sdk::{contracterror, contracttype, Address, Bytes};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidSpecialization = 4,
    AlreadyRegistered = 5,
    DoctorNotFound = 6,
    ConsultationNotFound = 7,
    DoctorUnverified = 8,
    InvalidSchedule = 9,
    TimeConflict = 10,
    InvalidTransition = 11,
    AlreadyRated = 12,
    InvalidRating = 13,
    SelfConsultation = 14,
}

/// Medical practice areas a doctor can register under.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Specialization {
    Cardiology = 1,
    Dermatology = 2,
    Pediatrics = 3,
    GeneralPractice = 4,
    Neurology = 5,
    Psychiatry = 6,
    Orthopedics = 7,
    Oncology = 8,
}

/// A registered doctor, keyed by the registering wallet.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub identity: Address,
    pub specialization: Specialization,
    pub verified: bool,
    pub registered_at: u64,
    pub verified_at: Option<u64>,
    pub verified_by: Option<Address>,
    pub completed_consultations: u32,
    pub rating_sum: u32,
    pub rating_count: u32,
}

/// Lifecycle state of a consultation.
///
/// The only legal path is `Scheduled -> InProgress -> Completed`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ConsultationState {
    /// Booked, occupying the doctor's time slot.
    Scheduled = 1,
    /// Started by the doctor; still occupies the slot.
    InProgress = 2,
    /// Finished, record reference attached. Terminal.
    Completed = 3,
}

impl ConsultationState {
    /// Whether a consultation in this state still blocks the doctor's calendar.
    pub fn is_active(&self) -> bool {
        matches!(self, ConsultationState::Scheduled | ConsultationState::InProgress)
    }

    pub fn start(self) -> Result<ConsultationState, Error> {
        match self {
            ConsultationState::Scheduled => Ok(ConsultationState::InProgress),
            _ => Err(Error::InvalidTransition),
        }
    }

    pub fn complete(self) -> Result<ConsultationState, Error> {
        match self {
            ConsultationState::InProgress => Ok(ConsultationState::Completed),
            _ => Err(Error::InvalidTransition),
        }
    }
}

/// A consultation between one doctor and one patient.
///
/// `start` and `duration` share the same unit (minutes); the booked slot is
/// the half-open interval `[start, start + duration)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Consultation {
    pub id: u64,
    pub doctor: Address,
    pub patient: Address,
    pub start: u64,
    pub duration: u64,
    pub state: ConsultationState,
    pub record_ref: Option<Bytes>,
    pub rating: Option<u32>,
    pub created_at: u64,
    pub started_at: Option<u64>,
    pub completed_at: Option<u64>,
}

impl Consultation {
    /// End of the booked slot (exclusive).
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address allowed to manage the verifier set.
    Admin,
    /// Vec<Address> of identities allowed to verify doctors.
    Verifiers,
    /// Auto-increment counter for consultations.
    ConsultationCounter,
    /// doctor -> Doctor
    Doctor(Address),
    /// consultation id -> Consultation
    Consultation(u64),
    /// doctor -> Vec<u64> (consultation ids)
    DoctorConsultations(Address),
    /// doctor -> Vec<u64> (ids still Scheduled or InProgress)
    DoctorActiveConsultations(Address),
    /// patient -> Vec<u64> (consultation ids)
    PatientConsultations(Address),
}
