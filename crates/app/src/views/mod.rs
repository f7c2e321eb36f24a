pub mod caregiver;
pub mod patient;

pub use caregiver::CaregiverView;
pub use patient::PatientView;
