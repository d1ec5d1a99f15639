//! Account registration.

pub mod gate;

pub use gate::RegistrationGate;
