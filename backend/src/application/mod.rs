// Application layer - use cases organized by persona.
// Orchestrates domain logic through the ports; depends on domain only.

pub mod admin;
pub mod errors;
pub mod forms;
pub mod leader;
pub mod notifications;
pub mod participant;
pub mod ports;
