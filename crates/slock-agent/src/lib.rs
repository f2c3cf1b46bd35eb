//! Runtime pieces of the slock MQTT agent.
//!
//! The binary wires these together: [`session`] builds the broker session
//! parameters recovered from the reference deployment, and
//! [`service::LockService`] runs the serialized
//! classify → mutate → persist → respond sequence for each inbound command.

pub mod service;
pub mod session;

pub use service::LockService;
