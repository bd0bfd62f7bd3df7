//! Hotel reservation lifecycle and room-availability engine.
//!
//! The crate is split the same way the binary is deployed: `model` holds the serializable
//! DTOs returned to callers, while `server` holds configuration, persistence, business
//! services and the sweep scheduler.

pub mod model;
pub mod server;
