//! Background Tasks Module
//!
//! Tasks that run periodically alongside the server.
//!
//! # Tasks
//! - Expiry sweep: removes expired cache entries at configured intervals

mod cleanup;

pub use cleanup::spawn_sweep_task;
