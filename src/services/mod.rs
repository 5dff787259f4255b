//! Services - Background Services
//!
//! The development asset server and the runtime bridge it runs on.

pub mod dev_server;
pub mod runtime;
