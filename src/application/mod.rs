//! Application layer - Use-case handlers wiring domain logic to ports.

pub mod handlers;
