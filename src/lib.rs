//! Shop Scout - Conversational Shopping Assistant Core
//!
//! This crate implements the conversation state machine and the
//! requirement-extraction/recommendation-scoring pipeline behind a
//! guided product-discovery chat experience.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
