//! Use-case handlers.

mod process_message;

pub use process_message::{ProcessMessageError, ProcessMessageHandler};
