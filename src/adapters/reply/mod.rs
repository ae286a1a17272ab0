//! Reply writer adapters.

mod template;

pub use template::TemplateReplyWriter;
