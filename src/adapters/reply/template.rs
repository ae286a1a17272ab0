//! Template Reply Writer Adapter
//!
//! Deterministic canned phrasing. Doubles as the degraded fallback when a
//! generative backend behind the same port fails: the pipeline calls
//! [`TemplateReplyWriter::render`] directly in that case.

use async_trait::async_trait;

use crate::ports::{ReplyError, ReplyPrompt, ReplyWriter};

/// Reply writer that always answers with fixed templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateReplyWriter;

impl TemplateReplyWriter {
    /// Creates a new template writer.
    pub fn new() -> Self {
        Self
    }

    /// Renders the canned text for a prompt. Infallible and pure.
    pub fn render(prompt: &ReplyPrompt) -> String {
        prompt.fallback_text()
    }
}

#[async_trait]
impl ReplyWriter for TemplateReplyWriter {
    async fn compose(&self, prompt: &ReplyPrompt) -> Result<String, ReplyError> {
        Ok(Self::render(prompt))
    }
}
