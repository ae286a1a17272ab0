//! ProcessMessage command handler.
//!
//! Runs the whole per-turn pipeline: fetch session state, extract
//! requirements, merge, detect contradictions, decide the dialogue move,
//! and either ask a clarifying question or produce ranked
//! recommendations. Each incoming (session, message) pair is processed to
//! completion before its reply is returned.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::contradiction::{Contradiction, ContradictionDetector};
use crate::domain::conversation::{
    ConversationContext, DialogueState, InteractionKind, TurnReply,
};
use crate::domain::foundation::SessionId;
use crate::domain::recommendation::RecommendationEngine;
use crate::domain::requirements::UtteranceExtractor;
use crate::ports::{
    CatalogProvider, ReplyPrompt, ReplyWriter, SessionStore, SessionStoreError,
};

/// Errors that can occur when processing a turn.
///
/// Boundary failures (catalog, reply backend) are not here: those degrade
/// to deterministic replies inside the pipeline.
#[derive(Debug, Error)]
pub enum ProcessMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyMessage,

    /// Session store failure during state access.
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// Handles one conversational turn per call.
pub struct ProcessMessageHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<dyn CatalogProvider>,
    reply_writer: Arc<dyn ReplyWriter>,
    extractor: UtteranceExtractor,
    detector: ContradictionDetector,
    engine: RecommendationEngine,
}

impl ProcessMessageHandler {
    /// Creates a handler with default extraction, detection, and ranking.
    pub fn new(
        store: Arc<dyn SessionStore>,
        catalog: Arc<dyn CatalogProvider>,
        reply_writer: Arc<dyn ReplyWriter>,
    ) -> Self {
        Self {
            store,
            catalog,
            reply_writer,
            extractor: UtteranceExtractor::new(),
            detector: ContradictionDetector::new(),
            engine: RecommendationEngine::new(),
        }
    }

    /// Overrides the contradiction detector (custom thresholds).
    pub fn with_detector(mut self, detector: ContradictionDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Overrides the recommendation engine.
    pub fn with_engine(mut self, engine: RecommendationEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Processes one user utterance and returns the structured reply.
    pub async fn process(
        &self,
        session_id: &SessionId,
        message: &str,
    ) -> Result<TurnReply, ProcessMessageError> {
        if message.trim().is_empty() {
            return Err(ProcessMessageError::EmptyMessage);
        }

        self.store.get_or_create(session_id).await?;

        // Extraction, merge, and audit-trail writes happen under the
        // session's lock; everything after works on the snapshot.
        let extractor = self.extractor;
        let detector = self.detector;
        let utterance = message.to_string();
        let snapshot = self
            .store
            .update(
                session_id,
                Box::new(move |ctx| {
                    let delta = extractor.extract(&utterance, ctx.requirements());
                    debug!(
                        session = %ctx.session_id,
                        fields = delta.len(),
                        "requirements extracted"
                    );
                    ctx.record_turn(utterance, delta);

                    let contradictions = detector.detect(ctx.requirements());
                    if let Some(first) = contradictions.into_iter().next() {
                        ctx.record_contradiction(first);
                    } else {
                        match DialogueState::decide(ctx.requirements(), &[]) {
                            DialogueState::NeedsCategory
                            | DialogueState::NeedsBudget
                            | DialogueState::Clarifying => {
                                ctx.record_clarification(InteractionKind::Clarification);
                            }
                            _ => {}
                        }
                    }
                }),
            )
            .await?;

        let contradictions = self.detector.detect(snapshot.requirements());
        let state = DialogueState::decide(snapshot.requirements(), &contradictions);
        debug!(session = %session_id, ?state, "dialogue state decided");

        let reply = match state {
            DialogueState::ContradictionPending => {
                self.contradiction_reply(&contradictions).await
            }
            DialogueState::NeedsCategory => {
                let text = self.phrase(&ReplyPrompt::AskCategory).await;
                TurnReply::prompt(text, InteractionKind::Clarification)
            }
            DialogueState::NeedsBudget => {
                let category = snapshot.requirements().category().unwrap_or("product");
                let text = self
                    .phrase(&ReplyPrompt::AskBudget {
                        category: category.to_string(),
                    })
                    .await;
                TurnReply::prompt(text, InteractionKind::Clarification)
            }
            DialogueState::Clarifying => {
                let text = self.phrase(&ReplyPrompt::GeneralClarification).await;
                TurnReply::prompt(text, InteractionKind::Clarification)
            }
            DialogueState::ReadyToRecommend => self.recommendation_reply(&snapshot).await,
        };

        Ok(reply)
    }

    async fn contradiction_reply(&self, contradictions: &[Contradiction]) -> TurnReply {
        // One contradiction at a time; the rest stay latent for later turns.
        let Some(contradiction) = contradictions.first() else {
            let text = self.phrase(&ReplyPrompt::GeneralClarification).await;
            return TurnReply::prompt(text, InteractionKind::Clarification);
        };

        info!(kind = ?contradiction.kind, "surfacing contradiction");
        let text = self
            .phrase(&ReplyPrompt::ResolveContradiction {
                contradiction: contradiction.clone(),
            })
            .await;
        TurnReply::prompt_with_options(
            text,
            InteractionKind::ContradictionResolution,
            contradiction.suggestions.clone(),
        )
    }

    async fn recommendation_reply(&self, snapshot: &ConversationContext) -> TurnReply {
        let requirements = snapshot.requirements();
        let (Some(category), Some(budget)) = (requirements.category(), requirements.budget())
        else {
            let text = self.phrase(&ReplyPrompt::GeneralClarification).await;
            return TurnReply::prompt(text, InteractionKind::Clarification);
        };

        let candidates = match self.catalog.get_candidates(category, Some(budget)).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(%err, "catalog unavailable; degrading to no-results reply");
                Vec::new()
            }
        };

        if candidates.is_empty() {
            let text = self
                .phrase(&ReplyPrompt::NoResults {
                    category: category.to_string(),
                    budget,
                })
                .await;
            return TurnReply::prompt(text, InteractionKind::NoResults);
        }

        let ranked = self
            .engine
            .recommend(requirements, snapshot.priority_rankings(), &candidates);
        info!(
            session = %snapshot.session_id,
            count = ranked.len(),
            "recommendations ready"
        );

        let text = self
            .phrase(&ReplyPrompt::PresentRecommendations {
                count: ranked.len(),
            })
            .await;
        TurnReply::recommendations(text, ranked, snapshot.summary())
    }

    /// Phrases a prompt through the reply backend, degrading to the
    /// deterministic template on any failure.
    async fn phrase(&self, prompt: &ReplyPrompt) -> String {
        match self.reply_writer.compose(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "reply backend failed; using template fallback");
                prompt.fallback_text()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::adapters::catalog::StaticCatalog;
    use crate::adapters::reply::TemplateReplyWriter;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::catalog::Product;
    use crate::domain::foundation::Rupees;
    use crate::ports::{CatalogError, ReplyError};

    fn handler() -> ProcessMessageHandler {
        ProcessMessageHandler::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(StaticCatalog::new()),
            Arc::new(TemplateReplyWriter::new()),
        )
    }

    fn sid(name: &str) -> SessionId {
        SessionId::new(name).unwrap()
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let result = handler().process(&sid("s"), "   ").await;
        assert!(matches!(result, Err(ProcessMessageError::EmptyMessage)));
    }

    #[tokio::test]
    async fn first_contact_with_no_category_asks_for_one() {
        let reply = handler().process(&sid("s"), "hello there").await.unwrap();
        assert_eq!(reply.interaction_type(), InteractionKind::Clarification);
        assert!(reply.requires_user_input());
        assert!(reply.response_text().contains("What type of product"));
    }

    #[tokio::test]
    async fn category_without_budget_asks_for_budget_by_name() {
        let reply = handler()
            .process(&sid("s"), "I need a smartphone")
            .await
            .unwrap();
        assert_eq!(reply.interaction_type(), InteractionKind::Clarification);
        assert!(reply.response_text().contains("smartphones"));
        assert!(reply.response_text().contains("budget"));
    }

    #[tokio::test]
    async fn complete_requirements_in_one_turn_recommend_immediately() {
        let reply = handler()
            .process(&sid("s"), "Gaming Laptops under ₹60,000")
            .await
            .unwrap();

        assert_eq!(reply.interaction_type(), InteractionKind::Recommendations);
        assert!(!reply.requires_user_input());
        match reply {
            TurnReply::Recommendations {
                recommendations,
                conversation_summary,
                ..
            } => {
                assert_eq!(recommendations.len(), 3);
                assert!(recommendations
                    .windows(2)
                    .all(|w| w[0].match_score >= w[1].match_score));
                assert_eq!(conversation_summary.conversation_turns, 1);
            }
            TurnReply::Prompt { .. } => panic!("expected recommendations"),
        }
    }

    #[tokio::test]
    async fn low_gaming_budget_surfaces_contradiction() {
        let reply = handler()
            .process(&sid("s"), "Gaming laptop under 30k")
            .await
            .unwrap();

        assert_eq!(
            reply.interaction_type(),
            InteractionKind::ContradictionResolution
        );
        assert!(reply.requires_user_input());
        match reply {
            TurnReply::Prompt { options, .. } => {
                assert_eq!(options.unwrap().len(), 3);
            }
            TurnReply::Recommendations { .. } => panic!("expected a contradiction prompt"),
        }
    }

    #[tokio::test]
    async fn contradiction_clears_when_budget_is_raised() {
        let h = handler();
        let id = sid("s");
        let first = h.process(&id, "Gaming laptop under 30k").await.unwrap();
        assert_eq!(
            first.interaction_type(),
            InteractionKind::ContradictionResolution
        );

        // The same contradiction re-surfaces while nothing changes.
        let again = h.process(&id, "hmm what should I do").await.unwrap();
        assert_eq!(
            again.interaction_type(),
            InteractionKind::ContradictionResolution
        );

        // A corrected budget resolves it and flows straight to ranking.
        let resolved = h.process(&id, "60000").await.unwrap();
        assert_eq!(
            resolved.interaction_type(),
            InteractionKind::Recommendations
        );
    }

    #[tokio::test]
    async fn unknown_category_degrades_to_no_results() {
        let h = handler();
        let id = sid("s");
        h.process(&id, "I need a smartphone").await.unwrap();
        let reply = h.process(&id, "20000").await.unwrap();

        assert_eq!(reply.interaction_type(), InteractionKind::NoResults);
        assert!(reply.requires_user_input());
        assert!(reply.response_text().contains("smartphones"));
        assert!(reply.response_text().contains("₹20,000"));
    }

    struct FailingCatalog;

    #[async_trait]
    impl CatalogProvider for FailingCatalog {
        async fn get_candidates(
            &self,
            _category: &str,
            _budget_ceiling: Option<Rupees>,
        ) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn catalog_failure_degrades_to_no_results_reply() {
        let h = ProcessMessageHandler::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(FailingCatalog),
            Arc::new(TemplateReplyWriter::new()),
        );
        let reply = h
            .process(&sid("s"), "Gaming Laptops under ₹60,000")
            .await
            .unwrap();
        assert_eq!(reply.interaction_type(), InteractionKind::NoResults);
    }

    struct FailingReplyWriter;

    #[async_trait]
    impl ReplyWriter for FailingReplyWriter {
        async fn compose(&self, _prompt: &ReplyPrompt) -> Result<String, ReplyError> {
            Err(ReplyError::Timeout)
        }
    }

    #[tokio::test]
    async fn reply_backend_failure_falls_back_to_template_text() {
        let h = ProcessMessageHandler::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(StaticCatalog::new()),
            Arc::new(FailingReplyWriter),
        );
        let reply = h.process(&sid("s"), "I need a smartphone").await.unwrap();

        // Same structured decision, canned phrasing.
        assert_eq!(reply.interaction_type(), InteractionKind::Clarification);
        assert_eq!(
            reply.response_text(),
            ReplyPrompt::AskBudget {
                category: "smartphones".to_string()
            }
            .fallback_text()
        );
    }

    #[tokio::test]
    async fn later_category_change_keeps_the_budget() {
        let h = handler();
        let id = sid("s");
        h.process(&id, "I need a smartphone").await.unwrap();
        h.process(&id, "20000").await.unwrap();

        // Category flips, budget survives, so ranking runs immediately.
        let reply = h.process(&id, "actually a smartwatch").await.unwrap();
        assert_eq!(reply.interaction_type(), InteractionKind::Recommendations);
        match reply {
            TurnReply::Recommendations {
                recommendations, ..
            } => {
                assert!(recommendations
                    .iter()
                    .all(|r| r.product.category == "smartwatches"));
                assert!(recommendations
                    .iter()
                    .all(|r| r.product.price.current <= Rupees::new(20_000)));
            }
            TurnReply::Prompt { .. } => panic!("expected recommendations"),
        }
    }

    #[tokio::test]
    async fn audit_trail_grows_turn_by_turn() {
        let store = Arc::new(InMemorySessionStore::new());
        let h = ProcessMessageHandler::new(
            store.clone(),
            Arc::new(StaticCatalog::new()),
            Arc::new(TemplateReplyWriter::new()),
        );
        let id = sid("s");
        h.process(&id, "I need a smartphone").await.unwrap();
        h.process(&id, "around 20000").await.unwrap();

        let ctx = store.get_or_create(&id).await.unwrap();
        assert_eq!(ctx.turn_count(), 2);
        assert_eq!(ctx.requirements().category(), Some("smartphones"));
        assert_eq!(ctx.requirements().budget(), Some(Rupees::new(20_000)));
        assert_eq!(ctx.requirements().budget_flexibility(), Some("flexible"));
    }

    #[tokio::test]
    async fn presented_contradictions_are_logged() {
        let store = Arc::new(InMemorySessionStore::new());
        let h = ProcessMessageHandler::new(
            store.clone(),
            Arc::new(StaticCatalog::new()),
            Arc::new(TemplateReplyWriter::new()),
        );
        let id = sid("s");
        h.process(&id, "Gaming laptop under 30k").await.unwrap();

        let ctx = store.get_or_create(&id).await.unwrap();
        assert_eq!(ctx.contradictions_resolved().len(), 1);
    }

    #[tokio::test]
    async fn priorities_sharpen_the_ranking() {
        let store = Arc::new(InMemorySessionStore::new());
        let h = ProcessMessageHandler::new(
            store.clone(),
            Arc::new(StaticCatalog::new()),
            Arc::new(TemplateReplyWriter::new()),
        );
        let id = sid("s");
        h.process(&id, "I want a smartwatch").await.unwrap();
        store
            .update(
                &id,
                Box::new(|ctx| {
                    ctx.set_priority(
                        "Battery Life",
                        crate::domain::foundation::ImportanceWeight::try_new(10).unwrap(),
                    );
                }),
            )
            .await
            .unwrap();

        let reply = h.process(&id, "6000").await.unwrap();
        match reply {
            TurnReply::Recommendations {
                recommendations,
                conversation_summary,
                ..
            } => {
                assert!(!recommendations.is_empty());
                assert!(conversation_summary.priorities.contains_key("Battery Life"));
            }
            TurnReply::Prompt { .. } => panic!("expected recommendations"),
        }
    }
}
