use crate::error::ClientError;
use crate::models::{self, AnalysisResult};
use crate::service::AnalysisService;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Idle,
    Pending,
    Resolved,
    Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// The request ran to completion; the session is Resolved or Failed.
    Completed,
    /// A request was already in flight; this submit was a no-op.
    Ignored,
    /// Input failed local validation; no request was issued.
    Rejected,
}

/// Owns one request lifecycle: `Idle -> Pending -> Resolved | Failed`,
/// re-entrant on the next submit. Exactly one request is in flight at a
/// time; a submit while Pending is ignored rather than queued.
pub struct AnalysisSession<S> {
    service: S,
    session_id: Uuid,
    state: SessionState,
    result: Option<AnalysisResult>,
    error: Option<String>,
    settled_at: Option<DateTime<Utc>>,
}

impl<S: AnalysisService> AnalysisSession<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            session_id: Uuid::new_v4(),
            state: SessionState::Idle,
            result: None,
            error: None,
            settled_at: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// When the current Resolved/Failed state was reached. Session
    /// metadata only; never part of the exported report.
    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.settled_at
    }

    /// Single entry point for the UI layer. Trims the input, rejects
    /// empty submissions locally, then drives one request through the
    /// service and settles in exactly one of Resolved or Failed.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        if self.state == SessionState::Pending {
            log::debug!(
                "session {}: submit ignored, a request is already in flight",
                self.session_id
            );
            return SubmitOutcome::Ignored;
        }

        let claim = input.trim().to_string();
        if claim.is_empty() {
            let err = ClientError::Validation("enter a claim or URL to fact-check".to_string());
            log::warn!("session {}: {} error: {}", self.session_id, err.kind(), err);
            self.error = Some(err.to_string());
            return SubmitOutcome::Rejected;
        }

        self.begin(&claim);
        match self.request(&claim).await {
            Ok(result) => self.resolve(result),
            Err(err) => self.fail(&err),
        }
        SubmitOutcome::Completed
    }

    async fn request(&self, claim: &str) -> Result<AnalysisResult, ClientError> {
        let payload = self.service.analyze(claim).await?;
        Ok(models::parse(&payload)?)
    }

    fn begin(&mut self, claim: &str) {
        log::info!("session {}: analyzing {:?}", self.session_id, claim);
        self.state = SessionState::Pending;
        self.result = None;
        self.error = None;
        self.settled_at = None;
    }

    fn resolve(&mut self, result: AnalysisResult) {
        log::debug!(
            "session {}: resolved {} at {}% trust",
            self.session_id,
            result.final_label,
            result.trust_score
        );
        self.state = SessionState::Resolved;
        self.result = Some(result);
        self.error = None;
        self.settled_at = Some(Utc::now());
    }

    fn fail(&mut self, err: &ClientError) {
        log::warn!(
            "session {}: analysis failed ({}): {}",
            self.session_id,
            err.kind(),
            err
        );
        self.state = SessionState::Failed;
        self.result = None;
        self.error = Some(err.to_string());
        self.settled_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verdict;
    use crate::service::MockAnalysisService;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "claim": "vaccines cause autism",
            "final_label": "MISINFORMATION",
            "trust_score": 92,
            "ml_label": "MISINFORMATION",
            "gemini_label": "MISINFORMATION",
            "openrouter_label": "UNCERTAIN",
            "summary": "Large cohort studies show no association.",
            "evidence": [
                {"title": "CDC", "link": "https://cdc.gov/x", "snippet": "No link found."}
            ]
        })
    }

    #[tokio::test]
    async fn successful_submit_resolves_with_a_result() {
        let mut session = AnalysisSession::new(MockAnalysisService::success(sample_payload()));
        let outcome = session.submit("vaccines cause autism").await;
        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(session.state(), SessionState::Resolved);
        assert!(session.error().is_none());
        assert!(session.settled_at().is_some());
        let result = session.result().unwrap();
        assert_eq!(result.final_label, Verdict::Misinformation);
    }

    #[tokio::test]
    async fn service_status_failure_fails_the_session() {
        let mut session = AnalysisSession::new(MockAnalysisService::status(500));
        session.submit("some claim").await;
        assert_eq!(session.state(), SessionState::Failed);
        assert!(session.result().is_none());
        assert!(session.error().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn transport_failure_fails_the_session() {
        let mut session = AnalysisSession::new(MockAnalysisService::transport_failure());
        session.submit("some claim").await;
        assert_eq!(session.state(), SessionState::Failed);
        assert!(!session.error().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unparseable_payload_fails_the_session() {
        let mut payload = sample_payload();
        payload.as_object_mut().unwrap().remove("final_label");
        let mut session = AnalysisSession::new(MockAnalysisService::success(payload));
        session.submit("some claim").await;
        assert_eq!(session.state(), SessionState::Failed);
        assert!(session.error().unwrap().contains("final_label"));
    }

    #[tokio::test]
    async fn empty_input_never_leaves_idle_or_calls_the_service() {
        let mut session = AnalysisSession::new(MockAnalysisService::success(sample_payload()));
        for input in ["", "   ", "\n\t"] {
            let outcome = session.submit(input).await;
            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert_eq!(session.state(), SessionState::Idle);
        }
        assert_eq!(session.service.call_count(), 0);
        assert!(!session.error().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_while_pending_is_ignored() {
        let mut session = AnalysisSession::new(MockAnalysisService::success(sample_payload()));
        session.state = SessionState::Pending;
        let outcome = session.submit("another claim").await;
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(session.state(), SessionState::Pending);
        assert_eq!(session.service.call_count(), 0);
    }

    #[tokio::test]
    async fn resubmit_after_failure_clears_the_previous_error() {
        let mut session = AnalysisSession::new(MockAnalysisService::status(500));
        session.submit("first").await;
        assert_eq!(session.state(), SessionState::Failed);

        // Swap the collaborator so the retry settles differently.
        session.service = MockAnalysisService::success(sample_payload());
        session.submit("second").await;
        assert_eq!(session.state(), SessionState::Resolved);
        assert!(session.error().is_none());
        assert!(session.result().is_some());
    }

    #[tokio::test]
    async fn resubmit_after_success_replaces_the_result() {
        let mut payload = sample_payload();
        payload["final_label"] = json!("REAL");
        payload["trust_score"] = json!(67);
        let mut session = AnalysisSession::new(MockAnalysisService::success(payload));
        session.submit("first").await;
        session.submit("second").await;
        assert_eq!(session.state(), SessionState::Resolved);
        assert_eq!(session.service.call_count(), 2);
        assert_eq!(session.result().unwrap().final_label, Verdict::Real);
    }
}
