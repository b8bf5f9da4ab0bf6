//! Automation readiness assessment: question catalog, scoring, storage and
//! delivery ports, and the HTTP router.
//!
//! Scoring is pure ([`ScoringEngine`]); persistence and e-mail sit behind the
//! [`ResultStore`] and [`Notifier`] traits so the service can be exercised with
//! in-memory adapters.

pub mod catalog;
pub mod domain;
pub mod navigation;
pub mod notify;
pub mod preferences;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{QuestionDefinition, Section, SectionDefinition, CATALOG};
pub use domain::{Lead, RawAnswers, ResultId, ScoreReport, SectionScore};
pub use navigation::{Advance, AnswerSheet, NavigationError, QuizCursor};
pub use notify::{ResendConfig, ResendNotifier, TracingNotifier};
pub use preferences::{CtaPopupGate, InMemoryPreferences, PreferenceStore};
pub use repository::{
    AssessmentRecord, Audience, NewAssessment, Notice, Notifier, NotifyError, ResultStore,
    StoreError,
};
pub use router::assessment_router;
pub use scoring::{compute_section_score, ScoringConfig, ScoringEngine, SectionTally, TierBand};
pub use service::{
    AssessmentService, AssessmentServiceError, AssessmentSubmission, DeliverySettings,
    SubmissionError, SubmissionReceipt,
};
