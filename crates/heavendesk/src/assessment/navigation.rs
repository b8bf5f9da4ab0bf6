//! Quiz progress independent of any rendering layer.
//!
//! [`AnswerSheet`] holds the visitor's selections and [`QuizCursor`] tracks which
//! question is on screen. Transitions are pure: each returns a new cursor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{total_questions, QuestionDefinition, Section, SectionDefinition, CATALOG};
use super::domain::RawAnswers;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("section {section:?} has no question at index {index}")]
    UnknownQuestion { section: Section, index: usize },
    #[error("option {0} is outside the four available choices")]
    UnknownOption(usize),
}

/// Selections keyed by section and question index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: BTreeMap<Section, BTreeMap<usize, u8>>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the chosen option; option `i` is response code `i`.
    pub fn select(
        &mut self,
        section: Section,
        question_index: usize,
        option_index: usize,
    ) -> Result<(), NavigationError> {
        let definition = section.definition();
        let question = definition
            .questions
            .get(question_index)
            .ok_or(NavigationError::UnknownQuestion {
                section,
                index: question_index,
            })?;
        if option_index >= question.options.len() {
            return Err(NavigationError::UnknownOption(option_index));
        }

        self.answers
            .entry(section)
            .or_default()
            .insert(question_index, option_index as u8);
        Ok(())
    }

    pub fn answer(&self, section: Section, question_index: usize) -> Option<u8> {
        self.answers
            .get(&section)
            .and_then(|answers| answers.get(&question_index))
            .copied()
    }

    pub fn is_section_complete(&self, section: Section) -> bool {
        (0..section.definition().questions.len())
            .all(|index| self.answer(section, index).is_some())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.values().map(BTreeMap::len).sum()
    }

    /// Payload for submission: every catalog question, unanswered ones as `0`.
    pub fn to_raw_answers(&self) -> RawAnswers {
        let mut raw = RawAnswers::new();
        for definition in CATALOG.iter() {
            let codes: Vec<i64> = (0..definition.questions.len())
                .map(|index| i64::from(self.answer(definition.section, index).unwrap_or(0)))
                .collect();
            raw.insert(definition.key, &codes);
        }
        raw
    }
}

/// Outcome of pressing "next".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(QuizCursor),
    /// The current section still has unanswered questions.
    Blocked,
    /// Last section is complete; the sheet is ready to submit.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizCursor {
    pub section_index: usize,
    pub question_index: usize,
}

impl QuizCursor {
    pub fn start() -> Self {
        Self::default()
    }

    pub fn section(&self) -> &'static SectionDefinition {
        &CATALOG[self.section_index.min(CATALOG.len() - 1)]
    }

    pub fn question(&self) -> Option<&'static QuestionDefinition> {
        self.section().questions.get(self.question_index)
    }

    pub fn is_first(&self) -> bool {
        self.section_index == 0 && self.question_index == 0
    }

    pub fn is_last_section(&self) -> bool {
        self.section_index + 1 >= CATALOG.len()
    }

    pub fn is_last_question_in_section(&self) -> bool {
        self.question_index + 1 >= self.section().questions.len()
    }

    /// Zero-based position across all sections.
    pub fn global_index(&self) -> usize {
        let before: usize = CATALOG
            .iter()
            .take(self.section_index)
            .map(|section| section.questions.len())
            .sum();
        before + self.question_index
    }

    pub fn progress_percent(&self) -> f32 {
        let total = total_questions();
        if total == 0 {
            return 0.0;
        }
        (self.global_index() + 1) as f32 / total as f32 * 100.0
    }

    /// Moves to the next question within the section after an answer.
    /// The last question of a section waits for an explicit [`QuizCursor::next`].
    pub fn after_answer(self) -> Self {
        if self.is_last_question_in_section() {
            self
        } else {
            Self {
                question_index: self.question_index + 1,
                ..self
            }
        }
    }

    pub fn next(self, sheet: &AnswerSheet) -> Advance {
        if !sheet.is_section_complete(self.section().section) {
            return Advance::Blocked;
        }
        if self.is_last_section() {
            return Advance::Submit;
        }
        Advance::Moved(Self {
            section_index: self.section_index + 1,
            question_index: 0,
        })
    }

    pub fn back(self) -> Self {
        if self.is_first() {
            return self;
        }
        if self.question_index > 0 {
            return Self {
                question_index: self.question_index - 1,
                ..self
            };
        }

        let section_index = self.section_index - 1;
        Self {
            section_index,
            question_index: CATALOG[section_index].questions.len().saturating_sub(1),
        }
    }
}
