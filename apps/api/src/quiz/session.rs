//! Quiz session state machine.
//!
//! A `QuizSession` is an immutable value: every transition borrows the current
//! session and returns a new one, leaving the original untouched on error.
//!
//! NotStarted → InProgress(1) → IntermediateResults → InProgress(2) → FinalResults
//! Any state → NotStarted on retake.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::models::QuizQuestion;
use crate::catalog::tags::Tag;
use crate::catalog::Catalog;
use crate::quiz::engine::{evaluate, QuizResult, ResultStage};
use crate::quiz::matching::ProfileMatcher;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizPhase {
    NotStarted,
    InProgress { stage: u8 },
    IntermediateResults,
    FinalResults,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizPhase::NotStarted => f.write_str("not started"),
            QuizPhase::InProgress { stage } => write!(f, "in progress (stage {stage})"),
            QuizPhase::IntermediateResults => f.write_str("showing intermediate results"),
            QuizPhase::FinalResults => f.write_str("showing final results"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizAction {
    Start,
    Answer,
    Back,
    Continue,
    Results,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizAction::Start => "start",
            QuizAction::Answer => "answer",
            QuizAction::Back => "go back",
            QuizAction::Continue => "continue to stage 2",
            QuizAction::Results => "view results",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("cannot {action} while the quiz is {phase}")]
    InvalidTransition { phase: QuizPhase, action: QuizAction },

    #[error("question {expected} is the current question, got an answer for {got}")]
    WrongQuestion { expected: u32, got: u32 },

    #[error("question {question_id} has no option '{option_id}'")]
    UnknownOption { question_id: u32, option_id: String },

    #[error("quiz session {0} not found")]
    SessionNotFound(Uuid),
}

/// The option a user picked, with its tags copied at answer time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedAnswer {
    pub question_id: u32,
    pub option_id: String,
    pub stage: u8,
    pub tags: Vec<Tag>,
}

impl AsRef<[Tag]> for RecordedAnswer {
    fn as_ref(&self) -> &[Tag] {
        &self.tags
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub phase: QuizPhase,
    /// Index into `Catalog::ordered_questions`.
    pub cursor: usize,
    /// One slot per question, in quiz order.
    pub answers: Vec<Option<RecordedAnswer>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(catalog: &Catalog) -> Self {
        let now = Utc::now();
        QuizSession {
            id: Uuid::new_v4(),
            phase: QuizPhase::NotStarted,
            cursor: 0,
            answers: vec![None; catalog.questions.len()],
            created_at: now,
            updated_at: now,
        }
    }

    fn next(&self, phase: QuizPhase, cursor: usize) -> Self {
        QuizSession {
            phase,
            cursor,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    fn invalid(&self, action: QuizAction) -> QuizError {
        QuizError::InvalidTransition {
            phase: self.phase,
            action,
        }
    }

    pub fn start(&self) -> Result<Self, QuizError> {
        match self.phase {
            QuizPhase::NotStarted => Ok(self.next(QuizPhase::InProgress { stage: 1 }, 0)),
            _ => Err(self.invalid(QuizAction::Start)),
        }
    }

    /// Records an answer for the current question and advances. Answering the
    /// last question of a stage moves to that stage's results.
    pub fn answer(
        &self,
        catalog: &Catalog,
        question_id: u32,
        option_id: &str,
    ) -> Result<Self, QuizError> {
        let QuizPhase::InProgress { stage } = self.phase else {
            return Err(self.invalid(QuizAction::Answer));
        };
        let ordered = catalog.ordered_questions();
        let current = ordered
            .get(self.cursor)
            .ok_or_else(|| self.invalid(QuizAction::Answer))?;
        if current.id != question_id {
            return Err(QuizError::WrongQuestion {
                expected: current.id,
                got: question_id,
            });
        }
        let option = current
            .option(option_id)
            .ok_or_else(|| QuizError::UnknownOption {
                question_id,
                option_id: option_id.to_string(),
            })?;

        let mut updated = self.clone();
        if let Some(slot) = updated.answers.get_mut(self.cursor) {
            *slot = Some(RecordedAnswer {
                question_id,
                option_id: option.id.clone(),
                stage,
                tags: option.tags.clone(),
            });
        }

        let following = self.cursor + 1;
        let stage_continues = ordered
            .get(following)
            .map(|q| q.stage == stage)
            .unwrap_or(false);

        Ok(if stage_continues {
            updated.next(QuizPhase::InProgress { stage }, following)
        } else if stage == 1 {
            updated.next(QuizPhase::IntermediateResults, self.cursor)
        } else {
            updated.next(QuizPhase::FinalResults, self.cursor)
        })
    }

    /// Steps back one question, crossing into stage 1 if needed. From a results
    /// screen it returns to the question that produced it. Answers are kept
    /// until overwritten.
    pub fn back(&self, catalog: &Catalog) -> Result<Self, QuizError> {
        let ordered = catalog.ordered_questions();
        let stage_at = |cursor: usize| ordered.get(cursor).map(|q| q.stage).unwrap_or(1);

        match self.phase {
            QuizPhase::NotStarted => Err(self.invalid(QuizAction::Back)),
            QuizPhase::InProgress { stage } if self.cursor == 0 => {
                Ok(self.next(QuizPhase::InProgress { stage }, 0))
            }
            QuizPhase::InProgress { .. } => {
                let cursor = self.cursor - 1;
                Ok(self.next(
                    QuizPhase::InProgress {
                        stage: stage_at(cursor),
                    },
                    cursor,
                ))
            }
            QuizPhase::IntermediateResults | QuizPhase::FinalResults => Ok(self.next(
                QuizPhase::InProgress {
                    stage: stage_at(self.cursor),
                },
                self.cursor,
            )),
        }
    }

    pub fn continue_to_stage_two(&self, catalog: &Catalog) -> Result<Self, QuizError> {
        if self.phase != QuizPhase::IntermediateResults {
            return Err(self.invalid(QuizAction::Continue));
        }
        let first_stage_two = catalog
            .ordered_questions()
            .iter()
            .position(|q| q.stage == 2)
            .ok_or_else(|| self.invalid(QuizAction::Continue))?;
        Ok(self.next(QuizPhase::InProgress { stage: 2 }, first_stage_two))
    }

    /// Discards every answer. Allowed from any state.
    pub fn retake(&self) -> Self {
        QuizSession {
            answers: vec![None; self.answers.len()],
            ..self.next(QuizPhase::NotStarted, 0)
        }
    }

    pub fn current_question<'a>(&self, catalog: &'a Catalog) -> Option<&'a QuizQuestion> {
        match self.phase {
            QuizPhase::InProgress { .. } => catalog.ordered_questions().get(self.cursor).copied(),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<&RecordedAnswer> {
        match self.phase {
            QuizPhase::InProgress { .. } => self.answers.get(self.cursor)?.as_ref(),
            _ => None,
        }
    }

    /// Recorded answers from stages up to and including `through_stage`.
    pub fn answers_through(&self, through_stage: u8) -> Vec<&RecordedAnswer> {
        self.answers
            .iter()
            .flatten()
            .filter(|a| a.stage <= through_stage)
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().flatten().count()
    }

    /// Intermediate results use stage 1 answers only; final results recompute
    /// over every answer.
    pub fn results(
        &self,
        catalog: &Catalog,
        matcher: &dyn ProfileMatcher,
        top_n: usize,
    ) -> Result<QuizResult, QuizError> {
        let (through_stage, stage) = match self.phase {
            QuizPhase::IntermediateResults => (1, ResultStage::Intermediate),
            QuizPhase::FinalResults => (2, ResultStage::Final),
            _ => return Err(self.invalid(QuizAction::Results)),
        };
        let answers: Vec<&[Tag]> = self
            .answers_through(through_stage)
            .into_iter()
            .map(|a| a.tags.as_slice())
            .collect();
        Ok(evaluate(&answers, catalog, matcher, top_n, stage))
    }
}
