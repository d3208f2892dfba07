use crate::domain::entities::{AggregateRoot, AuditInfo, QuestionOption};
use crate::domain::events::{
    DomainEvent, OptionAddedToQuestionEvent, OptionRemovedFromQuestionEvent, OptionUpdatedEvent,
    QuestionUpdatedEvent,
};
use crate::domain::value_objects::{
    DifficultyLevel, GeneratedBy, MaxScore, QuestionText, SourceReference,
};
use crate::shared::errors::{AppError, AppResult};

/// Question aggregate root.
///
/// Owns its answer options. Duplicate checks and the correct-answer rule
/// only see options that are loaded; callers must hydrate the full option
/// collection before mutating for those checks to be authoritative.
#[derive(Debug)]
pub struct Question {
    id: i32,
    topic_id: i32,
    text: QuestionText,
    difficulty: DifficultyLevel,
    max_score: MaxScore,
    generated_by: GeneratedBy,
    source_reference: Option<SourceReference>,
    options: Vec<QuestionOption>,
    audit: AuditInfo,
    pending_events: Vec<Box<dyn DomainEvent>>,
}

impl Question {
    /// Validating constructor. The "question added" event is queued by the
    /// owning topic's factory, not here.
    pub fn new(
        topic_id: i32,
        text: &str,
        difficulty: i32,
        max_score: i32,
        generated_by: GeneratedBy,
        source_reference: Option<&str>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: 0,
            topic_id,
            text: QuestionText::new(text)?,
            difficulty: DifficultyLevel::new(difficulty)?,
            max_score: MaxScore::new(max_score)?,
            generated_by,
            source_reference: source_reference.map(SourceReference::new).transpose()?,
            options: Vec::new(),
            audit: AuditInfo::new(),
            pending_events: Vec::new(),
        })
    }

    /// Rebuild from persistence without queueing events.
    pub fn hydrate(
        id: i32,
        topic_id: i32,
        text: QuestionText,
        difficulty: DifficultyLevel,
        max_score: MaxScore,
        generated_by: GeneratedBy,
        source_reference: Option<SourceReference>,
        options: Vec<QuestionOption>,
        audit: AuditInfo,
    ) -> Self {
        Self {
            id,
            topic_id,
            text,
            difficulty,
            max_score,
            generated_by,
            source_reference,
            options,
            audit,
            pending_events: Vec::new(),
        }
    }

    pub fn topic_id(&self) -> i32 {
        self.topic_id
    }

    pub fn text(&self) -> &QuestionText {
        &self.text
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn max_score(&self) -> MaxScore {
        self.max_score
    }

    pub fn generated_by(&self) -> GeneratedBy {
        self.generated_by
    }

    pub fn source_reference(&self) -> Option<&SourceReference> {
        self.source_reference.as_ref()
    }

    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    /// Replace content and grading attributes, revalidating everything.
    pub fn update(
        &mut self,
        text: &str,
        difficulty: i32,
        max_score: i32,
        generated_by: GeneratedBy,
        source_reference: Option<&str>,
    ) -> AppResult<()> {
        let mut updated_fields = Vec::new();
        let new_text = QuestionText::new(text)?;
        let new_difficulty = DifficultyLevel::new(difficulty)?;
        let new_max_score = MaxScore::new(max_score)?;
        let new_source = source_reference.map(SourceReference::new).transpose()?;

        if new_text != self.text {
            updated_fields.push("question_text".to_string());
        }
        if new_difficulty != self.difficulty {
            updated_fields.push("difficulty_level".to_string());
        }
        if new_max_score != self.max_score {
            updated_fields.push("max_score".to_string());
        }
        if generated_by != self.generated_by {
            updated_fields.push("generated_by".to_string());
        }
        if new_source != self.source_reference {
            updated_fields.push("source_reference".to_string());
        }

        self.text = new_text;
        self.difficulty = new_difficulty;
        self.max_score = new_max_score;
        self.generated_by = generated_by;
        self.source_reference = new_source;

        self.pending_events
            .push(Box::new(QuestionUpdatedEvent::new(self.id, updated_fields)));
        Ok(())
    }

    /// Append a new option and queue the event. Multiple options may be
    /// marked correct.
    pub fn add_option(&mut self, text: &str, is_correct: bool) -> AppResult<&QuestionOption> {
        let option = QuestionOption::new(self.id, text, is_correct)?;
        self.options.push(option);

        self.pending_events
            .push(Box::new(OptionAddedToQuestionEvent::new(
                self.id, is_correct,
            )));

        let index = self.options.len() - 1;
        Ok(&self.options[index])
    }

    /// Update an option already present in the loaded collection.
    pub fn update_option(
        &mut self,
        option_id: i32,
        text: &str,
        is_correct: bool,
    ) -> AppResult<&QuestionOption> {
        let index = self
            .options
            .iter()
            .position(|o| o.id() == option_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Option with id {} not loaded on question", option_id))
            })?;
        self.options[index].update(text, is_correct)?;

        self.pending_events
            .push(Box::new(OptionUpdatedEvent::new(self.id, option_id)));

        Ok(&self.options[index])
    }

    /// Remove an option; fails if it is not in the loaded collection.
    pub fn remove_option(&mut self, option_id: i32) -> AppResult<QuestionOption> {
        let index = self
            .options
            .iter()
            .position(|o| o.id() == option_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Option with id {} not loaded on question", option_id))
            })?;
        let removed = self.options.remove(index);

        self.pending_events
            .push(Box::new(OptionRemovedFromQuestionEvent::new(
                self.id, option_id,
            )));

        Ok(removed)
    }

    /// A question is only answerable once at least one option is correct.
    /// Never invoked automatically; callers decide when a question must be
    /// final.
    pub fn validate_has_correct_answer(&self) -> AppResult<()> {
        if self.options.iter().any(|o| o.is_correct()) {
            Ok(())
        } else {
            Err(AppError::BusinessRule(
                "Question must have at least one correct option".to_string(),
            ))
        }
    }

    pub fn pending_events(&self) -> &[Box<dyn DomainEvent>] {
        &self.pending_events
    }

    pub fn clear_events(&mut self) {
        self.pending_events.clear();
    }
}

impl AggregateRoot for Question {
    fn id(&self) -> i32 {
        self.id
    }

    fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit
    }

    fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.pending_events)
    }

    fn children_mut(&mut self) -> Vec<&mut dyn AggregateRoot> {
        self.options
            .iter_mut()
            .map(|o| o as &mut dyn AggregateRoot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(7, "What is 2+2=?", 1, 1, GeneratedBy::Manual, None).unwrap()
    }

    #[test]
    fn constructor_validates_ranges() {
        assert!(Question::new(7, "ok?", 0, 1, GeneratedBy::Ai, None).is_err());
        assert!(Question::new(7, "ok?", 1, 11, GeneratedBy::Ai, None).is_err());
        assert!(Question::new(7, "ok?", 5, 10, GeneratedBy::Ai, None).is_ok());
    }

    #[test]
    fn constructor_validates_source_reference() {
        assert!(matches!(
            Question::new(7, "ok?", 1, 1, GeneratedBy::Ai, Some("not-a-url")),
            Err(AppError::DomainValidation(_))
        ));
        let q =
            Question::new(7, "ok?", 1, 1, GeneratedBy::Ai, Some("https://example.com/q/1")).unwrap();
        assert_eq!(q.source_reference().unwrap().as_str(), "https://example.com/q/1");
    }

    #[test]
    fn correct_answer_rule_is_explicit() {
        let mut q = question();
        assert!(matches!(
            q.validate_has_correct_answer(),
            Err(AppError::BusinessRule(_))
        ));

        q.add_option("3", false).unwrap();
        assert!(q.validate_has_correct_answer().is_err());

        q.add_option("4", true).unwrap();
        assert!(q.validate_has_correct_answer().is_ok());
    }

    #[test]
    fn add_option_queues_event() {
        let mut q = question();
        q.add_option("4", true).unwrap();
        assert_eq!(q.pending_events().len(), 1);
        assert_eq!(q.pending_events()[0].event_type(), "OptionAddedToQuestion");
    }

    #[test]
    fn remove_missing_option_fails() {
        let mut q = question();
        assert!(matches!(
            q.remove_option(42),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn update_tracks_changed_fields() {
        let mut q = question();
        q.update("What is 3+3=?", 2, 4, GeneratedBy::Manual, None).unwrap();
        assert_eq!(q.text().as_str(), "What is 3+3=?");
        assert_eq!(q.difficulty().value(), 2);
        assert_eq!(q.pending_events().len(), 1);
        assert_eq!(q.pending_events()[0].event_type(), "QuestionUpdated");
    }

    #[test]
    fn take_events_drains_queue() {
        let mut q = question();
        q.add_option("4", true).unwrap();
        let events = q.take_events();
        assert_eq!(events.len(), 1);
        assert!(q.pending_events().is_empty());
    }
}
