use crate::domain::entities::{AggregateRoot, AuditInfo};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::OptionText;
use crate::shared::errors::AppResult;

/// A single answer option. Owned by its question; option mutations flow
/// through `Question` so the owning aggregate can queue the events.
#[derive(Debug)]
pub struct QuestionOption {
    id: i32,
    question_id: i32,
    text: OptionText,
    is_correct: bool,
    audit: AuditInfo,
}

impl QuestionOption {
    pub fn new(question_id: i32, text: &str, is_correct: bool) -> AppResult<Self> {
        Ok(Self {
            id: 0,
            question_id,
            text: OptionText::new(text)?,
            is_correct,
            audit: AuditInfo::new(),
        })
    }

    /// Rebuild from persistence without queueing events.
    pub fn hydrate(
        id: i32,
        question_id: i32,
        text: OptionText,
        is_correct: bool,
        audit: AuditInfo,
    ) -> Self {
        Self {
            id,
            question_id,
            text,
            is_correct,
            audit,
        }
    }

    pub fn question_id(&self) -> i32 {
        self.question_id
    }

    pub fn text(&self) -> &OptionText {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Replace text and correctness, revalidating the text.
    pub fn update(&mut self, text: &str, is_correct: bool) -> AppResult<()> {
        self.text = OptionText::new(text)?;
        self.is_correct = is_correct;
        Ok(())
    }
}

impl AggregateRoot for QuestionOption {
    fn id(&self) -> i32 {
        self.id
    }

    fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit
    }

    // Options never queue their own events; the owning question does.
    fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_option_validates_text() {
        assert!(QuestionOption::new(1, "", true).is_err());
        let option = QuestionOption::new(1, "4", true).unwrap();
        assert_eq!(option.text().as_str(), "4");
        assert!(option.is_correct());
        assert_eq!(option.id(), 0);
    }

    #[test]
    fn update_revalidates() {
        let mut option = QuestionOption::new(1, "4", true).unwrap();
        assert!(option.update("", false).is_err());
        option.update("5", false).unwrap();
        assert_eq!(option.text().as_str(), "5");
        assert!(!option.is_correct());
    }
}
