//! Entity → response projection.

use crate::application::dto::responses::{
    OptionResponse, QuestionResponse, SubjectResponse, TopicResponse,
};
use crate::domain::entities::{AggregateRoot, Question, QuestionOption, Subject, Topic};

pub fn to_subject_response(subject: &Subject) -> SubjectResponse {
    SubjectResponse {
        id: subject.id(),
        name: subject.name().as_str().to_string(),
        topic_count: subject.topics().len(),
        created_at: subject.audit().created_at,
        updated_at: subject.audit().updated_at,
    }
}

pub fn to_topic_response(topic: &Topic) -> TopicResponse {
    TopicResponse {
        id: topic.id(),
        subject_id: topic.subject_id(),
        name: topic.name().as_str().to_string(),
        question_count: topic.questions().len(),
        created_at: topic.audit().created_at,
        updated_at: topic.audit().updated_at,
    }
}

pub fn to_question_response(question: &Question, topic_name: &str) -> QuestionResponse {
    QuestionResponse {
        id: question.id(),
        topic_id: question.topic_id(),
        topic_name: topic_name.to_string(),
        question_text: question.text().as_str().to_string(),
        difficulty_level: question.difficulty().value(),
        max_score: question.max_score().value(),
        generated_by: question.generated_by().display_name().to_string(),
        source_reference: question.source_reference().map(|s| s.as_str().to_string()),
        options: question.options().iter().map(to_option_response).collect(),
        created_at: question.audit().created_at,
        updated_at: question.audit().updated_at,
    }
}

pub fn to_option_response(option: &QuestionOption) -> OptionResponse {
    OptionResponse {
        id: option.id(),
        question_id: option.question_id(),
        option_text: option.text().as_str().to_string(),
        is_correct: option.is_correct(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::GeneratedBy;

    #[test]
    fn question_response_flattens_topic_name() {
        let mut question = Question::new(
            3,
            "What is 2+2=?",
            1,
            1,
            GeneratedBy::Manual,
            Some("https://example.com/q/1"),
        )
        .unwrap();
        question.add_option("4", true).unwrap();

        let response = to_question_response(&question, "Algebra");
        assert_eq!(response.topic_name, "Algebra");
        assert_eq!(response.question_text, "What is 2+2=?");
        assert_eq!(response.generated_by, "Manual");
        assert_eq!(response.options.len(), 1);
        assert!(response.options[0].is_correct);
    }

    #[test]
    fn subject_response_counts_loaded_topics() {
        let mut subject = Subject::new("Math").unwrap();
        subject.add_topic("Algebra").unwrap();
        let response = to_subject_response(&subject);
        assert_eq!(response.topic_count, 1);
        assert_eq!(response.name, "Math");
    }
}
