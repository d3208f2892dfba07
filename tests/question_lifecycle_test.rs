//! Drives the whole content hierarchy at the domain layer: subject →
//! topic → question → option, plus audit stamping and event draining.

use chrono::Utc;

use quizbank::application::ports::unit_of_work::stamp_and_drain;
use quizbank::domain::entities::{AggregateRoot, Subject};
use quizbank::domain::value_objects::{
    DifficultyLevel, GeneratedBy, MaxScore, SourceReference, SubjectName,
};
use quizbank::AppError;

#[test]
fn build_and_finalize_a_question() {
    let mut subject = Subject::new("Math").unwrap();
    subject.add_topic("Algebra").unwrap();

    let topic = subject.topic_mut("Algebra").unwrap();
    topic
        .add_question(
            "2+2=?",
            1,
            1,
            GeneratedBy::parse("manual").unwrap(),
            None,
        )
        .unwrap();

    let question = topic.question_mut("2+2=?").unwrap();

    // Not answerable yet.
    assert!(matches!(
        question.validate_has_correct_answer(),
        Err(AppError::BusinessRule(_))
    ));

    question.add_option("4", true).unwrap();
    question.validate_has_correct_answer().unwrap();
}

#[test]
fn duplicate_checks_are_case_insensitive_at_every_level() {
    let mut subject = Subject::new("Math").unwrap();
    subject.add_topic("Algebra").unwrap();
    assert!(matches!(
        subject.add_topic("aLgEbRa"),
        Err(AppError::Duplicate(_))
    ));

    let topic = subject.topic_mut("Algebra").unwrap();
    topic
        .add_question("What is X?", 2, 5, GeneratedBy::Ai, None)
        .unwrap();
    assert!(matches!(
        topic.add_question("WHAT IS x?", 2, 5, GeneratedBy::Ai, None),
        Err(AppError::Duplicate(_))
    ));
}

#[test]
fn removal_requires_a_loaded_child() {
    let mut subject = Subject::new("Math").unwrap();
    assert!(matches!(
        subject.remove_topic(1),
        Err(AppError::NotFound(_))
    ));

    subject.add_topic("Algebra").unwrap();
    let topic = subject.topic_mut("Algebra").unwrap();
    assert!(matches!(
        topic.remove_question(1),
        Err(AppError::NotFound(_))
    ));

    // Unsaved children carry id 0; removing by that id works on the
    // loaded collection.
    let removed = subject.remove_topic(0).unwrap();
    assert_eq!(removed.name().as_str(), "Algebra");
    assert!(subject.topics().is_empty());
}

#[test]
fn audit_stamping_and_event_drain_cover_the_hierarchy() {
    let mut subject = Subject::new("Math").unwrap();
    subject.add_topic("Algebra").unwrap();
    {
        let topic = subject.topic_mut("Algebra").unwrap();
        topic
            .add_question(
                "2+2=?",
                1,
                1,
                GeneratedBy::Manual,
                Some("https://example.com/q/1"),
            )
            .unwrap();
        let question = topic.question_mut("2+2=?").unwrap();
        question.add_option("4", true).unwrap();
    }

    let events = stamp_and_drain(&mut [&mut subject], "editor", Utc::now());
    let types: Vec<&str> = events.iter().map(|e| e.event_type()).collect();
    assert_eq!(
        types,
        vec![
            "SubjectCreated",
            "TopicAddedToSubject",
            "QuestionAddedToTopic",
            "OptionAddedToQuestion",
        ]
    );

    // Every node down to the option carries the actor's created-stamp.
    assert_eq!(subject.audit().created_by, "editor");
    let topic = &subject.topics()[0];
    assert_eq!(topic.audit().created_by, "editor");
    let question = &topic.questions()[0];
    assert_eq!(question.audit().created_by, "editor");
    assert_eq!(question.options()[0].audit().created_by, "editor");

    // Queues are empty afterwards.
    assert!(subject.pending_events().is_empty());
    assert!(topic.pending_events().is_empty());
    assert!(question.pending_events().is_empty());
}

#[test]
fn value_object_boundaries_hold() {
    assert!(DifficultyLevel::new(1).is_ok());
    assert!(DifficultyLevel::new(5).is_ok());
    assert!(DifficultyLevel::new(0).is_err());
    assert!(DifficultyLevel::new(6).is_err());

    assert!(MaxScore::new(1).is_ok());
    assert!(MaxScore::new(10).is_ok());
    assert!(MaxScore::new(0).is_err());
    assert!(MaxScore::new(11).is_err());

    assert!(SourceReference::new("https://example.com/q/1").is_ok());
    assert!(matches!(
        SourceReference::new("not-a-url"),
        Err(AppError::DomainValidation(_))
    ));

    let name = SubjectName::new("Linear Algebra 2").unwrap();
    assert_eq!(name.as_str(), "Linear Algebra 2");
    assert!(SubjectName::new("Algebra!").is_err());
}
