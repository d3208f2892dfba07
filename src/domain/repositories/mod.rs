mod question_option_repository;
mod question_repository;
mod repository;
mod subject_repository;
mod topic_repository;

pub use question_option_repository::QuestionOptionRepository;
pub use question_repository::QuestionRepository;
pub use repository::Repository;
pub use subject_repository::SubjectRepository;
pub use topic_repository::TopicRepository;
