mod question_option_repository_impl;
mod question_repository_impl;
mod subject_repository_impl;
mod topic_repository_impl;

pub use question_option_repository_impl::QuestionOptionRepositoryImpl;
pub use question_repository_impl::QuestionRepositoryImpl;
pub use subject_repository_impl::SubjectRepositoryImpl;
pub use topic_repository_impl::TopicRepositoryImpl;
