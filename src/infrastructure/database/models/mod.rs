mod question_model;
mod question_option_model;
mod subject_model;
mod topic_model;

pub use question_model::{NewQuestion, QuestionChangeset, QuestionModel};
pub use question_option_model::{
    NewQuestionOptionRow, QuestionOptionChangeset, QuestionOptionModel,
};
pub use subject_model::{NewSubject, SubjectChangeset, SubjectModel};
pub use topic_model::{NewTopic, TopicChangeset, TopicModel};
