mod question_dto;

pub use question_dto::{
    CategoryQuestionsDto, CreatedQuestionDto, DeletedQuestionDto, QuestionPageDto,
    QuestionResponseDto, QuestionsPostDto, QuestionsPostResultDto, SearchResultDto,
};
