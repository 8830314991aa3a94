mod quiz_dto;

pub use quiz_dto::{QuizCategoryDto, QuizQuery, QuizRequestDto, QuizResponseDto};
