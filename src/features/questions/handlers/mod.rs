pub mod question_handler;

pub use question_handler::{
    __path_delete_question, __path_list_category_questions, __path_list_questions,
    __path_submit_question, delete_question, list_category_questions, list_questions,
    submit_question,
};
