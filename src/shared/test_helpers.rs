#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use fake::{faker::lorem::en::Sentence, Fake};

#[cfg(test)]
use crate::core::app::{api_router, AppServices};
#[cfg(test)]
use crate::features::categories::models::Category;
#[cfg(test)]
use crate::features::questions::models::Question;
#[cfg(test)]
use crate::features::quizzes::SeededPicker;
#[cfg(test)]
use crate::modules::storage::InMemoryStore;

#[cfg(test)]
fn question(id: i32, text: &str, answer: &str, category: i32, difficulty: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

#[cfg(test)]
fn two_categories() -> Vec<Category> {
    vec![Category::new(1, "Science"), Category::new(2, "Art")]
}

/// Categories {1: Science, 2: Art}; questions 1 and 2 in Science, 3 in Art
#[cfg(test)]
pub fn seeded_store() -> InMemoryStore {
    InMemoryStore::with_data(
        two_categories(),
        vec![
            question(
                1,
                "What is the heaviest organ in the human body?",
                "The Liver",
                1,
                4,
            ),
            question(2, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
            question(3, "Who painted the Mona Lisa?", "Leonardo da Vinci", 2, 1),
        ],
    )
}

/// `count` generated questions with ids 1..=count, alternating categories
#[cfg(test)]
pub fn bulk_store(count: i32) -> InMemoryStore {
    let questions = (1..=count)
        .map(|id| {
            let text: String = Sentence(3..8).fake();
            let answer: String = Sentence(1..3).fake();
            question(id, &text, &answer, 1 + id % 2, 1 + id % 5)
        })
        .collect();
    InMemoryStore::with_data(two_categories(), questions)
}

/// Full API router over `store` with a fixed quiz seed
#[cfg(test)]
pub fn test_server(store: InMemoryStore) -> TestServer {
    let store = Arc::new(store);
    let services = AppServices::new(store.clone(), store, Arc::new(SeededPicker::new(0)));
    TestServer::new(api_router(&services)).expect("test server")
}
