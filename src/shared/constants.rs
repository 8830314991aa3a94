/// Fixed number of records per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category id meaning "no category filter"
pub const ANY_CATEGORY_ID: i32 = 0;

/// Labels seeded into a fresh in-memory store, ids 1..=6 in this order
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// =============================================================================
// ERROR MESSAGES
// =============================================================================

pub const MSG_BAD_REQUEST: &str = "Bad Request";
pub const MSG_NOT_FOUND: &str = "Resource Not Found";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const MSG_UNPROCESSABLE: &str = "Not Processable";
pub const MSG_INTERNAL: &str = "Internal Server Error";
