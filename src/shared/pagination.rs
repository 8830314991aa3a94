use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Zero-based offset of the first item on `page`
///
/// Pages below 1 are treated as page 1.
pub fn page_offset(page: i64, page_size: usize) -> usize {
    let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    (page - 1).saturating_mul(page_size)
}

/// Slice `[(page-1)*size, page*size)` of `items`, clipped to its length
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: usize) -> Vec<T> {
    items
        .into_iter()
        .skip(page_offset(page, page_size))
        .take(page_size)
        .collect()
}

/// `paginate` with the fixed page size
pub fn paginate_default<T>(items: Vec<T>, page: i64) -> Vec<T> {
    paginate(items, page, QUESTIONS_PER_PAGE)
}
