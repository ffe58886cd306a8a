/// Per-source load state for data fetched on mount.
///
/// Each fetch tracks its own lifecycle instead of sharing ad hoc
/// loading/error flags; the page combines the two with [`page_view`].
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// What the checkout page should render, derived from both fetch states.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<A, B> {
    Loading,
    Error(String),
    Content(A, B),
}

/// Combines the book and review fetch states into a single view decision.
///
/// A failure on either source wins outright, discarding partial success from
/// the other. Otherwise the spinner stays up until both sources are ready.
pub fn page_view<A: Clone, B: Clone>(book: &Remote<A>, reviews: &Remote<B>) -> PageView<A, B> {
    match (book, reviews) {
        (Remote::Failed(message), _) => PageView::Error(message.clone()),
        (_, Remote::Failed(message)) => PageView::Error(message.clone()),
        (Remote::Loading, _) | (_, Remote::Loading) => PageView::Loading,
        (Remote::Ready(book), Remote::Ready(reviews)) => {
            PageView::Content(book.clone(), reviews.clone())
        }
    }
}
