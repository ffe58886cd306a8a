/// Client for the book-library backend REST API.
///
/// The page issues two independent GETs per view: the book record and the
/// review collection for that book. Both go through [`ApiClient`] so the base
/// URL is passed in explicitly rather than read from the window location.
use gloo_net::http::Request;
use leptos::logging::log;

use crate::error::FetchError;
use crate::models::book::Book;
use crate::models::review::{Review, ReviewsPage};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new("http://localhost:8081")
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// GET `{base}/api/books/{bookId}`.
    pub async fn fetch_book(&self, book_id: i64) -> Result<Book, FetchError> {
        let url = format!("{}/api/books/{}", self.base_url, book_id);
        let response = Request::get(&url).send().await.map_err(|err| {
            log!("[API] book fetch failed: {} -> {}", url, err);
            FetchError::Network(err.to_string())
        })?;
        if !response.ok() {
            log!("[API] book fetch failed: {} -> {}", url, response.status());
            return Err(FetchError::Http {
                status: response.status(),
            });
        }
        response.json::<Book>().await.map_err(|err| {
            log!("[API] book decode failed: {} -> {}", url, err);
            FetchError::Network(err.to_string())
        })
    }

    /// GET `{base}/api/reviews/search/findByBookId?bookId={bookId}`,
    /// unwrapping the `_embedded.reviews` collection.
    pub async fn fetch_reviews(&self, book_id: i64) -> Result<Vec<Review>, FetchError> {
        let url = format!(
            "{}/api/reviews/search/findByBookId?bookId={}",
            self.base_url, book_id
        );
        let response = Request::get(&url).send().await.map_err(|err| {
            log!("[API] reviews fetch failed: {} -> {}", url, err);
            FetchError::Network(err.to_string())
        })?;
        if !response.ok() {
            log!("[API] reviews fetch failed: {} -> {}", url, response.status());
            return Err(FetchError::Http {
                status: response.status(),
            });
        }
        let page = response.json::<ReviewsPage>().await.map_err(|err| {
            log!("[API] reviews decode failed: {} -> {}", url, err);
            FetchError::Network(err.to_string())
        })?;
        Ok(page.embedded.reviews)
    }
}
