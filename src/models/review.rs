use serde::{Deserialize, Serialize};

/// A review record as served by the reviews search endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    #[serde(rename = "userEmail")]
    pub user_email: String,          // Reviewer's email address
    pub date: String,                // Display-only date string from the backend
    pub rating: f64,                 // 0-5 star rating
    pub book_id: i64,                // Book this review belongs to
    #[serde(rename = "reviewDescription")]
    pub review_description: Option<String>,
}

/// Spring Data REST envelope around the review collection:
/// `{ "_embedded": { "reviews": [ ... ] } }`.
#[derive(Deserialize, Debug, Clone)]
pub struct ReviewsPage {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedReviews,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EmbeddedReviews {
    pub reviews: Vec<Review>,
}
