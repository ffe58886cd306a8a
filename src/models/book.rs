use serde::{Deserialize, Serialize};

/// A book record as served by `GET /api/books/{bookId}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,                     // Backend-assigned identifier
    pub title: String,
    pub author: String,
    pub description: String,
    pub copies: i32,                 // Total copies owned by the library
    #[serde(rename = "copiesAvailable")]
    pub copies_available: i32,       // Copies not currently checked out
    pub category: String,
    pub img: Option<String>,         // Cover image URL or data URI, if any
}

impl Book {
    /// URL of the cover to display, falling back to the bundled placeholder
    /// when the record carries no image.
    pub fn cover_url(&self) -> String {
        match &self.img {
            Some(img) if !img.is_empty() => img.clone(),
            _ => "/assets/images/book-placeholder.png".to_string(),
        }
    }
}
