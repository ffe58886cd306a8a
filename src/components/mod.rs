pub mod book_checkout_page;
pub mod checkout_box;
pub mod latest_reviews;
pub mod spinner;
pub mod stars_review;
