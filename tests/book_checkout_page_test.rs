use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use libris::components::book_checkout_page::{BookCheckoutPage, CheckoutContent, ErrorPanel};
use libris::components::latest_reviews::LatestReviews;
use libris::components::spinner::SpinnerLoading;
use libris::components::stars_review::StarsReview;
use libris::models::book::Book;
use libris::models::review::Review;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_book() -> Book {
    Book {
        id: 42,
        title: "The Rust Programming Language".to_string(),
        author: "Steve Klabnik".to_string(),
        description: "Learn Rust from the ground up.".to_string(),
        copies: 5,
        copies_available: 3,
        category: "Programming".to_string(),
        img: None,
    }
}

fn sample_review(id: i64, rating: f64) -> Review {
    Review {
        id,
        user_email: format!("reader{}@email.com", id),
        date: "2024-03-01T00:00:00.000+00:00".to_string(),
        rating,
        book_id: 42,
        review_description: Some("Worth the read.".to_string()),
    }
}

fn mount_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn cleanup(container: &web_sys::HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(container).unwrap();
}

#[wasm_bindgen_test]
fn spinner_renders_loading_indicator() {
    let container = mount_container("spinner-test");

    mount_to(container.clone(), || view! { <SpinnerLoading /> });

    assert!(container.inner_html().contains("spinner-border"));
    cleanup(&container);
}

#[wasm_bindgen_test]
fn checkout_page_shows_spinner_while_fetches_are_pending() {
    let container = mount_container("pending-test");

    // Both fetches are still in flight right after mount, so the first
    // render must be the spinner and nothing else.
    mount_to(container.clone(), || {
        view! { <BookCheckoutPage book_id=42 /> }
    });

    let html = container.inner_html();
    assert!(html.contains("spinner-border"));
    assert!(!html.contains("error-panel"));
    assert!(!html.contains("Latest Reviews"));
    cleanup(&container);
}

#[wasm_bindgen_test]
async fn checkout_page_shows_error_panel_after_fetch_failure() {
    use libris::api::ApiClient;

    let container = mount_container("fetch-failure-test");

    // Nothing listens on port 1, so both fetches reject and the page must
    // settle on the error panel.
    mount_to(container.clone(), || {
        view! {
            <BookCheckoutPage
                book_id=42
                api=ApiClient::new("http://127.0.0.1:1")
            />
        }
    });

    // Wait for the failed fetches to resolve
    for _ in 0..50 {
        if container.inner_html().contains("error-panel") {
            break;
        }
        sleep(Duration::from_millis(100)).await;
    }

    let html = container.inner_html();
    assert!(html.contains("error-panel"));
    assert!(html.contains("Something went wrong!"));
    assert!(!html.contains("spinner-border"));
    assert!(!html.contains("Latest Reviews"));
    cleanup(&container);
}

#[wasm_bindgen_test]
async fn error_panel_shows_message_only() {
    let container = mount_container("error-test");

    mount_to(container.clone(), || {
        view! { <ErrorPanel message="Something went wrong!".to_string() /> }
    });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert!(html.contains("Something went wrong!"));
    assert!(!html.contains("spinner-border"));
    cleanup(&container);
}

#[wasm_bindgen_test]
async fn content_renders_book_details_and_aggregate_rating() {
    let container = mount_container("content-test");
    let book = sample_book();
    let reviews = vec![sample_review(1, 4.0), sample_review(2, 5.0)];

    mount_to(container.clone(), move || {
        view! { <CheckoutContent book=book reviews=reviews /> }
    });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert!(html.contains("The Rust Programming Language"));
    assert!(html.contains("Steve Klabnik"));
    assert!(html.contains("Learn Rust from the ground up."));
    // [4, 5] averages to 4.5 stars
    assert!(html.contains("4.5 out of 5 stars"));
    // No cover on the record, so the placeholder is used
    assert!(html.contains("book-placeholder"));
    assert!(!html.contains("spinner-border"));
    cleanup(&container);
}

#[wasm_bindgen_test]
async fn zero_reviews_render_content_with_default_rating() {
    let container = mount_container("empty-reviews-test");
    let book = sample_book();

    mount_to(container.clone(), move || {
        view! { <CheckoutContent book=book reviews=Vec::new() /> }
    });
    sleep(Duration::from_millis(10)).await;

    let html = container.inner_html();
    assert!(html.contains("0.0 out of 5 stars"));
    assert!(html.contains("Currently there are no reviews for this book"));
    assert!(!html.contains("error-panel"));
    cleanup(&container);
}

#[wasm_bindgen_test]
fn stars_review_splits_full_half_and_empty() {
    let container = mount_container("stars-test");

    mount_to(container.clone(), || {
        view! { <StarsReview rating=4.5 size=32 /> }
    });

    let html = container.inner_html();
    assert_eq!(html.matches("star-full").count(), 4);
    assert_eq!(html.matches("star-half").count(), 1);
    assert_eq!(html.matches("star-empty").count(), 0);
    cleanup(&container);
}

#[wasm_bindgen_test]
fn stars_review_whole_rating_has_no_half_star() {
    let container = mount_container("stars-whole-test");

    mount_to(container.clone(), || {
        view! { <StarsReview rating=3.0 size=16 /> }
    });

    let html = container.inner_html();
    assert_eq!(html.matches("star-full").count(), 3);
    assert_eq!(html.matches("star-half").count(), 0);
    assert_eq!(html.matches("star-empty").count(), 2);
    cleanup(&container);
}

#[wasm_bindgen_test]
fn latest_reviews_caps_at_three_entries() {
    let container = mount_container("latest-reviews-test");
    let reviews = vec![
        sample_review(1, 5.0),
        sample_review(2, 4.0),
        sample_review(3, 3.0),
        sample_review(4, 2.0),
    ];

    mount_to(container.clone(), move || {
        view! { <LatestReviews reviews=reviews book_id=42 mobile=false /> }
    });

    let html = container.inner_html();
    assert!(html.contains("reader1@email.com"));
    assert!(html.contains("reader3@email.com"));
    assert!(!html.contains("reader4@email.com"));
    cleanup(&container);
}
