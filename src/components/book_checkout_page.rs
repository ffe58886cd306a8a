/// The book checkout page: loads one book and its reviews, then renders
/// cover, description, aggregate star rating, availability box and the
/// latest reviews.
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::checkout_box::CheckoutAndReviewBox;
use crate::components::latest_reviews::LatestReviews;
use crate::components::spinner::SpinnerLoading;
use crate::components::stars_review::StarsReview;
use crate::models::book::Book;
use crate::models::review::Review;
use crate::rating::half_star_average;
use crate::remote::{page_view, PageView, Remote};

#[component]
pub fn BookCheckoutPage(book_id: i64, #[prop(optional)] api: Option<ApiClient>) -> impl IntoView {
    let api = api.unwrap_or_default();

    // One load state per source; neither fetch waits for the other.
    let (book_state, set_book_state) = create_signal(Remote::<Book>::Loading);
    let (reviews_state, set_reviews_state) = create_signal(Remote::<Vec<Review>>::Loading);

    {
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_book(book_id).await {
                Ok(book) => set_book_state.set(Remote::Ready(book)),
                Err(err) => set_book_state.set(Remote::Failed(err.to_string())),
            }
        });
    }
    spawn_local(async move {
        match api.fetch_reviews(book_id).await {
            Ok(reviews) => set_reviews_state.set(Remote::Ready(reviews)),
            Err(err) => set_reviews_state.set(Remote::Failed(err.to_string())),
        }
    });

    move || match page_view(&book_state.get(), &reviews_state.get()) {
        PageView::Loading => view! { <SpinnerLoading /> }.into_view(),
        PageView::Error(message) => view! { <ErrorPanel message=message /> }.into_view(),
        PageView::Content(book, reviews) => {
            view! { <CheckoutContent book=book reviews=reviews /> }.into_view()
        }
    }
}

/// Error panel shown when either fetch failed.
#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="container m-5 error-panel">
            <p>{ message }</p>
        </div>
    }
}

/// The fully-loaded page layout, split out so it can be rendered (and
/// tested) without going through the fetch lifecycle.
#[component]
pub fn CheckoutContent(book: Book, reviews: Vec<Review>) -> impl IntoView {
    let total_stars = half_star_average(
        &reviews.iter().map(|review| review.rating).collect::<Vec<_>>(),
    );

    let cover = {
        let book = book.clone();
        move |desktop: bool| {
            let (width, height) = (226, 349);
            let class = if desktop {
                "col-sm-2 col-md-2"
            } else {
                "d-flex justify-content-center align-items-center"
            };
            view! {
                <div class=class>
                    <img src=book.cover_url() width=width height=height alt="Book"/>
                </div>
            }
        }
    };

    let summary = {
        let book = book.clone();
        move || {
            view! {
                <div class="ml-2">
                    <h2>{ book.title.clone() }</h2>
                    <h5 class="text-primary">{ book.author.clone() }</h5>
                    <p class="lead">{ book.description.clone() }</p>
                    <StarsReview rating=total_stars size=32 />
                </div>
            }
        }
    };

    view! {
        <div>
            // Desktop layout
            <div class="container d-none d-lg-block">
                <div class="row mt-5">
                    { cover(true) }
                    <div class="col-4 col-md-4 container">
                        { summary() }
                    </div>
                    <CheckoutAndReviewBox book=book.clone() mobile=false />
                </div>
                <hr/>
                <LatestReviews reviews=reviews.clone() book_id=book.id mobile=false />
            </div>
            // Mobile layout
            <div class="container d-lg-none mt-5">
                { cover(false) }
                <div class="mt-4">
                    { summary() }
                </div>
                <CheckoutAndReviewBox book=book.clone() mobile=true />
                <hr/>
                <LatestReviews reviews=reviews book_id=book.id mobile=true />
            </div>
        </div>
    }
}
