use leptos::*;

use crate::components::stars_review::StarsReview;
use crate::models::review::Review;

/// The three most recent reviews for a book, with a prompt to leave the
/// first one when there are none yet.
#[component]
pub fn LatestReviews(reviews: Vec<Review>, book_id: i64, mobile: bool) -> impl IntoView {
    let class = if mobile { "mt-3" } else { "row mt-5" };
    let heading_class = if mobile { "" } else { "col-sm-2 col-md-2" };

    let body = if reviews.is_empty() {
        view! {
            <div class="m-3">
                <p class="lead">
                    { "Currently there are no reviews for this book" }
                </p>
                <a
                    class="btn main-color btn-md text-white"
                    href=format!("/reviewlist/{}", book_id)
                >
                    { "Reach out to our community" }
                </a>
            </div>
        }
        .into_view()
    } else {
        reviews
            .iter()
            .take(3)
            .map(|review| {
                view! {
                    <div class="col-sm-8 col-md-8">
                        <h5>{ review.user_email.clone() }</h5>
                        <div class="row">
                            <div class="col">{ review.date.clone() }</div>
                            <div class="col">
                                <StarsReview rating=review.rating size=16 />
                            </div>
                        </div>
                        <div class="mt-2">
                            <p>{ review.review_description.clone().unwrap_or_default() }</p>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_view()
    };

    view! {
        <div class=class>
            <div class=heading_class>
                <h2>{ "Latest Reviews: " }</h2>
            </div>
            <div class="col-sm-10 col-md-10">
                { body }
            </div>
        </div>
    }
}
