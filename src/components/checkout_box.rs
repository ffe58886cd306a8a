use leptos::*;

use crate::models::book::Book;

/// Availability panel with the checkout call-to-action.
/// Rendered twice by the page, once per breakpoint.
#[component]
pub fn CheckoutAndReviewBox(book: Book, mobile: bool) -> impl IntoView {
    let card_class = if mobile {
        "card d-flex mt-5"
    } else {
        "card col-3 container d-flex mb-5"
    };
    let availability = if book.copies_available > 0 {
        view! { <h4 class="text-success">{ "Available" }</h4> }
    } else {
        view! { <h4 class="text-danger">{ "Wait List" }</h4> }
    };

    view! {
        <div class=card_class>
            <div class="card-body container">
                <div class="mt-3">
                    <p>
                        <b>{ format!("{}/{} ", book.copies_available, book.copies) }</b>
                        { "books available" }
                    </p>
                </div>
                <hr/>
                { availability }
                <div class="row">
                    <p class="col-6 lead">{ format!("{} copies", book.copies) }</p>
                    <p class="col-6 lead">{ format!("{} available", book.copies_available) }</p>
                </div>
                <a class="btn btn-success btn-lg" href="#">{ "Sign in" }</a>
                <hr/>
                <p class="mt-3">
                    { "The number can change until placing order has been complete." }
                </p>
                <p>{ "Sign in to be able to leave a review." }</p>
            </div>
        </div>
    }
}
