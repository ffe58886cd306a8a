/// Main application entry point for Libris.
/// Routes the checkout path to the book page, passing the parsed book id
/// in explicitly.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::book_checkout_page::{BookCheckoutPage, ErrorPanel};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/libris.css"/>
        <Title text="Libris"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/checkout/:book_id" view=CheckoutRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="container m-5">
            <h1>{ "Libris" }</h1>
            <p class="lead">{ "Pick a book to view its details and reviews." }</p>
        </div>
    }
}

/// Pulls `:book_id` out of the route. A non-numeric id gets the same error
/// panel a failed fetch would, without issuing any requests.
#[component]
fn CheckoutRoute() -> impl IntoView {
    let params = use_params_map();

    move || {
        let raw = params.with(|p| p.get("book_id").cloned().unwrap_or_default());
        match raw.parse::<i64>() {
            Ok(book_id) => view! { <BookCheckoutPage book_id=book_id /> }.into_view(),
            Err(_) => {
                logging::log!("[ROUTER] invalid book id in path: {:?}", raw);
                view! { <ErrorPanel message="Something went wrong!".to_string() /> }.into_view()
            }
        }
    }
}
