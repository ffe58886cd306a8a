use leptos::*;

/// Centered loading indicator, shown while either fetch is pending.
#[component]
pub fn SpinnerLoading() -> impl IntoView {
    view! {
        <div class="container m-5 d-flex justify-content-center">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{ "Loading..." }</span>
            </div>
        </div>
    }
}
