use leptos::*;

use crate::rating::format_stars;

/// Star row for a 0-5 rating in half-star steps.
/// `size` is the icon size in pixels.
#[component]
pub fn StarsReview(rating: f64, size: u32) -> impl IntoView {
    // Clamp so a bad backend value can't underflow the empty-star count.
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as u32;
    let half = u32::from(rating - rating.floor() >= 0.5);
    let empty = 5 - full - half;

    let star = move |class: &'static str, glyph: &'static str| {
        view! {
            <span
                class=format!("star {}", class)
                style=format!("font-size: {}px", size)
            >
                { glyph }
            </span>
        }
    };

    view! {
        <div class="stars-review" aria-label=format!("{} out of 5 stars", format_stars(rating))>
            { (0..full).map(|_| star("star-full", "\u{2605}")).collect::<Vec<_>>() }
            { (0..half).map(|_| star("star-half", "\u{2bea}")).collect::<Vec<_>>() }
            { (0..empty).map(|_| star("star-empty", "\u{2606}")).collect::<Vec<_>>() }
        </div>
    }
}
