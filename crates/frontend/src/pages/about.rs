//! About page component.

use yew::prelude::*;

/// About page component.
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <section class="page page-about">
            <div>{"About Page"}</div>
        </section>
    }
}
