//! Home page component.

use yew::prelude::*;

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="page page-home">
            <div>{"Home Page"}</div>
        </section>
    }
}
