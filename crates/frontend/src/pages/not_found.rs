//! Fallback page for paths no route matches.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Not-found page component, with a link back home.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="card page page-not-found">
            <h1>{"404 - Page Not Found"}</h1>
            <p>{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-secondary">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
