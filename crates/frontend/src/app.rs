//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Brand, CounterButton};
use crate::pages::{AboutPage, HomePage, NotFoundPage};

const TAGLINE: &str = "A Rust + Yew single-page starter.";

/// Application routes.
#[derive(Debug, Clone, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a path. Paths no route matches resolve to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }
}

/// Route switch function.
fn switch(route: Route) -> Html {
    log::debug!("rendering view for {:?}", route);
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Main application component, bound to the browser's location.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

/// Page layout. Must be rendered inside a router.
///
/// The counter sits outside the [`Switch`], so navigating between
/// views keeps its value.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    html! {
        <div class="app-container">
            <main class="main-content">
                <div class="card shell-card">
                    <Brand tagline={TAGLINE} />
                    <div class="shell-actions">
                        <CounterButton />
                        <NavBar />
                    </div>
                </div>
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

/// Navigation links.
#[function_component(NavBar)]
fn nav_bar() -> Html {
    html! {
        <nav class="nav-links">
            <Link<Route> to={Route::Home}>
                {"Home"}
            </Link<Route>>
            <Link<Route> to={Route::About}>
                {"About"}
            </Link<Route>>
        </nav>
    }
}
