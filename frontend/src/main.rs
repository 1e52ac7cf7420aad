use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod autolink;
mod config;
mod content;
mod scroll;
mod section;
mod state;
mod timeline;

mod components {
    pub mod bot;
    pub mod feature_grid;
    pub mod flip_card;
    pub mod hero;
    pub mod nav;
    pub mod origin;
    pub mod timeline;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        // Single page site: unknown paths still get the announcement.
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(LOG_LEVEL).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
