use log::{debug, info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod motion;
mod components {
    pub mod about;
    pub mod clients;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod projects;
    pub mod scroll_top_button;
    pub mod section;
    pub mod services;
    pub mod stats;
}
mod pages {
    pub mod home;
    pub mod project_details;
}

use components::header::Header;
use config::MotionConfig;
use pages::{
    home::{Home, NotFound},
    project_details::ProjectDetails,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects/:id")]
    Project { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Project { id } => {
            info!("Rendering Project page for {}", id);
            html! { <ProjectDetails id={id} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Puts the window back at the top whenever the path changes. Hash-only
/// navigation keeps the offset so in-page anchors still work.
#[function_component]
fn ScrollToTopOnNavigate() -> Html {
    let path = use_location().map(|location| location.path().to_owned());

    use_effect_with_deps(
        move |path| {
            if let Some(path) = path {
                debug!("Navigated to {}, scrolling to top", path);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        path,
    );

    Html::default()
}

#[function_component]
fn App() -> Html {
    let config = use_state(MotionConfig::load);

    html! {
        <ContextProvider<MotionConfig> context={(*config).clone()}>
            <BrowserRouter>
                <ScrollToTopOnNavigate />
                <Header />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<MotionConfig>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }
    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        warn!("tracing already initialized: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(
            Route::recognize("/projects/3"),
            Some(Route::Project { id: "3".to_string() })
        );
    }

    #[test]
    fn each_project_has_its_own_path() {
        let a = Route::Project { id: "a".into() }.to_path();
        let b = Route::Project { id: "b".into() }.to_path();
        assert_eq!(a, "/projects/a");
        assert_ne!(a, b);
        assert_ne!(Route::Home.to_path(), Route::NotFound.to_path());
    }
}
