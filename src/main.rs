use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod hooks;
mod components {
    pub mod contact;
    pub mod greeting;
    pub mod keyboard;
    pub mod nav;
    pub mod schedule;
    pub mod scroll_top;
    pub mod stats;
    pub mod video;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

// Single page: any path, including /index.html or a sub-path deployment, serves Home.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[not_found]
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            info!("NYUAD Fitness Center loaded! Ready to get fit? 💪");
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_serves_home() {
        for path in ["/", "/index.html", "/nyuad-fitness-site/", "/a/b/c"] {
            assert_eq!(Route::recognize(path), Some(Route::Home), "path {}", path);
        }
    }
}
