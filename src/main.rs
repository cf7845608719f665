use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod util;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod services;
}
mod demo {
    pub mod activation;
    pub mod capability;
    pub mod scene;
    pub mod viewer;
    pub mod visibility;
}

use components::{
    about::About, contact::Contact, footer::Footer, header::Header, hero::Hero,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(Home)]
fn home() -> Html {
    html! {
        <>
            <Header />
            <main>
                <Hero />
                <About />
                <Services />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
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

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
