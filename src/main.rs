use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

mod components;
mod config;
mod pages;
mod utils;

use pages::input::InputPage;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/input")]
    Input,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::Input => html! { <InputPage /> },
        Route::NotFound => html! {
            <div style="padding: 6rem 2rem; text-align: center;">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Landing}>
                    {"Back to DelayCast"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("delaycast frontend starting");
    yew::Renderer::<App>::new().render();
}
