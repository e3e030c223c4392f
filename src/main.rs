use log::info;
use yew::prelude::*;

mod config;
mod landing_state;
mod modal;
mod order_form;
mod submission;
mod view_state;

mod components {
    pub mod intake_dialog;
    pub mod showcase_button;
    pub mod success_dialog;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
