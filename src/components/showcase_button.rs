use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ShowcaseButtonProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Opens the showcase in a new tab after a short loading affordance.
#[function_component(ShowcaseButton)]
pub fn showcase_button(props: &ShowcaseButtonProps) -> Html {
    let is_loading = use_state(|| false);

    let onclick = {
        let is_loading = is_loading.clone();
        Callback::from(move |_: MouseEvent| {
            is_loading.set(true);
            let is_loading = is_loading.clone();
            let timeout = Timeout::new(config::SHOWCASE_DELAY_MS, move || {
                if let Some(window) = window() {
                    info!("Opening showcase");
                    if let Err(e) = window.open_with_url_and_target(config::SHOWCASE_URL, "_blank") {
                        warn!("Failed to open showcase: {:?}", e);
                    }
                }
                is_loading.set(false);
            });
            timeout.forget();
        })
    };

    html! {
        <button
            class={classes!("showcase-button", props.class.clone())}
            {onclick}
            disabled={*is_loading}
        >
            { if *is_loading { "Loading..." } else { "Visit Showcase ↗" } }
        </button>
    }
}
