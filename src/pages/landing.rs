use chrono::Datelike;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{
    intake_dialog::IntakeDialog, showcase_button::ShowcaseButton, success_dialog::SuccessDialog,
};
use crate::landing_state::{LandingAction, LandingState};
use crate::modal::ModalState;
use crate::order_form::{Category, OrderField};
use crate::submission::{submit, Web3FormsTransport};
use crate::view_state::{use_scroll_tracker, Section};

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Premium Materials",
        body: "Every print uses carefully selected materials for strength, detail and a flawless finish.",
    },
    Feature {
        title: "Fast Turnaround",
        body: "From approved design to finished part in days, not weeks.",
    },
    Feature {
        title: "Custom Designs",
        body: "Bring us an idea or a sketch and our designers will turn it into a printable model.",
    },
];

fn section_classes(base: &'static str, section: Section, active: Section) -> Classes {
    classes!(base, (section == active).then(|| "active"))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let features_ref = use_node_ref();
    let cta_ref = use_node_ref();

    let view = use_scroll_tracker(hero_ref.clone(), features_ref.clone(), cta_ref.clone());
    let state = use_reducer(LandingState::default);

    let open_intake = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LandingAction::OpenIntake))
    };

    let on_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (OrderField, String)| {
            state.dispatch(LandingAction::SetField(field, value))
        })
    };

    let on_category = {
        let state = state.clone();
        Callback::from(move |category: Category| state.dispatch(LandingAction::SetCategory(category)))
    };

    let on_dismiss_intake = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LandingAction::DismissIntake))
    };

    let on_close_success = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LandingAction::DismissSuccess))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if !state.can_submit() {
                // The reducer reports the failing field on the status line.
                debug!("Submit blocked");
                state.dispatch(LandingAction::SubmitStarted);
                return;
            }
            let payload = state.form.build_payload();
            let session = state.session;
            let dispatcher = state.dispatcher();
            state.dispatch(LandingAction::SubmitStarted);

            spawn_local(async move {
                let transport = Web3FormsTransport::default();
                let result = submit(&transport, &payload).await;
                // A no-op once the session has ended or the page is gone.
                dispatcher.dispatch(LandingAction::SubmitFinished { session, result });
            });
        })
    };

    let year = chrono::Local::now().year();
    let header_style = format!("opacity: {:.3};", view.header_opacity);

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            <header class={classes!("top-nav", view.scrolled.then(|| "scrolled"))} style={header_style}>
                <div class="nav-content">
                    <a href="/" class="nav-logo">{"Race3D"}</a>
                    <div class="nav-right">
                        <ShowcaseButton class={classes!("small")} />
                        <button class="primary-button small" onclick={open_intake.clone()}>
                            {"Get Started →"}
                        </button>
                    </div>
                </div>
            </header>

            <main>
                <section ref={hero_ref} class={section_classes("hero", Section::Hero, view.active_section)}>
                    <span class="hero-badge">{"Precision 3D Printing"}</span>
                    <h1>
                        <span>{"Crafted in Precision,"}</span>
                        <span class="accent">{"Printed to Perfection"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Custom 3D printed parts and models, designed with you and delivered fast."}
                    </p>
                    <div class="hero-actions">
                        <button class="primary-button" onclick={open_intake.clone()}>{"Get Started ›"}</button>
                        <ShowcaseButton />
                    </div>
                </section>

                <section ref={features_ref} class={section_classes("features", Section::Features, view.active_section)}>
                    <h2>{"Why Choose Race3D"}</h2>
                    <p>{"Quality craftsmanship, quick delivery and designs made for you."}</p>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="feature-item">
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section ref={cta_ref} class={section_classes("cta", Section::Cta, view.active_section)}>
                    <h2>{"Ready to Start Your Project?"}</h2>
                    <p>{"Contact us today to discuss your custom 3D printing needs."}</p>
                    <button class="primary-button" onclick={open_intake}>{"Start Your Project →"}</button>
                </section>
            </main>

            {
                match state.modal {
                    ModalState::Closed => html! {},
                    ModalState::IntakeOpen => html! {
                        <IntakeDialog
                            form={state.form.clone()}
                            status={state.status.clone()}
                            {on_field}
                            {on_category}
                            {on_submit}
                            on_dismiss={on_dismiss_intake}
                        />
                    },
                    ModalState::SuccessOpen(category) => html! {
                        <SuccessDialog {category} on_close={on_close_success} />
                    },
                }
            }

            <footer class="footer">
                <span>{format!("© {} Race3D. All rights reserved.", year)}</span>
                <div class="footer-links">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Contact"}</a>
                </div>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        background: #FAFAFA;
        color: #333333;
        overflow-x: hidden;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1rem 0;
        backdrop-filter: blur(4px);
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        padding: 0.75rem 0;
        background: rgba(250, 250, 250, 0.8);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        color: #333333;
        font-weight: 500;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        gap: 0.75rem;
    }
    .primary-button, .submit-button {
        background: #D8B4A0;
        color: white;
        border: none;
        border-radius: 6px;
        padding: 0.9rem 2rem;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .primary-button:hover, .submit-button:hover {
        background: #C89F9C;
    }
    .submit-button {
        width: 100%;
    }
    .submit-button:disabled, .showcase-button:disabled {
        opacity: 0.6;
        cursor: default;
    }
    .showcase-button {
        background: transparent;
        color: #A7BED3;
        border: 1px solid #A7BED3;
        border-radius: 6px;
        padding: 0.9rem 2rem;
        cursor: pointer;
    }
    .small {
        padding: 0.4rem 1rem;
        font-size: 0.875rem;
    }
    main {
        flex-grow: 1;
        padding-top: 5rem;
    }
    section {
        padding: 5rem 1rem;
        text-align: center;
        transition: opacity 0.6s ease, transform 0.6s ease;
        opacity: 0.85;
    }
    section.active {
        opacity: 1;
    }
    .hero {
        min-height: 80vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
    }
    .hero h1 span {
        display: block;
    }
    .hero .accent {
        color: #D8B4A0;
    }
    .hero-badge {
        padding: 0.4rem 1rem;
        border-radius: 999px;
        background: #F8F5F2;
        color: #8E7F7F;
        font-size: 0.75rem;
    }
    .hero-subtitle, section p {
        color: #666666;
        font-weight: 300;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
        justify-content: center;
    }
    .features {
        background: #FFFFFF;
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
        gap: 2rem;
        max-width: 1100px;
        margin: 3rem auto 0;
    }
    .feature-item {
        background: #FAFAFA;
        padding: 2rem;
        border-radius: 8px;
        border: 1px solid #F0F0F0;
    }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        background: rgba(0, 0, 0, 0.4);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .modal-content {
        position: relative;
        width: min(450px, 92vw);
        max-height: 92vh;
        overflow-y: auto;
        background: #FFFFFF;
        border: 1px solid #F0F0F0;
        border-radius: 8px;
        padding: 1.5rem;
        text-align: left;
    }
    .modal-close {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        background: none;
        border: none;
        cursor: pointer;
        color: #666666;
    }
    .modal-title {
        font-size: 1.25rem;
        font-weight: 500;
        border-left: 4px solid #D8B4A0;
        padding-left: 0.75rem;
    }
    .modal-description {
        color: #666666;
        font-size: 0.875rem;
    }
    .success-check {
        color: #A7BED3;
        margin-right: 0.5rem;
    }
    .intake-form {
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
    }
    .form-group {
        display: flex;
        flex-direction: column;
        gap: 0.375rem;
    }
    .form-group input, .form-group textarea, .form-group select {
        background: #FAFAFA;
        border: 1px solid #F0F0F0;
        border-radius: 6px;
        padding: 0.6rem;
        color: #333333;
    }
    .form-group input:focus, .form-group textarea:focus, .form-group select:focus {
        border-color: #D8B4A0;
        outline: none;
    }
    .form-status {
        text-align: center;
        font-size: 0.875rem;
        color: #A7BED3;
    }
    .form-status.error {
        color: #C89F9C;
    }
    .footer {
        background: #FFFFFF;
        border-top: 1px solid #F0F0F0;
        padding: 2.5rem 1rem;
        display: flex;
        justify-content: space-between;
        flex-wrap: wrap;
        color: #8E7F7F;
        font-size: 0.875rem;
    }
    .footer-links {
        display: flex;
        gap: 1.5rem;
    }
    .footer-links a {
        color: #8E7F7F;
        text-decoration: none;
    }
"#;
