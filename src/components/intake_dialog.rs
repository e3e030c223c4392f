use log::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::order_form::{Category, OrderField, OrderRequest};
use crate::submission::SubmissionStatus;

#[derive(Properties, PartialEq)]
pub struct IntakeDialogProps {
    pub form: OrderRequest,
    pub status: SubmissionStatus,
    pub on_field: Callback<(OrderField, String)>,
    pub on_category: Callback<Category>,
    pub on_submit: Callback<()>,
    pub on_dismiss: Callback<()>,
}

fn text_input(
    field: OrderField,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
    on_field: &Callback<(OrderField, String)>,
) -> Html {
    let oninput = {
        let on_field = on_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((field, input.value()));
        })
    };

    html! {
        <div class="form-group">
            <label for={field.form_name()}>{field.label()}</label>
            <input
                id={field.form_name()}
                name={field.form_name()}
                type={input_type}
                placeholder={placeholder}
                value={value.to_string()}
                required=true
                {oninput}
            />
        </div>
    }
}

fn text_area(
    field: OrderField,
    placeholder: &'static str,
    value: &str,
    on_field: &Callback<(OrderField, String)>,
) -> Html {
    let oninput = {
        let on_field = on_field.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_field.emit((field, area.value()));
        })
    };

    html! {
        <div class="form-group">
            <label for={field.form_name()}>{field.label()}</label>
            <textarea
                id={field.form_name()}
                name={field.form_name()}
                placeholder={placeholder}
                value={value.to_string()}
                required=true
                {oninput}
            />
        </div>
    }
}

#[function_component(IntakeDialog)]
pub fn intake_dialog(props: &IntakeDialogProps) -> Html {
    let IntakeDialogProps {
        form,
        status,
        on_field,
        on_category,
        on_submit,
        on_dismiss,
    } = props;

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onchange_category = {
        let on_category = on_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Category>() {
                Ok(category) => on_category.emit(category),
                Err(err) => warn!("{}", err),
            }
        })
    };

    let dismiss = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let sending = status.in_flight();

    html! {
        <div class="modal-backdrop" onclick={dismiss.clone()}>
            <div class="modal-content" role="dialog" aria-modal="true" onclick={stop}>
                <button type="button" class="modal-close" aria-label="Close" onclick={dismiss}>
                    {"✕"}
                </button>
                <div class="modal-header">
                    <h2 class="modal-title">{"Get Started"}</h2>
                    <p class="modal-description">
                        {"Fill out the form below to begin your custom 3D printing journey."}
                    </p>
                </div>

                <form class="intake-form" {onsubmit}>
                    { text_input(OrderField::Name, "text", "Enter your full name", &form.name, on_field) }
                    { text_input(OrderField::Phone, "tel", "Enter your phone number", &form.phone, on_field) }
                    { text_area(OrderField::Address, "Enter your full address", &form.address, on_field) }
                    { text_input(OrderField::Email, "email", "Enter your email address", &form.email, on_field) }

                    <div class="form-group">
                        <label for="orderType">{"What would you like?"}</label>
                        <select id="orderType" name="orderType" required=true onchange={onchange_category}>
                            <option value="" disabled=true hidden=true selected={form.category.is_none()}>
                                {"Select an option"}
                            </option>
                            { for Category::ALL.iter().map(|category| html! {
                                <option
                                    value={category.as_str()}
                                    selected={form.category == Some(*category)}
                                >
                                    {category.label()}
                                </option>
                            }) }
                        </select>
                    </div>

                    if form.description_required() {
                        { text_area(
                            OrderField::CustomDescription,
                            "Describe your custom print idea in detail...",
                            &form.custom_description,
                            on_field,
                        ) }
                    }

                    <button type="submit" class="submit-button" disabled={sending}>
                        { if sending { "Submitting..." } else { "Submit" } }
                    </button>

                    if let Some(message) = status.message() {
                        <p class={classes!(
                            "form-status",
                            matches!(status, SubmissionStatus::Failed(_)).then(|| "error")
                        )}>
                            {message.to_string()}
                        </p>
                    }
                </form>
            </div>
        </div>
    }
}
