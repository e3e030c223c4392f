use yew::prelude::*;

use crate::order_form::Category;

#[derive(Properties, PartialEq)]
pub struct SuccessDialogProps {
    pub category: Category,
    pub on_close: Callback<()>,
}

fn confirmation_copy(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Custom => (
            "Your custom order request has been submitted successfully!",
            "Our design team will review your request and contact you within 24-48 hours.",
        ),
        Category::Brochure => (
            "Thank you for your interest in our brochure!",
            "We'll send our latest catalog to your email shortly.",
        ),
    }
}

#[function_component(SuccessDialog)]
pub fn success_dialog(props: &SuccessDialogProps) -> Html {
    let (headline, follow_up) = confirmation_copy(props.category);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div
                class="modal-content success"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="modal-header">
                    <h2 class="modal-title">
                        <span class="success-check">{"✓"}</span>
                        {"Thank You!"}
                    </h2>
                    <div class="modal-description">
                        <p>{headline}</p>
                        <p>{follow_up}</p>
                    </div>
                </div>
                <button class="submit-button" onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_order_copy() {
        let (headline, follow_up) = confirmation_copy(Category::Custom);
        assert_eq!(headline, "Your custom order request has been submitted successfully!");
        assert!(follow_up.contains("24-48 hours"));
    }

    #[test]
    fn test_brochure_copy() {
        let (headline, follow_up) = confirmation_copy(Category::Brochure);
        assert_eq!(headline, "Thank you for your interest in our brochure!");
        assert!(follow_up.contains("catalog"));
        assert!(!headline.contains("custom order"));
    }
}
