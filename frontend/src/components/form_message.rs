use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub message: Option<String>,
    #[prop_or_default]
    pub success: bool,
}

/// Inline error (or success) text above a form
#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    match props.message.as_ref() {
        Some(message) => {
            let class = if props.success { "form-message success" } else { "form-message error" };
            html! { <div class={class}>{message}</div> }
        }
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingStateProps {
    pub loading: bool,
    pub error: Option<String>,
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Loading text, then the error, then the children once data is in
#[function_component(LoadingState)]
pub fn loading_state(props: &LoadingStateProps) -> Html {
    if let Some(error) = props.error.as_ref() {
        html! { <p class="page-error">{format!("Error: {}", error)}</p> }
    } else if props.loading {
        html! { <p class="loading">{format!("Cargando {}...", props.label)}</p> }
    } else {
        props.children.clone()
    }
}
