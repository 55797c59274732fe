// src/components/load_error.rs
use crate::utils::reload_page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadErrorProps {
    pub message: AttrValue,
}

/// Shown in place of content whose data could not be loaded. Retry reloads
/// the whole page.
#[function_component(LoadError)]
pub fn load_error(props: &LoadErrorProps) -> Html {
    let on_retry = Callback::from(|_: MouseEvent| reload_page());

    html! {
        <div class="load-error">
            <div class="error-icon">{"!"}</div>
            <p class="error">{ props.message.clone() }</p>
            <button onclick={on_retry}>{"Retry"}</button>
        </div>
    }
}
