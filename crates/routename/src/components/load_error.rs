use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadErrorProps {
    pub message: AttrValue,
}

/// Shown instead of the page when the climber dataset cannot be loaded.
#[function_component(LoadError)]
pub fn load_error(LoadErrorProps { message }: &LoadErrorProps) -> Html {
    html! {
        <div class="load-error">
            <h1>{"No route today"}</h1>
            <p>{message.clone()}</p>
        </div>
    }
}
