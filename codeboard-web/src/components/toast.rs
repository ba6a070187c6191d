use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct Props {
    pub message: AttrValue,
    pub visible: bool,
}

/// Transient notification overlay; visibility is driven by the `show` class.
#[function_component(Toast)]
pub fn toast(p: &Props) -> Html {
    html! {
        <div
            id="toast"
            class={classes!("toast", p.visible.then_some("show"))}
            role="status"
            aria-live="polite"
        >
            { p.message.clone() }
        </div>
    }
}
