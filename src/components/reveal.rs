use web_sys::Element;
use yew::prelude::*;

use crate::utils::visibility;

const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;";
const VISIBLE_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that keeps its children hidden and offset until the wrapper first
/// becomes at least 10% visible, then fades them in. Fires once per mount.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let guard = node.cast::<Element>().and_then(|element| {
                    visibility::observe_once(&element, 0.1, "0px 0px -50px 0px", move || {
                        visible.set(true);
                    })
                });
                move || drop(guard)
            },
            (),
        );
    }

    let style = if *visible { VISIBLE_STYLE } else { HIDDEN_STYLE };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
