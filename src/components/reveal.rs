use yew::prelude::*;

use crate::hooks::{use_parallax, use_reveal};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Fraction of the viewport height the top edge must cross.
    #[prop_or(0.8)]
    pub start: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Slides its children up into view the first time they scroll past `start`.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.start);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), revealed.then(|| "revealed"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    /// Total px travelled while the element crosses the viewport.
    #[prop_or(-60.0)]
    pub travel: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let node = use_node_ref();
    let offset = use_parallax(node.clone(), props.travel);

    html! {
        <div ref={node} class={props.class.clone()} style={format!("transform: translateY({:.1}px);", offset)}>
            { for props.children.iter() }
        </div>
    }
}
