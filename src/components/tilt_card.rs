use web_sys::Element;
use yew::prelude::*;

use crate::scroll::{tilt_angles, Bounds};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Leans toward the pointer while hovered and settles flat when it leaves.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let angles = use_state(|| (0.0, 0.0));

    let onmousemove = {
        let node = node.clone();
        let angles = angles.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let bounds = Bounds {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                };
                angles.set(tilt_angles(e.client_x() as f64, e.client_y() as f64, bounds));
            }
        })
    };

    let onmouseleave = {
        let angles = angles.clone();
        Callback::from(move |_: MouseEvent| angles.set((0.0, 0.0)))
    };

    let (rotate_x, rotate_y) = *angles;

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            style={format!("transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg);", rotate_x, rotate_y)}
            {onmousemove}
            {onmouseleave}
        >
            <div class="tilt-card-inner">
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .tilt-card {
                    transform-style: preserve-3d;
                    transition: transform 0.2s ease-out;
                }
                .tilt-card-inner {
                    transform: translateZ(30px);
                }
                "#}
            </style>
        </div>
    }
}
