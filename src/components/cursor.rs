use yew::prelude::*;
use yew_hooks::prelude::*;

/// Dot pinned to the pointer with a ring trailing behind it. Hidden on
/// devices without hover.
#[function_component(FluidCursor)]
pub fn fluid_cursor() -> Html {
    // Parked off screen until the first move.
    let position = use_state(|| (-100, -100));

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set((e.client_x(), e.client_y()));
        });
    }

    let (x, y) = *position;
    let transform = format!("transform: translate({}px, {}px) translate(-50%, -50%);", x, y);

    html! {
        <>
            <div class="cursor-dot" style={transform.clone()}></div>
            <div class="cursor-ring" style={transform}></div>
            <style>
                {r#"
                .cursor-dot,
                .cursor-ring {
                    position: fixed;
                    top: 0;
                    left: 0;
                    border-radius: 50%;
                    pointer-events: none;
                }
                .cursor-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    background: #0B2E33;
                    z-index: 99999;
                }
                .cursor-ring {
                    width: 3rem;
                    height: 3rem;
                    border: 2px solid #4F7C82;
                    opacity: 0.6;
                    mix-blend-mode: difference;
                    z-index: 99998;
                    transition: transform 0.15s cubic-bezier(0.22, 1, 0.36, 1);
                }
                @media (hover: none) {
                    .cursor-dot,
                    .cursor-ring {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
