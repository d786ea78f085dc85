use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub text: AttrValue,
}

/// Endless horizontal ticker under each page hero.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    html! {
        <div class="marquee">
            <div class="marquee-track">
                { for (0..8).map(|i| html! { <span key={i}>{&props.text}</span> }) }
            </div>
            <style>
                {r#"
                .marquee {
                    background: #0B2E33;
                    padding: 1.5rem 0;
                    border-top: 1px solid rgba(191, 149, 63, 0.2);
                    border-bottom: 1px solid rgba(191, 149, 63, 0.2);
                    overflow: hidden;
                    width: 100%;
                    position: relative;
                    z-index: 2;
                }
                .marquee-track {
                    display: flex;
                    width: max-content;
                    gap: 4rem;
                    white-space: nowrap;
                    color: rgba(191, 149, 63, 0.2);
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                    animation: marquee-scroll 30s linear infinite;
                }
                @keyframes marquee-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </div>
    }
}
