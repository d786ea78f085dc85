use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub highlight: AttrValue,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <div class="page-hero-background">
                <div class="page-hero-orb gold"></div>
                <div class="page-hero-orb teal"></div>
            </div>
            <div class="page-hero-content">
                <h4>{&props.eyebrow}</h4>
                <h1>{&props.title}{" "}<span class="gold-text">{&props.highlight}</span></h1>
            </div>
            <style>
                {r#"
                .page-hero {
                    position: relative;
                    height: 60vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #0B2E33;
                }
                .page-hero-background {
                    position: absolute;
                    inset: 0;
                }
                .page-hero-orb {
                    position: absolute;
                    border-radius: 50%;
                    opacity: 0.3;
                    animation: orb-float 6s ease-in-out infinite;
                }
                .page-hero-orb.gold {
                    top: 33%;
                    left: 25%;
                    width: 16rem;
                    height: 16rem;
                    background: #bf953f;
                    filter: blur(120px);
                }
                .page-hero-orb.teal {
                    bottom: 25%;
                    right: 25%;
                    width: 12rem;
                    height: 12rem;
                    background: #4F7C82;
                    filter: blur(100px);
                    animation-duration: 8s;
                    animation-direction: reverse;
                }
                @keyframes orb-float {
                    0%, 100% { transform: translateY(-20px); opacity: 0.3; }
                    50% { transform: translateY(20px); opacity: 0.6; }
                }
                .page-hero-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    padding: 0 1rem;
                    animation: hero-rise 1s ease-out both;
                }
                .page-hero-content h4 {
                    color: #bf953f;
                    font-weight: 700;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .page-hero-content h1 {
                    font-size: clamp(3.5rem, 9vw, 6rem);
                    font-weight: 900;
                    color: #fff;
                    letter-spacing: -0.02em;
                }
                @keyframes hero-rise {
                    from { transform: translateY(50px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </section>
    }
}
