use yew::prelude::*;

use crate::components::marquee::Marquee;
use crate::components::page_hero::PageHero;
use crate::components::reveal::Reveal;
use crate::hooks::use_page;

static PILLARS: [(&str, &str, &str); 3] = [
    ("✎", "Design Approach", "Our designs combine innovation, sustainability, and client-focused solutions with VR visualization and eco-friendly practices."),
    ("💡", "Innovative Solutions", "Experience the future of housing with our VR visualization tools, green energy practices, and flexible zero-interest financing options."),
    ("✓", "Project Management", "From the initial planning stages to final execution, we ensure seamless coordination, timely delivery, and top-tier quality for every project."),
];

pub struct Service {
    pub title: &'static str,
    pub img: &'static str,
    pub desc: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service { title: "Architecture", img: "img/service-1.jpg", desc: "Designing functional spaces blending aesthetics with practicality." },
    Service { title: "3D Animation", img: "img/service-2.jpg", desc: "Realistic animations bringing your vision to life vividly." },
    Service { title: "House Planning", img: "img/service-3.jpg", desc: "Tailored designs maximizing space and functionality." },
    Service { title: "Interior Design", img: "img/service-4.jpg", desc: "Elegant spaces reflecting your unique personal style." },
    Service { title: "Renovation", img: "img/service-5.jpg", desc: "Transforming existing spaces with modern upgrades." },
    Service { title: "Construction", img: "img/service-6.jpg", desc: "High-quality sustainable building from concept to completion." },
];

#[derive(Properties, PartialEq)]
struct FlipCardProps {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

/// Turns over on hover, or on tap for touch screens.
#[function_component(FlipCard)]
fn flip_card(props: &FlipCardProps) -> Html {
    let flipped = use_state(|| false);
    let onclick = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };

    html! {
        <div class="flip-card" {onclick}>
            <div class={classes!("flip-card-inner", flipped.then(|| "flipped"))}>
                <div class="flip-face front">
                    <div class="flip-icon">{props.icon}</div>
                    <h3>{props.title}</h3>
                    <span class="flip-hint">{"Hover to explore"}</span>
                </div>
                <div class="flip-face back">
                    <h3>{props.title}</h3>
                    <p>{props.desc}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_page("Services");

    html! {
        <div class="services-page">
            <PageHero eyebrow="What We Do" title="OUR" highlight="SERVICES" />
            <Marquee text="Innovative Designs • Sustainable Living • " />

            <section class="services-section">
                <div class="container pillar-grid">
                    { for PILLARS.iter().map(|(icon, title, desc)| html! {
                        <Reveal start={0.9}>
                            <FlipCard icon={*icon} title={*title} desc={*desc} />
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="services-section">
                <div class="container">
                    <Reveal class="section-heading">
                        <h4 class="eyebrow">{"Excellence"}</h4>
                        <h1>
                            {"Innovative Architecture &"}<br />
                            <span class="muted-heading">{"Modern Interior Design"}</span>
                        </h1>
                    </Reveal>
                    <div class="offer-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <Reveal start={0.95} class="offer-card">
                                <img src={service.img} alt={service.title} />
                                <div class="offer-overlay">
                                    <h3>{service.title}</h3>
                                    <p>{service.desc}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .services-page {
                    background: #B8E3E9;
                    overflow-x: hidden;
                }
                .services-section {
                    padding: 6rem 0;
                }
                .pillar-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }
                .flip-card {
                    height: 20rem;
                    perspective: 1000px;
                    cursor: pointer;
                }
                .flip-card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.7s ease;
                    transform-style: preserve-3d;
                }
                .flip-card:hover .flip-card-inner,
                .flip-card-inner.flipped {
                    transform: rotateY(180deg);
                }
                .flip-face {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    border-radius: 2rem;
                    backface-visibility: hidden;
                    text-align: center;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .flip-face.front {
                    background: rgba(255, 255, 255, 0.8);
                    border: 1px solid rgba(255, 255, 255, 0.5);
                }
                .flip-face.back {
                    background: #0B2E33;
                    color: #B8E3E9;
                    transform: rotateY(180deg);
                    border: 1px solid rgba(191, 149, 63, 0.3);
                }
                .flip-icon {
                    width: 6rem;
                    height: 6rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    border-radius: 50%;
                    background: #0B2E33;
                    color: #B8E3E9;
                    font-size: 2.5rem;
                }
                .flip-face h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .flip-hint {
                    color: #bf953f;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .flip-face.back p {
                    line-height: 1.7;
                    color: #93B1B5;
                }
                .muted-heading {
                    color: #4F7C82;
                }
                .offer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }
                .offer-card {
                    position: relative;
                    height: 26rem;
                    border-radius: 2rem;
                    overflow: hidden;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .offer-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .offer-card:hover img {
                    transform: scale(1.1);
                }
                .offer-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2rem;
                    background: linear-gradient(to top, rgba(11, 46, 51, 0.95), rgba(11, 46, 51, 0.2) 60%, transparent);
                }
                .offer-overlay h3 {
                    color: #fff;
                    font-size: 1.875rem;
                    margin-bottom: 1rem;
                    transition: color 0.3s ease;
                }
                .offer-card:hover .offer-overlay h3 {
                    color: #B8E3E9;
                }
                .offer-overlay p {
                    color: #93B1B5;
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                }
                .offer-card:hover .offer-overlay p {
                    max-height: 8rem;
                }
                @media (max-width: 1024px) {
                    .pillar-grid,
                    .offer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
