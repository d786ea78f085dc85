use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::enquiry_form::{EnquiryForm, FormField};
use crate::components::people_grid::{PeopleGrid, DIRECTORS};
use crate::components::reveal::Reveal;
use crate::components::video_section::VideoSection;
use crate::config;
use crate::hooks::{use_page, use_scroll_progress, use_tabs};
use crate::pages::services::SERVICES;
use crate::scroll::interpolate;
use crate::tabs::TabAction;
use crate::Route;

static FEATURES: [(&str, &str, &str); 3] = [
    ("✎", "Design Approach", "Innovation meets sustainability."),
    ("✓", "Smart Financing", "Zero-interest solutions tailored for you."),
    ("☰", "Seamless Management", "Coordination from planning to execution."),
];

struct Showcase {
    title: &'static str,
    img: &'static str,
    desc: &'static str,
}

static LATEST_WORKS: [Showcase; 4] = [
    Showcase { title: "Modern Complex", img: "img/project-1.jpg", desc: "State of the art commercial complex." },
    Showcase { title: "Royal Hotel", img: "img/project-2.jpg", desc: "Luxury hospitality project." },
    Showcase { title: "Mexwel Building", img: "img/project-3.jpg", desc: "Sustainable residential high-rise." },
    Showcase { title: "Shopping Mall", img: "img/project-4.jpg", desc: "Urban retail center." },
];

#[function_component(Home)]
pub fn home() -> Html {
    use_page("Home");
    let progress = use_scroll_progress();

    html! {
        <div class="home-page">
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", progress)}></div>
            <HeroSection />
            <FeaturesSection />
            <AboutSection />
            <ServicesSection />
            <LatestWorks />
            <VideoSection
                src="img/project.mp4"
                eyebrow="Vision Into Reality"
                title="Ongoing School"
                highlight="& Hospital Project"
            />
            <DirectorsSection />
            <AppointmentSection />
            <style>
                {r#"
                .home-page {
                    background: #1B2A2D;
                    overflow-x: hidden;
                }
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: #0B2E33;
                    transform-origin: 0%;
                    z-index: 60;
                }
                .home-section {
                    padding: 6rem 0;
                    background: #B8E3E9;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: #0B2E33;
                }
                .hero-video {
                    position: absolute;
                    inset: -10% 0 0 0;
                    opacity: 0.5;
                }
                .hero-video video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    width: 100%;
                }
                .hero-content h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 900;
                    line-height: 1.05;
                    color: #B8E3E9;
                    animation: hero-title 1s ease-out both;
                }
                .hero-content p {
                    max-width: 36rem;
                    margin: 2rem 0;
                    font-size: 1.25rem;
                    color: #93B1B5;
                    animation: hero-title 1s ease-out 0.5s both;
                }
                @keyframes hero-title {
                    from { opacity: 0; transform: translateY(100px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-cta {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    background: #B8E3E9;
                    color: #0B2E33;
                    font-weight: 700;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hero-cta:hover {
                    background: #bf953f;
                    transform: scale(1.05);
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }
                .feature-card {
                    padding: 2.5rem;
                    border-radius: 2rem;
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(12px);
                    border: 1px solid #fff;
                    transition: transform 0.3s ease;
                }
                .feature-card:hover {
                    transform: translateY(-10px);
                }
                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: #0B2E33;
                    color: #B8E3E9;
                    font-size: 1.75rem;
                    margin-bottom: 1.5rem;
                }
                .feature-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }
                .feature-card p {
                    color: #4F7C82;
                }
                .about-teaser {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-teaser-image {
                    position: relative;
                }
                .about-teaser-image img {
                    width: 100%;
                    border-radius: 2rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .years-badge {
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    width: 10rem;
                    height: 10rem;
                    border-radius: 50%;
                    background: #0B2E33;
                    color: #B8E3E9;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.3s ease;
                }
                .years-badge:hover {
                    transform: scale(1.1) rotate(5deg);
                }
                .years-badge strong {
                    font-size: 3rem;
                    line-height: 1;
                }
                .about-teaser h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }
                .about-teaser p {
                    color: #4F7C82;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                }
                .service-tile {
                    position: relative;
                    height: 20rem;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }
                .service-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .service-tile:hover img {
                    transform: scale(1.1);
                }
                .service-tile h3 {
                    position: absolute;
                    left: 1.5rem;
                    bottom: 1.5rem;
                    color: #fff;
                    font-size: 1.5rem;
                    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.5);
                }
                .works {
                    display: grid;
                    grid-template-columns: 5fr 7fr;
                    gap: 3rem;
                    align-items: center;
                }
                .works-tab {
                    display: flex;
                    align-items: center;
                    width: 100%;
                    padding: 1.5rem;
                    border: none;
                    border-radius: 1rem;
                    background: transparent;
                    color: #249E94;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                    transition: all 0.5s ease;
                }
                .works-tab:hover {
                    color: #0B2E33;
                    transform: translateX(0.25rem);
                }
                .works-tab.active {
                    background: #0B2E33;
                    color: #EDEDCE;
                    transform: translateX(0.5rem);
                }
                .works-tab-number {
                    margin-right: 1rem;
                    opacity: 0.6;
                }
                .works-stage {
                    position: relative;
                    height: 32rem;
                    border-radius: 2.5rem;
                    overflow: hidden;
                }
                .works-slide {
                    position: absolute;
                    inset: 0;
                    animation: works-enter 0.5s ease both;
                }
                .works-slide.leaving {
                    animation: works-leave 0.4s ease both;
                }
                @keyframes works-enter {
                    from { opacity: 0; transform: translateX(20px); filter: blur(10px); }
                    to { opacity: 1; transform: translateX(0); filter: blur(0); }
                }
                @keyframes works-leave {
                    from { opacity: 1; transform: translateX(0); filter: blur(0); }
                    to { opacity: 0; transform: translateX(-20px); filter: blur(10px); }
                }
                .works-slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 7s linear;
                }
                .works-slide:hover img {
                    transform: scale(1.1);
                }
                .works-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 2.5rem;
                    background: linear-gradient(to top, rgba(11, 46, 51, 0.9), transparent);
                    color: #fff;
                }
                .works-caption h3 {
                    font-size: 2.25rem;
                    margin-bottom: 0.5rem;
                }
                .appointment {
                    display: grid;
                    grid-template-columns: 5fr 7fr;
                    gap: 3rem;
                    align-items: center;
                }
                .appointment h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }
                .appointment p {
                    color: #4F7C82;
                    margin-bottom: 2rem;
                }
                .contact-line {
                    margin-bottom: 1.5rem;
                }
                .contact-line span {
                    display: block;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #4F7C82;
                }
                @media (max-width: 1024px) {
                    .feature-grid,
                    .about-teaser,
                    .works,
                    .appointment {
                        grid-template-columns: 1fr;
                    }
                    .service-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                @media (max-width: 640px) {
                    .service-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let (_, scroll_y) = use_window_scroll();
    // Text sinks slower than the page while the video drifts up.
    let text_y = interpolate(scroll_y, (0.0, 500.0), (0.0, 200.0));
    let video_y = interpolate(scroll_y, (0.0, 500.0), (0.0, -150.0));

    html! {
        <header class="hero">
            <div class="hero-video" style={format!("transform: translateY({:.1}px);", video_y)}>
                <video autoplay=true loop=true muted=true playsinline=true>
                    <source src="img/hero2.mp4" type="video/mp4" />
                </video>
            </div>
            <div class="hero-content" style={format!("transform: translateY({:.1}px);", text_y)}>
                <h1>
                    {"Build Your"}<br />
                    {"Dream Home"}<br />
                    <span class="gold-text">{"With BHPL"}</span>
                </h1>
                <p>{"Constructing dreams with precision. Experience housing solutions tailored to your life."}</p>
                <Link<Route> to={Route::About} classes="hero-cta">
                    {"Discover More →"}
                </Link<Route>>
            </div>
        </header>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    html! {
        <section class="home-section">
            <div class="container feature-grid">
                { for FEATURES.iter().map(|(icon, title, desc)| html! {
                    <Reveal start={0.9} class="feature-card">
                        <div class="feature-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*desc}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section class="home-section">
            <div class="container about-teaser">
                <Reveal class="about-teaser-image">
                    <img src="img/about-1.jpg" alt="About" />
                    <div class="years-badge">
                        <strong>{"24"}</strong>
                        <span>{"Years"}</span>
                    </div>
                </Reveal>
                <Reveal>
                    <h4 class="eyebrow">{"About Us"}</h4>
                    <h2>{"Building Innovative Spaces"}</h2>
                    <p>
                        {"Specializing in creating affordable dream homes. By leveraging cutting-edge VR technology, we offer an immersive experience that allows you to explore and visualize your future home."}
                    </p>
                    <ul class="check-list">
                        <li>{"VR Visualization"}</li>
                        <li>{"Eco-Friendly Practices"}</li>
                        <li>{"Turn-Key Solutions"}</li>
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section class="home-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Premium Services"}</h2>
                </div>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <Reveal start={0.95} class="service-tile">
                            <img src={service.img} alt={service.title} />
                            <h3>{service.title}</h3>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(LatestWorks)]
fn latest_works() -> Html {
    let tabs = use_tabs(LATEST_WORKS.len(), 0);
    let shown = &LATEST_WORKS[tabs.active()];

    html! {
        <section class="home-section">
            <div class="container works">
                <div>
                    <h4 class="eyebrow">{"Latest Works"}</h4>
                    { for LATEST_WORKS.iter().enumerate().map(|(idx, work)| {
                        let onclick = {
                            let tabs = tabs.clone();
                            Callback::from(move |_: MouseEvent| tabs.dispatch(TabAction::Select(idx)))
                        };
                        html! {
                            <button class={classes!("works-tab", (tabs.highlighted() == idx).then(|| "active"))} {onclick}>
                                <span class="works-tab-number">{format!("0{}.", idx + 1)}</span>
                                {work.title}
                            </button>
                        }
                    }) }
                </div>
                <div class="works-stage">
                    <div key={tabs.active()} class={classes!("works-slide", tabs.is_leaving().then(|| "leaving"))}>
                        <img src={shown.img} alt={shown.title} />
                        <div class="works-caption">
                            <h3>{shown.title}</h3>
                            <p>{shown.desc}</p>
                            <Link<Route> to={Route::Projects} classes="hero-cta">
                                {"View Project Details →"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(DirectorsSection)]
fn directors_section() -> Html {
    html! {
        <section class="home-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Directors"}</h2>
                </div>
                <PeopleGrid people={&DIRECTORS[..]} />
            </div>
        </section>
    }
}

#[function_component(AppointmentSection)]
fn appointment_section() -> Html {
    let fields = vec![
        FormField::text("Your Name", ""),
        FormField::email("Your Email", ""),
        FormField::text("Phone", ""),
        FormField::Select {
            label: "Service",
            options: &["Construction", "Architecture"],
        },
        FormField::TextArea {
            label: "Message",
            placeholder: "",
            rows: 4,
        },
    ];

    html! {
        <section class="home-section">
            <div class="container appointment">
                <div>
                    <h2>{"Start Your Dream Project"}</h2>
                    <p>{"With 24 years of expertise, BHPL creates spaces that positively impact communities."}</p>
                    <div class="contact-line">
                        <span>{"Call Us"}</span>
                        <h3>{config::PHONE}</h3>
                    </div>
                    <div class="contact-line">
                        <span>{"Email Us"}</span>
                        <h3>{config::EMAIL}</h3>
                    </div>
                </div>
                <EnquiryForm name="appointment" fields={fields} submit_label="Book Appointment" />
            </div>
        </section>
    }
}
