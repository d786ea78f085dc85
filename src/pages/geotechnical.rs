use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::enquiry_form::{EnquiryForm, FormField};
use crate::components::marquee::Marquee;
use crate::components::page_hero::PageHero;
use crate::components::reveal::Reveal;
use crate::config;
use crate::hooks::use_page;
use crate::Route;

static DRILLING_POINTS: [(&str, &str); 2] = [
    ("Hydraulic Penetration", "Depths exceeding 1,500ft with precision."),
    ("Casing & Filtration", "High-grade PVC/MS casing installation."),
];

static EXCAVATION_POINTS: [(&str, &str); 3] = [
    ("Foundation Digging", "Accurate depth for footings."),
    ("Land Leveling", "Grading uneven terrain."),
    ("Debris Removal", "Efficient clearing."),
];

fn looping_video(src: &'static str) -> Html {
    html! {
        <video src={src} autoplay=true muted=true loop=true playsinline=true class="geo-video"></video>
    }
}

#[function_component(Geotechnical)]
pub fn geotechnical() -> Html {
    use_page("Geotechnical Services");

    let fields = vec![
        FormField::text("Your Name", "Your Name"),
        FormField::text("Your Phone", "Your Phone"),
        FormField::Select {
            label: "Service",
            options: &["Borewell Drilling", "Land Surveying", "Excavation"],
        },
        FormField::TextArea {
            label: "Project Details",
            placeholder: "Project Details",
            rows: 4,
        },
    ];

    html! {
        <div class="geo-page">
            <PageHero eyebrow="Site Development" title="GEOTECHNICAL" highlight="SERVICES" />
            <Marquee text="Borewell Drilling • Land Surveying • Excavation • " />

            <section class="geo-section">
                <Reveal class="container geo-row">
                    <div class="geo-copy">
                        <span class="geo-step">{"01. Water Resource Engineering"}</span>
                        <h2>{"High-Depth "}<span class="gold-text">{"Borewell Drilling"}</span></h2>
                        <p>
                            {"We utilize state-of-the-art "}
                            <strong>{"high-pressure hydraulic rigs"}</strong>
                            {" designed to penetrate the toughest geological strata. Our process ensures maximum yield through precise aquifer targeting and casing installation."}
                        </p>
                        <div class="geo-points">
                            { for DRILLING_POINTS.iter().map(|(title, desc)| html! {
                                <div class="geo-point">
                                    <h5>{*title}</h5>
                                    <p>{*desc}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="geo-media split">
                        <div class="geo-video-frame">
                            { looping_video("/Geotechnical/bw2.mp4") }
                            <div class="geo-video-caption">
                                <p class="geo-video-label">{"Hydraulic Rig"}</p>
                                <p>{"Deep Rock Drilling"}</p>
                            </div>
                        </div>
                        <div class="geo-stack">
                            <img src="Geotechnical/bw1.jpeg" alt="Drill" />
                            <img src="Geotechnical/bw3.jpeg" alt="Casing" />
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="geo-section tinted">
                <Reveal class="container geo-row reverse">
                    <div class="geo-media mosaic">
                        <img src="Geotechnical/mark1.jpeg" alt="Survey" />
                        <img src="Geotechnical/mark2.jpeg" alt="Marking" />
                        <img src="Geotechnical/mark3.jpeg" alt="Blueprint" />
                        <img src="Geotechnical/load2.jpeg" alt="Team" />
                    </div>
                    <div class="geo-copy">
                        <span class="geo-step">{"02. Geo-Spatial Analysis"}</span>
                        <h2>{"Scientific "}<span class="gold-text">{"Land Marking"}</span>{" & Surveying"}</h2>
                        <p>
                            {"Before a single stone is moved, we deploy advanced hydro-geological survey techniques. We analyze ground resistivity and topography to pinpoint the perfect coordinates."}
                        </p>
                        <div class="geo-tags">
                            <span>{"GPS Coordinate Mapping"}</span>
                            <span>{"Boundary Demarcation"}</span>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="geo-section">
                <Reveal class="container geo-row">
                    <div class="geo-copy">
                        <span class="geo-step">{"03. Heavy Earthworks"}</span>
                        <h2>{"Precision "}<span class="gold-text">{"Excavation"}</span>{" & Site Prep"}</h2>
                        <p>
                            {"Our excavation services lay the groundwork for success. Using a fleet of heavy machinery including excavators, backhoes, and trenchers, we manage earthmoving with speed."}
                        </p>
                        <ul class="check-list geo-list">
                            { for EXCAVATION_POINTS.iter().map(|(title, desc)| html! {
                                <li><strong>{format!("{}:", title)}</strong>{" "}{*desc}</li>
                            }) }
                        </ul>
                        <Link<Route> to={Route::Contact} classes="geo-cta">
                            {"Get Excavation Quote →"}
                        </Link<Route>>
                    </div>
                    <div class="geo-media split">
                        <div class="geo-stack">
                            <img src="Geotechnical/load1.jpeg" alt="Excavator" />
                            <div class="geo-video-frame small">
                                { looping_video("Geotechnical/escavation1.mp4") }
                            </div>
                        </div>
                        <img class="geo-tall" src="Geotechnical/load3.jpeg" alt="Leveling" />
                    </div>
                </Reveal>
            </section>

            <section class="geo-section dark">
                <div class="container geo-row">
                    <Reveal class="geo-copy">
                        <h4 class="eyebrow">{"Book a Service"}</h4>
                        <h2>{"Start Your Project With Solid Ground"}</h2>
                        <p>
                            {"Whether you need to find water, mark your boundaries, or clear the land, our technical team is ready to deploy."}
                        </p>
                        <div class="geo-contact">
                            <p>{"Call Us Now"}</p>
                            <h3>{config::PHONE}</h3>
                        </div>
                        <div class="geo-contact">
                            <p>{"Mail Us Now"}</p>
                            <h3>{config::EMAIL}</h3>
                        </div>
                    </Reveal>
                    <EnquiryForm name="site visit" fields={fields} submit_label="Book Site Visit" />
                </div>
            </section>

            <style>
                {r#"
                .geo-page {
                    background: #B8E3E9;
                    overflow-x: hidden;
                }
                .geo-section {
                    padding: 6rem 0;
                }
                .geo-section.tinted {
                    background: rgba(255, 255, 255, 0.3);
                }
                .geo-section.dark {
                    background: #0B2E33;
                    color: #B8E3E9;
                }
                .geo-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .geo-step {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.25rem 1rem;
                    border-radius: 999px;
                    background: #0B2E33;
                    color: #bf953f;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }
                .geo-copy h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .geo-copy > p {
                    color: #4F7C82;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .geo-section.dark .geo-copy > p {
                    color: #93B1B5;
                }
                .geo-copy strong {
                    color: #0B2E33;
                }
                .geo-points {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .geo-point {
                    padding-left: 1.25rem;
                    border-left: 3px solid #bf953f;
                }
                .geo-point h5 {
                    font-size: 1.125rem;
                }
                .geo-point p {
                    color: #4F7C82;
                }
                .geo-media.split {
                    display: flex;
                    gap: 1rem;
                    height: 32rem;
                }
                .geo-media.split > * {
                    flex: 1;
                }
                .geo-video-frame {
                    position: relative;
                    border-radius: 2rem;
                    overflow: hidden;
                    background: #000;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .geo-video-frame.small {
                    flex: 1;
                }
                .geo-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 1s ease;
                }
                .geo-video-frame:hover .geo-video {
                    transform: scale(1.05);
                }
                .geo-video-caption {
                    position: absolute;
                    left: 1.5rem;
                    bottom: 1.5rem;
                    color: #fff;
                }
                .geo-video-label {
                    color: #bf953f;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .geo-stack {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .geo-stack img {
                    flex: 1;
                    min-height: 0;
                }
                .geo-media img {
                    width: 100%;
                    object-fit: cover;
                    border-radius: 2rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .geo-tall {
                    height: 100%;
                }
                .geo-media.mosaic {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .geo-media.mosaic img {
                    height: 14rem;
                }
                .geo-media.mosaic img:nth-child(even) {
                    transform: translateY(2rem);
                }
                .geo-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .geo-tags span {
                    padding: 0.75rem 1.5rem;
                    border-radius: 1rem;
                    background: #fff;
                    font-weight: 700;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                }
                .geo-list {
                    margin-bottom: 2.5rem;
                    color: #4F7C82;
                }
                .geo-cta {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    background: #0B2E33;
                    color: #B8E3E9;
                    font-weight: 700;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .geo-cta:hover {
                    background: #bf953f;
                    color: #0B2E33;
                }
                .geo-contact {
                    margin-bottom: 1.5rem;
                }
                .geo-contact p {
                    color: #bf953f;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                @media (max-width: 1024px) {
                    .geo-row {
                        grid-template-columns: 1fr;
                    }
                    .geo-row.reverse .geo-media {
                        order: 2;
                    }
                    .geo-media.split {
                        height: 24rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
