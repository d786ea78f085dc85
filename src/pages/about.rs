use yew::prelude::*;

use crate::components::marquee::Marquee;
use crate::components::page_hero::PageHero;
use crate::components::people_grid::{PeopleGrid, Person, DIRECTORS};
use crate::components::reveal::{Parallax, Reveal};
use crate::config;
use crate::hooks::use_page;

static VALUES: [(&str, &str, &str); 4] = [
    ("🏆", "Award Winning", "Design excellence"),
    ("💡", "Innovation", "VR Construction"),
    ("👥", "Client Focus", "Tailored solutions"),
    ("★", "Quality First", "Zero compromise"),
];

static TEAM: [Person; 5] = [
    Person { name: "Mr. SanthoshKumar S", role: "South Indian Sales", img: "img/santhosh.jpg" },
    Person { name: "Mr. John", role: "North Karnataka Sales", img: "img/john sir.svg" },
    Person { name: "Mr. Gopi Tanniru", role: "Civil Engineer", img: "img/gopi.png" },
    Person { name: "Mr. Praveen Kumar", role: "Site Engineer", img: "img/praveen.jpg" },
    Person { name: "Mr. Anand Kumar", role: "Sales Manager", img: "img/andha.png" },
];

#[function_component(About)]
pub fn about() -> Html {
    use_page("About Us");

    html! {
        <div class="about-page">
            <PageHero eyebrow="Who We Are" title="ABOUT" highlight="US" />
            <Marquee text="Building Dreams • Creating Legacy • " />

            <section class="about-journey">
                <div class="container journey-grid">
                    <div class="journey-images">
                        <Parallax travel={-60.0} class="journey-column offset">
                            <img class="short" src="img/about-1.jpg" alt="About" />
                            <div class="journey-quote">
                                <span class="quote-star">{"★"}</span>
                                <p>{"\"Crafting the backdrop for your life's best memories.\""}</p>
                            </div>
                        </Parallax>
                        <Parallax travel={60.0} class="journey-column">
                            <img class="tall" src="img/about-2.jpg" alt="About" />
                        </Parallax>
                    </div>

                    <Reveal start={0.85}>
                        <h4 class="eyebrow">{"Our Journey"}</h4>
                        <h1 class="journey-title">
                            {"24 Years of"}<br />
                            <span class="teal-text">{"Excellence"}</span>
                        </h1>
                        <p class="journey-text">
                            {format!("At {}, we specialize in creating affordable dream homes tailored to your unique needs. Leveraging cutting-edge ", config::COMPANY_NAME)}
                            <strong>{"VR technology"}</strong>
                            {", we offer an immersive experience."}
                        </p>
                        <div class="value-grid">
                            { for VALUES.iter().map(|(icon, title, desc)| html! {
                                <div class="value-card">
                                    <span class="value-icon">{*icon}</span>
                                    <h3>{*title}</h3>
                                    <p>{*desc}</p>
                                </div>
                            }) }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="about-people">
                <div class="container">
                    <div class="section-heading">
                        <h4 class="eyebrow">{"Leadership"}</h4>
                        <h2>{"Our Directors"}</h2>
                    </div>
                    <PeopleGrid people={&DIRECTORS[..]} />
                </div>
            </section>

            <section class="about-people dark">
                <div class="container">
                    <div class="section-heading">
                        <h4 class="eyebrow">{"The People"}</h4>
                        <h2>{"Meet Our Team"}</h2>
                    </div>
                    <PeopleGrid people={&TEAM[..]} compact={true} />
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    background: #B8E3E9;
                    overflow-x: hidden;
                }
                .about-journey {
                    padding: 6rem 0;
                    overflow: hidden;
                }
                .journey-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .journey-images {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .journey-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .journey-column.offset {
                    padding-top: 3rem;
                }
                .journey-images img {
                    width: 100%;
                    object-fit: cover;
                    border-radius: 2rem;
                    border: 4px solid rgba(255, 255, 255, 0.4);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .journey-images img.short {
                    height: 20rem;
                }
                .journey-images img.tall {
                    height: 28rem;
                }
                .journey-quote {
                    padding: 2rem;
                    border-radius: 2rem;
                    background: #0B2E33;
                    color: #B8E3E9;
                    border: 1px solid rgba(191, 149, 63, 0.3);
                }
                .quote-star {
                    display: block;
                    font-size: 2rem;
                    color: #bf953f;
                    margin-bottom: 1rem;
                }
                .journey-quote p {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.125rem;
                    line-height: 1.6;
                }
                .journey-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }
                .teal-text {
                    background: linear-gradient(to right, #4F7C82, #0B2E33);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .journey-text {
                    max-width: 36rem;
                    color: #4F7C82;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2.5rem;
                }
                .journey-text strong {
                    color: #0B2E33;
                }
                .value-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .value-card {
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(8px);
                    transition: transform 0.3s ease;
                }
                .value-card:hover {
                    transform: translateY(-5px) scale(1.02);
                }
                .value-icon {
                    font-size: 1.75rem;
                }
                .value-card h3 {
                    margin: 0.75rem 0 0.25rem;
                    font-size: 1.125rem;
                }
                .value-card p {
                    color: #4F7C82;
                    font-size: 0.875rem;
                }
                .about-people {
                    padding: 6rem 0;
                }
                .about-people.dark {
                    background: #0B2E33;
                }
                .about-people.dark .section-heading h2 {
                    color: #B8E3E9;
                }
                @media (max-width: 1024px) {
                    .journey-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
