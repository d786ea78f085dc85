use yew::prelude::*;

use crate::components::enquiry_form::{EnquiryForm, FormField};
use crate::components::marquee::Marquee;
use crate::components::page_hero::PageHero;
use crate::components::reveal::Reveal;
use crate::config;
use crate::hooks::use_page;

struct ContactCard {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    subtext: Option<&'static str>,
}

static CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard { icon: "📍", title: "Headquarters", text: config::HEADQUARTERS, subtext: None },
    ContactCard { icon: "☎", title: "Phone Number", text: config::PHONE, subtext: Some("Mon-Sat 9am to 6pm") },
    ContactCard { icon: "✉", title: "Email Address", text: config::EMAIL, subtext: Some("Drop us a line anytime") },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page("Contact Us");

    let fields = vec![
        FormField::text("Your Name", "John Doe"),
        FormField::email("Your Email", "john@example.com"),
        FormField::text("Subject", "Project Inquiry"),
        FormField::TextArea {
            label: "Message",
            placeholder: "Tell us about your dream project...",
            rows: 4,
        },
    ];

    html! {
        <div class="contact-page">
            <PageHero eyebrow="Get In Touch" title="CONTACT" highlight="US" />
            <Marquee text="Start Your Dream Project • 24/7 Support • " />

            <section class="contact-section">
                <div class="container">
                    <Reveal class="section-heading">
                        <h1>
                            {"Have Any Questions?"}<br />
                            <span class="ask-text">{"Feel Free to Ask"}</span>
                        </h1>
                    </Reveal>

                    <div class="contact-grid">
                        <div class="contact-cards">
                            { for CONTACT_CARDS.iter().map(|card| html! {
                                <Reveal start={0.95} class="contact-card">
                                    <div class="contact-card-icon">{card.icon}</div>
                                    <div class="contact-card-text">
                                        <p class="contact-card-title">{card.title}</p>
                                        <h3>{card.text}</h3>
                                        { for card.subtext.map(|subtext| html! { <p>{subtext}</p> }) }
                                    </div>
                                </Reveal>
                            }) }
                            <Reveal class="social-row">
                                <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="social-button">{"IG"}</a>
                                <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer" class="social-button">{"FB"}</a>
                            </Reveal>
                        </div>

                        <Reveal start={0.9} class="contact-form-card">
                            <h3>{"Send us a Message"}</h3>
                            <EnquiryForm name="contact" fields={fields} submit_label="Send Message" />
                        </Reveal>
                    </div>
                </div>
            </section>

            <section class="map-section">
                <iframe
                    title="BHPL location"
                    src={config::MAP_EMBED_URL}
                    width="100%"
                    height="450"
                    style="border: 0;"
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
            </section>

            <style>
                {r#"
                .contact-page {
                    background: #B8E3E9;
                    overflow-x: hidden;
                }
                .contact-section {
                    padding: 6rem 0;
                }
                .ask-text {
                    color: #bf953f;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .contact-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-card {
                    display: flex;
                    align-items: center;
                    padding: 1.5rem;
                    border-radius: 2rem;
                    background: rgba(255, 255, 255, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .contact-card.revealed:hover {
                    transform: translateX(10px);
                    background: rgba(255, 255, 255, 0.9);
                }
                .contact-card-icon {
                    flex-shrink: 0;
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: #0B2E33;
                    color: #bf953f;
                    font-size: 1.75rem;
                    transition: transform 0.3s ease;
                }
                .contact-card:hover .contact-card-icon {
                    transform: scale(1.1);
                }
                .contact-card-text {
                    margin-left: 1.5rem;
                }
                .contact-card-title {
                    color: #bf953f;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.25rem;
                }
                .contact-card-text h3 {
                    font-size: 1.25rem;
                }
                .contact-card-text p:last-child:not(.contact-card-title) {
                    color: #4F7C82;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                .social-row {
                    display: flex;
                    gap: 1rem;
                    padding-top: 2rem;
                }
                .social-button {
                    width: 3.5rem;
                    height: 3.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #0B2E33;
                    color: #B8E3E9;
                    font-weight: 700;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .social-button:hover {
                    background: #bf953f;
                    color: #0B2E33;
                    transform: translateY(-5px);
                }
                .contact-form-card h3 {
                    font-size: 1.875rem;
                    margin-bottom: 2rem;
                }
                .map-section {
                    line-height: 0;
                    filter: grayscale(0.6);
                    transition: filter 0.5s ease;
                }
                .map-section:hover {
                    filter: none;
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
