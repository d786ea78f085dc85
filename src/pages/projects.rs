use log::{debug, error};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{Catalog, Category, Item};
use crate::components::marquee::Marquee;
use crate::components::page_hero::PageHero;
use crate::components::reveal::Parallax;
use crate::components::video_section::VideoSection;
use crate::gallery::{CategoryFilter, GalleryAction, GalleryState};
use crate::hooks::{use_body_scroll_lock, use_page, use_tabs};
use crate::tabs::TabAction;
use crate::Route;

struct Approach {
    label: &'static str,
    title: &'static str,
    text: &'static str,
}

static APPROACHES: [Approach; 4] = [
    Approach {
        label: "01. Master Plan - Zoning",
        title: "MASTER PLAN - ZONING",
        text: "A long-term strategy for organized city or regional development, covering land use, infrastructure, and sustainability.",
    },
    Approach {
        label: "02. Form Development",
        title: "FORM DEVELOPMENT",
        text: "Focuses on shaping the physical environment by designing spaces that are functional, aesthetically appealing, and sustainable.",
    },
    Approach {
        label: "03. Survey Plan",
        title: "SURVEY PLAN",
        text: "A detailed document outlining boundaries, dimensions, and features of a specific land parcel using precise measurements.",
    },
    Approach {
        label: "04. Concept Design",
        title: "CONCEPT DESIGN",
        text: "Overview for Hirekalmatha Institutions & Hospital. Includes Multi-speciality hospital, CBSE school, Pharmacy and nursing institute.",
    },
];

static APPROACH_POINTS: [&str; 3] = [
    "Strategic Planning",
    "Sustainability Integration",
    "Future Proofing",
];

fn load_gallery() -> GalleryState {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => {
            debug!("loaded {} projects", catalog.items().len());
            catalog
        }
        Err(e) => {
            error!("project catalog rejected, showing an empty portfolio: {}", e);
            Catalog::empty()
        }
    };
    GalleryState::new(catalog)
}

#[function_component(Projects)]
pub fn projects() -> Html {
    use_page("Projects");
    let gallery = use_reducer(load_gallery);
    let tabs = use_tabs(APPROACHES.len(), 0);

    // Background scrolling stays locked exactly while the lightbox is open,
    // and is released if the page unmounts with it open.
    use_body_scroll_lock(gallery.is_open());

    let tab_buttons = APPROACHES.iter().enumerate().map(|(idx, approach)| {
        let onclick = {
            let tabs = tabs.clone();
            Callback::from(move |_: MouseEvent| tabs.dispatch(TabAction::Select(idx)))
        };
        html! {
            <button class={classes!("approach-tab", (tabs.highlighted() == idx).then(|| "active"))} {onclick}>
                {approach.label}
            </button>
        }
    });

    let active_approach = &APPROACHES[tabs.active()];

    let filter_buttons = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::from))
        .map(|filter| {
            let active = gallery.active_category() == &filter;
            let label = filter.as_str().to_string();
            let onclick = {
                let gallery = gallery.clone();
                Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Filter(filter.clone())))
            };
            html! {
                <button class={classes!("filter-button", active.then(|| "active"))} {onclick}>
                    {label}
                </button>
            }
        });

    let cards = gallery.filtered().into_iter().map(|item| project_card(item, &gallery));

    html! {
        <div class="projects-page">
            <PageHero eyebrow="Our Works" title="OUR" highlight="PROJECTS" />
            <Marquee text="Master Planning • Form Development • Concept Design • " />

            <section class="approaches">
                <div class="container">
                    <div class="section-heading">
                        <h4 class="eyebrow">{"Workflow"}</h4>
                        <h1>{"Innovative Approaches"}</h1>
                    </div>
                    <div class="approaches-grid">
                        <div class="approach-tabs">
                            { for tab_buttons }
                        </div>
                        <div class="approach-panel">
                            <div
                                key={tabs.active()}
                                class={classes!("approach-content", tabs.is_leaving().then(|| "leaving"))}
                            >
                                <div class="approach-image">
                                    <img src={format!("img/{}.svg", tabs.active() + 1)} alt="Plan" />
                                </div>
                                <div>
                                    <h3>{active_approach.title}</h3>
                                    <div class="gold-rule"></div>
                                    <p>{active_approach.text}</p>
                                    <ul class="check-list">
                                        { for APPROACH_POINTS.iter().map(|point| html! { <li>{*point}</li> }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="portfolio" id="gallery">
                <div class="container">
                    <div class="section-heading">
                        <h4 class="eyebrow">{"Portfolio"}</h4>
                        <h1>{"Completed & Ongoing"}</h1>
                    </div>
                    <div class="filter-bar">
                        { for filter_buttons }
                    </div>
                    <Parallax class="portfolio-grid">
                        { for cards }
                    </Parallax>
                </div>
            </section>

            <VideoSection
                src="img/project.mp4"
                eyebrow="Ongoing Initiative"
                title="Transformative"
                highlight="School & Hospital Project"
            />

            { lightbox(&gallery) }

            <style>
                {r#"
                .projects-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .approaches {
                    padding: 6rem 0;
                }
                .approaches-grid {
                    display: grid;
                    grid-template-columns: 4fr 8fr;
                    gap: 2rem;
                    align-items: start;
                }
                .approach-tabs {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .approach-tab {
                    width: 100%;
                    text-align: left;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 2px solid transparent;
                    background: rgba(255, 255, 255, 0.5);
                    color: #4F7C82;
                    font-weight: 700;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .approach-tab:hover {
                    background: #fff;
                    color: #0B2E33;
                }
                .approach-tab.active {
                    background: #0B2E33;
                    color: #B8E3E9;
                    border-color: #bf953f;
                    transform: translateX(0.5rem);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .approach-panel {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    padding: 2rem;
                    border-radius: 2.5rem;
                    border: 1px solid #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .approach-content {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                    animation: tab-enter 0.4s ease both;
                }
                .approach-content.leaving {
                    animation: tab-leave 0.4s ease both;
                }
                @keyframes tab-enter {
                    from { opacity: 0; transform: translateX(20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes tab-leave {
                    from { opacity: 1; transform: translateX(0); }
                    to { opacity: 0; transform: translateX(-20px); }
                }
                .approach-image {
                    height: 350px;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid rgba(191, 149, 63, 0.3);
                }
                .approach-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .approach-image img:hover {
                    transform: scale(1.1);
                }
                .approach-content h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .approach-content p {
                    color: #4F7C82;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .gold-rule {
                    height: 4px;
                    width: 5rem;
                    background: #bf953f;
                    border-radius: 999px;
                    margin-bottom: 1.5rem;
                }
                .portfolio {
                    padding: 6rem 0;
                    background: rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(4px);
                }
                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .filter-button {
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 999px;
                    background: #fff;
                    color: #4F7C82;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .filter-button:hover {
                    background: #0B2E33;
                    color: #fff;
                }
                .filter-button.active {
                    background: #0B2E33;
                    color: #bf953f;
                    transform: scale(1.05);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    position: relative;
                    cursor: pointer;
                    border-radius: 2rem;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                    animation: card-in 0.4s ease both;
                }
                .project-card:hover {
                    transform: translateY(-10px);
                }
                @keyframes card-in {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                .project-card-image {
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                }
                .project-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .project-card:hover .project-card-image img {
                    transform: scale(1.1);
                }
                .project-card-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(11, 46, 51, 0.8);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    text-align: center;
                }
                .project-card:hover .project-card-overlay {
                    opacity: 1;
                }
                .project-card-overlay h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .project-card-overlay p {
                    color: #bf953f;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .category-badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: #bf953f;
                    color: #0B2E33;
                    font-size: 0.75rem;
                    font-weight: 700;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    background: rgba(11, 46, 51, 0.95);
                    backdrop-filter: blur(24px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2.5rem;
                    animation: lightbox-in 0.3s ease both;
                }
                @keyframes lightbox-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .lightbox-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 2;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .lightbox-close:hover {
                    background: #bf953f;
                    color: #0B2E33;
                }
                .lightbox-panel {
                    width: 100%;
                    max-width: 80rem;
                    height: 100%;
                    display: flex;
                    background: #B8E3E9;
                    border-radius: 2rem;
                    overflow: hidden;
                }
                .lightbox-stage {
                    position: relative;
                    width: 66%;
                    background: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .lightbox-frame {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .lightbox-frame img {
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                    animation: lightbox-in 0.3s ease both;
                }
                .lightbox-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .lightbox-nav:hover {
                    background: #bf953f;
                }
                .lightbox-nav.prev {
                    left: 1rem;
                }
                .lightbox-nav.next {
                    right: 1rem;
                }
                .lightbox-counter {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    padding: 0.25rem 1rem;
                    border-radius: 999px;
                    font-family: monospace;
                    font-size: 0.75rem;
                }
                .lightbox-details {
                    width: 34%;
                    padding: 2.5rem;
                    overflow-y: auto;
                    background: rgba(255, 255, 255, 0.8);
                }
                .lightbox-details h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .lightbox-badge {
                    display: inline-block;
                    background: #0B2E33;
                    color: #bf953f;
                    font-size: 0.75rem;
                    font-weight: 700;
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.375rem;
                    margin-bottom: 1.5rem;
                }
                .lightbox-facts {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2rem;
                    color: #4F7C82;
                    font-size: 0.875rem;
                }
                .lightbox-description {
                    line-height: 1.7;
                    margin-bottom: 2rem;
                    color: rgba(11, 46, 51, 0.8);
                }
                .lightbox-thumbs {
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 0.5rem;
                }
                .lightbox-thumb {
                    aspect-ratio: 1;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    border: 2px solid transparent;
                    opacity: 0.6;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .lightbox-thumb:hover,
                .lightbox-thumb.active {
                    opacity: 1;
                }
                .lightbox-thumb.active {
                    border-color: #bf953f;
                }
                .lightbox-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .lightbox-enquire {
                    display: block;
                    margin-top: 2rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: #0B2E33;
                    color: #fff;
                    text-align: center;
                    font-weight: 700;
                    text-decoration: none;
                }
                .lightbox-enquire:hover {
                    background: #bf953f;
                }
                @media (max-width: 1024px) {
                    .approaches-grid,
                    .approach-content {
                        grid-template-columns: 1fr;
                    }
                    .portfolio-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                    .lightbox {
                        padding: 1rem;
                    }
                    .lightbox-panel {
                        flex-direction: column;
                    }
                    .lightbox-stage,
                    .lightbox-details {
                        width: 100%;
                    }
                    .lightbox-stage {
                        min-height: 50%;
                    }
                }
                @media (max-width: 640px) {
                    .portfolio-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn project_card(item: &Item, gallery: &UseReducerHandle<GalleryState>) -> Html {
    let onclick = {
        let gallery = gallery.clone();
        let id = item.id();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Open(id)))
    };
    let details = item.details();

    html! {
        <div key={item.id()} class="project-card" {onclick}>
            <div class="project-card-image">
                <img src={details.cover.clone()} alt={details.title.clone()} />
            </div>
            <div class="project-card-overlay">
                <h3>{&details.title}</h3>
                <p>{"View Gallery"}</p>
            </div>
            <div class="category-badge">{item.category().label()}</div>
        </div>
    }
}

fn lightbox(gallery: &UseReducerHandle<GalleryState>) -> Html {
    let (Some(item), Some(index)) = (gallery.open_item(), gallery.active_image_index()) else {
        return html! {};
    };
    let details = item.details();

    let dispatch = |action: GalleryAction| {
        let gallery = gallery.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            gallery.dispatch(action.clone());
        })
    };

    let thumbs = item.images().iter().enumerate().map(|(idx, src)| {
        html! {
            <div
                key={idx}
                class={classes!("lightbox-thumb", (idx == index).then(|| "active"))}
                onclick={dispatch(GalleryAction::Select(idx))}
            >
                <img src={src.clone()} alt="thumb" />
            </div>
        }
    });

    html! {
        <div class="lightbox" onclick={dispatch(GalleryAction::Close)}>
            <button class="lightbox-close" onclick={dispatch(GalleryAction::Close)}>{"✕"}</button>

            <div class="lightbox-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="lightbox-stage">
                    <div class="lightbox-frame">
                        <img key={index} src={gallery.active_image().unwrap_or_default().to_string()} alt="Gallery" />
                    </div>
                    <button class="lightbox-nav prev" onclick={dispatch(GalleryAction::Previous)}>{"‹"}</button>
                    <button class="lightbox-nav next" onclick={dispatch(GalleryAction::Next)}>{"›"}</button>
                    <div class="lightbox-counter">
                        {format!("{} / {}", index + 1, item.image_count())}
                    </div>
                </div>

                <div class="lightbox-details">
                    <h2>{&details.title}</h2>
                    <span class="lightbox-badge">{item.category().label()}</span>
                    <div class="lightbox-facts">
                        <div>{"📍 "}{&details.location}</div>
                        <div>{"📐 "}{&details.area}</div>
                        <div>{"📅 "}{&details.year}</div>
                    </div>
                    <p class="lightbox-description">{&details.description}</p>
                    <h4>{"GALLERY"}</h4>
                    <div class="lightbox-thumbs">
                        { for thumbs }
                    </div>
                    <Link<Route> to={Route::Contact} classes="lightbox-enquire">
                        {"Enquire Project →"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
