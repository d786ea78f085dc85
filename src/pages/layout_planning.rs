use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::marquee::Marquee;
use crate::components::page_hero::PageHero;
use crate::components::reveal::Reveal;
use crate::config;
use crate::hooks::use_page;
use crate::Route;

static FLOOR_PLAN_DETAILS: [&str; 6] = [
    "G+2 Multi-Story Design",
    "Dedicated 12'9\" Parking",
    "Vaastu-Compliant Rooms",
    "Optimized Setbacks",
    "Spacious Portico areas",
    "Integrated Utility spaces",
];

static COLUMN_GRID_DETAILS: [&str; 6] = [
    "Accurate Center-to-Center Marks",
    "12-Point Structural Grid",
    "Precise Setback Verification",
    "Alignment for G+2 Loading",
    "Engineering Calibration",
    "Road-Facing Orientation",
];

static FOOTING_DETAILS: [&str; 6] = [
    "Standardized Foundation Mesh",
    "Multiple Footing Sizes",
    "Reinforcement Placement",
    "Excavation Boundaries",
    "Corner Load Management",
    "Depth & Alignment Control",
];

#[derive(Properties, PartialEq)]
struct PlanSectionProps {
    id: &'static str,
    subtitle: &'static str,
    title: &'static str,
    description: &'static str,
    img: &'static str,
    details: &'static [&'static str],
    #[prop_or_default]
    reverse: bool,
}

/// One drawing with its write-up; `reverse` puts the drawing on the left.
#[function_component(PlanSection)]
fn plan_section(props: &PlanSectionProps) -> Html {
    html! {
        <section id={props.id} class={classes!("plan-section", props.reverse.then(|| "reverse"))}>
            <Reveal start={0.75} class="container plan-row">
                <div class="plan-copy">
                    <div class="plan-subtitle">
                        <span class="plan-rule"></span>
                        <span>{props.subtitle}</span>
                    </div>
                    <h2>{props.title}</h2>
                    <p>{props.description}</p>
                    <div class="plan-details">
                        { for props.details.iter().map(|detail| html! {
                            <div class="plan-detail">
                                <span class="plan-dot"></span>
                                <span>{*detail}</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="plan-drawing">
                    <img src={props.img} alt={props.title} />
                    <div class="plan-drawing-caption">
                        <div>
                            <p class="plan-drawing-label">{"Technical Drawing"}</p>
                            <p>{"High Resolution View"}</p>
                        </div>
                        <a href={props.img} target="_blank" rel="noopener noreferrer" class="plan-open">{"⤢"}</a>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(LayoutPlanning)]
pub fn layout_planning() -> Html {
    use_page("Layout Planning");

    html! {
        <div class="layout-page">
            <PageHero eyebrow="Architectural Portfolio" title="LAYOUT" highlight="PLANNING" />
            <Marquee text="Floor Plans • Structural Grid • Foundation Layout • " />

            <PlanSection
                id="plans"
                subtitle="Space Utilization"
                title="Architectural Floor Plans"
                description="A comprehensive multi-level design for a 30' x 40' residential project. This layout emphasizes functional flow, ample parking, and optimized living areas across Ground, First, and Second floors."
                img="/Geotechnical/lo3.jpeg"
                details={&FLOOR_PLAN_DETAILS[..]}
            />
            <PlanSection
                id="columns"
                reverse={true}
                subtitle="Structural Skeleton"
                title="Column Center Line Layout"
                description="Precision is the foundation of safety. This technical grid defines the exact center-to-center coordinates for all load-bearing columns, ensuring the weight of the structure is distributed perfectly across the 30' span."
                img="/Geotechnical/lo2.jpeg"
                details={&COLUMN_GRID_DETAILS[..]}
            />
            <PlanSection
                id="footings"
                subtitle="Foundation Detail"
                title="Engineering Footing Layout"
                description="The backbone of the building. This layout specifies the dimensions and placement of footings (4', 5', and 6' sizes) based on soil strata analysis to guarantee long-term structural integrity."
                img="/Geotechnical/lo1.jpeg"
                details={&FOOTING_DETAILS[..]}
            />

            <section class="blueprint-cta">
                <Reveal class="container blueprint-inner">
                    <h2>{"Need a Technical Blueprint?"}</h2>
                    <p>
                        {"Our team provides end-to-end planning services, from conceptual floor plans to detailed civil engineering drawings ready for construction."}
                    </p>
                    <div class="blueprint-actions">
                        <div class="blueprint-phone">
                            <span class="blueprint-phone-icon">{"☎"}</span>
                            <div>
                                <p class="blueprint-phone-label">{"Direct Line"}</p>
                                <p class="blueprint-phone-number">{config::PHONE}</p>
                            </div>
                        </div>
                        <span class="blueprint-divider"></span>
                        <Link<Route> to={Route::Contact} classes="blueprint-link">
                            {"Get Free Consultation →"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </section>

            <style>
                {r#"
                .layout-page {
                    background: #fff;
                    overflow-x: hidden;
                }
                .plan-section {
                    padding: 6rem 0;
                    background: #fff;
                }
                .plan-section.reverse {
                    background: rgba(184, 227, 233, 0.2);
                }
                .plan-row {
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }
                .plan-section.reverse .plan-row {
                    flex-direction: row-reverse;
                }
                .plan-copy,
                .plan-drawing {
                    flex: 1;
                    min-width: 0;
                }
                .plan-subtitle {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #bf953f;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .plan-rule {
                    width: 3rem;
                    height: 2px;
                    background: #bf953f;
                }
                .plan-copy h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .plan-copy p {
                    color: #4F7C82;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .plan-details {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .plan-detail {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    background: #fff;
                    border: 1px solid rgba(184, 227, 233, 0.6);
                    font-weight: 600;
                    transition: border-color 0.3s ease;
                }
                .plan-detail:hover {
                    border-color: #bf953f;
                }
                .plan-dot {
                    flex-shrink: 0;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #bf953f;
                }
                .plan-drawing {
                    position: relative;
                    border-radius: 2.5rem;
                    overflow: hidden;
                    background: #fff;
                    border: 8px solid #fff;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .plan-drawing img {
                    display: block;
                    width: 100%;
                    border-radius: 2rem;
                    transition: transform 0.7s ease;
                }
                .plan-drawing:hover img {
                    transform: scale(1.05);
                }
                .plan-drawing-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(11, 46, 51, 0.85), transparent);
                    color: #fff;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .plan-drawing:hover .plan-drawing-caption {
                    opacity: 1;
                }
                .plan-drawing-label {
                    color: #bf953f;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .plan-open {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    color: #fff;
                    font-size: 1.25rem;
                    text-decoration: none;
                }
                .blueprint-cta {
                    padding: 6rem 0;
                    background: #0B2E33;
                    color: #B8E3E9;
                }
                .blueprint-inner {
                    text-align: center;
                    max-width: 56rem;
                }
                .blueprint-inner h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    margin-bottom: 1.5rem;
                }
                .blueprint-inner p {
                    color: #93B1B5;
                    font-size: 1.125rem;
                    margin-bottom: 3rem;
                }
                .blueprint-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                }
                .blueprint-phone {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-align: left;
                }
                .blueprint-phone-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(191, 149, 63, 0.2);
                    color: #bf953f;
                    font-size: 1.5rem;
                }
                .blueprint-inner .blueprint-phone-label {
                    margin: 0;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .blueprint-inner .blueprint-phone-number {
                    margin: 0;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .blueprint-divider {
                    width: 1px;
                    height: 3rem;
                    background: rgba(184, 227, 233, 0.2);
                }
                .blueprint-link {
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    background: #bf953f;
                    color: #0B2E33;
                    font-weight: 700;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }
                .blueprint-link:hover {
                    transform: scale(1.05);
                }
                @media (max-width: 1024px) {
                    .plan-row,
                    .plan-section.reverse .plan-row {
                        flex-direction: column;
                    }
                    .blueprint-divider {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
