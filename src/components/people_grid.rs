use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::tilt_card::TiltCard;

#[derive(PartialEq)]
pub struct Person {
    pub name: &'static str,
    pub role: &'static str,
    pub img: &'static str,
}

pub static DIRECTORS: [Person; 2] = [
    Person { name: "Mr. Muthyal Ashwin Kumar", role: "CEO & Founder", img: "img/founder.png" },
    Person { name: "Mr. Eeswar", role: "Director", img: "img/MDIR.svg" },
];

#[derive(Properties, PartialEq)]
pub struct PeopleGridProps {
    pub people: &'static [Person],
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(PeopleGrid)]
pub fn people_grid(props: &PeopleGridProps) -> Html {
    html! {
        <div class={classes!("people-grid", props.compact.then(|| "compact"))}>
            { for props.people.iter().map(|person| html! {
                <Reveal start={0.9}>
                    <TiltCard class="person-card">
                        <div class="person-photo">
                            <img src={person.img} alt={person.name} />
                        </div>
                        <div class="person-text">
                            <h3>{person.name}</h3>
                            <p>{person.role}</p>
                        </div>
                    </TiltCard>
                </Reveal>
            }) }
            <style>
                {r#"
                .people-grid {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 3rem;
                }
                .people-grid.compact {
                    gap: 2rem;
                }
                .person-card {
                    width: 18rem;
                    border-radius: 2rem;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .people-grid.compact .person-card {
                    width: 16rem;
                    border-radius: 1.5rem;
                }
                .person-card:hover {
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .person-photo {
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    background: #f3f4f6;
                }
                .person-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: top;
                    transition: transform 0.7s ease;
                }
                .person-card:hover .person-photo img {
                    transform: scale(1.1);
                }
                .person-text {
                    padding: 1.5rem;
                    text-align: center;
                }
                .person-text h3 {
                    font-size: 1.25rem;
                    color: #0B2E33;
                }
                .person-text p {
                    color: #bf953f;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                "#}
            </style>
        </div>
    }
}
