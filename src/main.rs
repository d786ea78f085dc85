use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod gallery;
mod hooks;
mod scroll;
mod tabs;

mod components {
    pub mod cursor;
    pub mod enquiry_form;
    pub mod footer;
    pub mod marquee;
    pub mod page_hero;
    pub mod people_grid;
    pub mod reveal;
    pub mod tilt_card;
    pub mod video_section;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod geotechnical;
    pub mod home;
    pub mod layout_planning;
    pub mod projects;
    pub mod services;
}

use components::cursor::FluidCursor;
use components::footer::Footer;
use pages::{
    about::About,
    contact::Contact,
    geotechnical::Geotechnical,
    home::Home,
    layout_planning::LayoutPlanning,
    projects::Projects,
    services::Services,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/service")]
    Services,
    #[at("/project")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/Geotechnical")]
    Geotechnical,
    #[at("/LayoutPlanning")]
    LayoutPlanning,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Navigation bar order.
const NAV_ROUTES: [Route; 7] = [
    Route::Home,
    Route::About,
    Route::Services,
    Route::Projects,
    Route::Contact,
    Route::Geotechnical,
    Route::LayoutPlanning,
];

impl Route {
    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home | Route::NotFound => "Home",
            Route::About => "About",
            Route::Services => "Services",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
            Route::Geotechnical => "Geotechnical",
            Route::LayoutPlanning => "Layout Planning",
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Geotechnical => {
            info!("Rendering Geotechnical page");
            html! { <Geotechnical /> }
        },
        Route::LayoutPlanning => {
            info!("Rendering Layout Planning page");
            html! { <LayoutPlanning /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="img/icons/BHPL-logo.png" alt="BHPL Logo" />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ROUTES.iter().map(|route| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                    {route.nav_label()}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <FluidCursor />
            <div class="site">
                <Nav />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: #B8E3E9;
                    color: #0B2E33;
                    -webkit-font-smoothing: antialiased;
                    overflow-x: hidden;
                }
                ::selection {
                    background: #4F7C82;
                    color: #fff;
                }
                .site-main {
                    min-height: calc(100vh - 400px);
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .gold-text {
                    background: linear-gradient(to right, #bf953f, #fcf6ba, #b38728);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .eyebrow {
                    color: #bf953f;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin-bottom: 1rem;
                }
                .section-heading {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }
                .section-heading h1,
                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(60px);
                    transition: opacity 1s cubic-bezier(0.22, 1, 0.36, 1), transform 1s cubic-bezier(0.22, 1, 0.36, 1);
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .check-list {
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .check-list li::before {
                    content: '✓';
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.5rem;
                    height: 1.5rem;
                    margin-right: 0.75rem;
                    border-radius: 50%;
                    background: #bf953f;
                    color: #fff;
                    font-size: 0.75rem;
                }
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(147, 177, 181, 0.2);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    position: relative;
                }
                .nav-logo img {
                    height: 60px;
                    width: auto;
                    transition: transform 0.3s ease;
                }
                .nav-logo:hover img {
                    transform: scale(1.05);
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    position: relative;
                    color: #4F7C82;
                    font-weight: 700;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    width: 0;
                    height: 2px;
                    background: #4F7C82;
                    transition: width 0.3s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #0B2E33;
                }
                .nav-link:hover::after,
                .nav-link.active::after {
                    width: 100%;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    padding: 0.5rem;
                    border: 1px solid #4F7C82;
                    border-radius: 0.25rem;
                    background: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 1.5rem;
                    height: 2px;
                    background: #0B2E33;
                }
                @media (max-width: 1024px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                    .nav-links > div {
                        padding: 0.75rem 0;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/service"), Some(Route::Services));
        assert_eq!(Route::recognize("/project"), Some(Route::Projects));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::recognize("/Geotechnical"), Some(Route::Geotechnical));
        assert_eq!(Route::recognize("/LayoutPlanning"), Some(Route::LayoutPlanning));
    }

    #[test]
    fn nav_routes_round_trip_their_paths() {
        for route in NAV_ROUTES.iter() {
            assert_eq!(Route::recognize(&route.to_path()).as_ref(), Some(route));
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
