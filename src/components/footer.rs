use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const FOOTER_SERVICES: [&str; 5] = [
    "Architecture",
    "3D Animation",
    "House Planning",
    "Interior Design",
    "Construction",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"Address"}</h3>
                    <p>{config::CITY}</p>
                    <p>{config::PHONE}</p>
                    <p>{config::EMAIL}</p>
                    <div class="footer-social">
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"IG"}</a>
                        <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer">{"FB"}</a>
                    </div>
                </div>
                <div>
                    <h3>{"Services"}</h3>
                    <div class="footer-links">
                        { for FOOTER_SERVICES.iter().map(|service| html! {
                            <Link<Route> to={Route::Services}>{*service}</Link<Route>>
                        }) }
                    </div>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <div class="footer-links">
                        <Link<Route> to={Route::About}>{"About Us"}</Link<Route>>
                        <Link<Route> to={Route::Contact}>{"Contact Us"}</Link<Route>>
                        <Link<Route> to={Route::Services}>{"Our Services"}</Link<Route>>
                    </div>
                </div>
                <div>
                    <h3>{"Newsletter"}</h3>
                    <p>{"Join our community to reach new heights together."}</p>
                    <div class="footer-newsletter">
                        <input type="text" placeholder="Your email" />
                        <button>{"SignUp"}</button>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                {"© "}
                <Link<Route> to={Route::Home}>{config::SITE_NAME}</Link<Route>>
                {", All Rights Reserved."}
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0B2E33;
                    color: #93B1B5;
                    padding-top: 5rem;
                    border-top: 1px solid rgba(79, 124, 130, 0.3);
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem 3rem;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 3rem;
                }
                .site-footer h3 {
                    color: #B8E3E9;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .site-footer p {
                    margin-bottom: 0.5rem;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .footer-links a:hover {
                    color: #B8E3E9;
                    transform: translateX(0.5rem);
                }
                .footer-social {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #4F7C82;
                    border-radius: 0.25rem;
                    color: #93B1B5;
                    text-decoration: none;
                }
                .footer-social a:hover {
                    background: #B8E3E9;
                    color: #0B2E33;
                }
                .footer-newsletter {
                    position: relative;
                }
                .footer-newsletter input {
                    width: 100%;
                    padding: 0.75rem 5rem 0.75rem 1rem;
                    border: 1px solid #4F7C82;
                    border-radius: 0.25rem;
                    background: #082428;
                    color: #B8E3E9;
                }
                .footer-newsletter button {
                    position: absolute;
                    top: 0.25rem;
                    right: 0.25rem;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.25rem;
                    background: #4F7C82;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .footer-bottom {
                    border-top: 1px solid rgba(79, 124, 130, 0.3);
                    background: #082428;
                    padding: 1.5rem 1rem;
                    text-align: center;
                }
                .footer-bottom a {
                    color: #B8E3E9;
                    font-weight: 600;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }
                @media (max-width: 640px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
