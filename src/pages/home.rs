use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::about::About;
use crate::components::clients::Clients;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::scroll_top_button::ScrollTopButton;
use crate::components::services::Services;
use crate::components::stats::Stats;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <Services />
            <About />
            <Stats />
            <Projects />
            <Clients />
            <Contact />
            <Footer />
            <ScrollTopButton />
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h2>{"Page not found"}</h2>
            <Link<Route> to={Route::Home} classes="back-link">
                {"Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .not-found .back-link {
                    color: #eab308;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
