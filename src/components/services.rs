use yew::prelude::*;

use super::section::progress_style;
use crate::content::SERVICES;
use crate::hooks::{use_reveal, use_viewport};
use crate::motion::{RevealConfig, RevealStyle, WatchOptions};

#[function_component(Services)]
pub fn services() -> Html {
    let grid_ref = use_node_ref();
    let in_view = use_viewport(grid_ref.clone(), WatchOptions::once().margin("-20px"));
    let scroll = use_viewport(grid_ref.clone(), WatchOptions::continuous());

    let title_style = use_reveal(1, RevealConfig::fade_up().duration(300.0), in_view.is_visible);
    let card_styles = use_reveal(
        SERVICES.len(),
        RevealConfig::fade_up()
            .from(RevealStyle::fade_up(20.0).scaled(0.95))
            .duration(300.0)
            .stagger(100.0),
        in_view.is_visible,
    );

    let cards = SERVICES.iter().zip(card_styles).map(|(service, style)| {
        html! {
            <div class="service-card" {style}>
                <div class="service-image">
                    <img src={service.image} alt={service.title} />
                    <div class="service-image-shade"></div>
                </div>
                <div class="service-body">
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                    <div class="service-more">
                        <div class="service-rule"></div>
                        <span>{"Learn More"}</span>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="services" class="services-section">
            <div class="services-container">
                <div class="section-heading" style={title_style.into_iter().next().unwrap_or_default()}>
                    <span class="eyebrow">{"Our Expertise"}</span>
                    <h2>{"Services"}</h2>
                    <div class="heading-rule"></div>
                    <p>{"Delivering excellence in construction through innovative solutions and unparalleled expertise"}</p>
                </div>
                <div ref={grid_ref} class="services-grid" style={progress_style(scroll.progress, 0.3, 1.0)}>
                    { for cards }
                </div>
            </div>
            <style>
                {r#"
                .services-section {
                    position: relative;
                    width: 100%;
                    padding: 6rem 0;
                    background: linear-gradient(to bottom, #f9fafb, white);
                    overflow: hidden;
                }
                .services-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .section-heading {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }
                .eyebrow {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: #eab308;
                    margin-bottom: 0.75rem;
                }
                .section-heading h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    color: #1B2431;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .heading-rule {
                    width: 96px;
                    height: 4px;
                    background: #FFD700;
                    margin: 0 auto 1.5rem;
                }
                .section-heading p {
                    color: #4b5563;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    background: white;
                    overflow: hidden;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 1px 2px rgba(0,0,0,0.05);
                }
                .service-card:hover {
                    box-shadow: 0 20px 25px rgba(0,0,0,0.1);
                }
                .service-image {
                    position: relative;
                    height: 13rem;
                    overflow: hidden;
                }
                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease-out;
                }
                .service-card:hover .service-image img {
                    transform: scale(1.08);
                }
                .service-image-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.3), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .service-card:hover .service-image-shade {
                    opacity: 1;
                }
                .service-body {
                    padding: 2rem;
                }
                .service-body h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1B2431;
                    margin-bottom: 1rem;
                }
                .service-card:hover h3 {
                    color: #eab308;
                }
                .service-body p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                .service-more {
                    display: flex;
                    align-items: center;
                    margin-top: 1.5rem;
                    color: #eab308;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                }
                .service-rule {
                    width: 48px;
                    height: 2px;
                    background: #eab308;
                    margin-right: 1rem;
                }
                "#}
            </style>
        </section>
    }
}
