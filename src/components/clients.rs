use yew::prelude::*;

use super::section::progress_style;
use crate::content::CLIENTS;
use crate::hooks::{use_reveal, use_viewport};
use crate::motion::{RevealConfig, WatchOptions};

#[function_component(Clients)]
pub fn clients() -> Html {
    let section_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let scroll = use_viewport(section_ref.clone(), WatchOptions::continuous());
    let heading_view = use_viewport(section_ref.clone(), WatchOptions::once());
    let grid_view = use_viewport(grid_ref.clone(), WatchOptions::once().margin("-50px"));

    let heading_styles = use_reveal(2, RevealConfig::fade_up().stagger(200.0), heading_view.is_visible);
    let tile_styles = use_reveal(
        CLIENTS.len(),
        RevealConfig::fade_up().duration(500.0).stagger(100.0),
        grid_view.is_visible,
    );
    let heading_style = |i: usize| heading_styles.get(i).cloned().unwrap_or_default();

    html! {
        <section ref={section_ref} class="clients-section">
            <div class="clients-glow clients-glow-top"></div>
            <div class="clients-glow clients-glow-bottom"></div>
            <div class="clients-container" style={progress_style(scroll.progress, 0.2, 0.8)}>
                <div class="clients-heading">
                    <span class="eyebrow" style={heading_style(0)}>{"Our Trusted Partners"}</span>
                    <h2 style={heading_style(1)}>{"Our Clients"}</h2>
                    <div class="heading-rule"></div>
                </div>
                <div ref={grid_ref} class="clients-grid">
                    { for CLIENTS.iter().zip(tile_styles).map(|(client, style)| html! {
                        <div key={client.name} class="client-tile" {style}>
                            <div class="client-card">
                                <div class="client-icon">{client.icon}</div>
                                <h3>{client.name}</h3>
                                <p>{client.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .clients-section {
                    position: relative;
                    width: 100%;
                    padding: 6rem 1rem;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #f9fafb, white);
                }
                .clients-glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: pulse-glow 8s ease-in-out infinite;
                }
                .clients-glow-top {
                    top: -12rem;
                    right: 0;
                    background: rgba(254, 249, 195, 0.3);
                }
                .clients-glow-bottom {
                    bottom: -12rem;
                    left: -12rem;
                    background: rgba(219, 234, 254, 0.2);
                    animation-direction: reverse;
                }
                .clients-container {
                    position: relative;
                    max-width: 1400px;
                    margin: 0 auto;
                }
                .clients-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .clients-heading h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    color: #1B2431;
                    margin-bottom: 1.5rem;
                }
                .clients-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 2rem;
                }
                .client-card {
                    height: 100%;
                    padding: 1.5rem;
                    text-align: center;
                    background: rgba(255,255,255,0.5);
                    backdrop-filter: blur(4px);
                    border-radius: 12px;
                    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
                    transition: transform 0.3s ease;
                }
                .client-card:hover {
                    transform: translateY(-8px) scale(1.02);
                }
                .client-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .client-card h3 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #1B2431;
                    margin-bottom: 0.5rem;
                }
                .client-card p {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                @media (max-width: 1024px) {
                    .clients-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .clients-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
