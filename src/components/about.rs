use yew::prelude::*;

use crate::hooks::{use_reveal, use_viewport};
use crate::motion::{RevealConfig, RevealStyle, WatchOptions};

const PARAGRAPHS: [&str; 3] = [
    "With over two decades of experience in the construction industry, we have established ourselves as leaders in quality construction and infrastructure development. Our commitment to excellence and innovation has made us the preferred choice for complex construction projects across the region.",
    "Our team of highly skilled professionals brings expertise in modern construction techniques, sustainable building practices, and cutting-edge project management. We pride ourselves on delivering projects that not only meet but exceed our clients' expectations.",
    "From initial concept to final completion, we ensure every project benefits from our meticulous attention to detail, commitment to quality, and innovative solutions that set new standards in the construction industry.",
];

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let in_view = use_viewport(section_ref.clone(), WatchOptions::once().margin("-100px"));
    let text_style = use_reveal(1, RevealConfig::fade_up().from(RevealStyle::fade_side(-40.0)), in_view.is_visible);
    let image_style = use_reveal(
        1,
        RevealConfig::fade_up().from(RevealStyle::fade_side(40.0)).base_delay(200.0),
        in_view.is_visible,
    );

    html! {
        <section id="about" ref={section_ref} class="about-section">
            <div class="about-grid">
                <div class="about-text" style={text_style.into_iter().next().unwrap_or_default()}>
                    <h2>{"ABOUT"}</h2>
                    <div class="about-rule"></div>
                    { for PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                </div>
                <div class="about-image" style={image_style.into_iter().next().unwrap_or_default()}>
                    <img src="/images/about/construction-site.jpg" alt="Construction Site" />
                </div>
            </div>
            <style>
                {r#"
                .about-section {
                    padding: 5rem 1rem;
                }
                .about-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-text h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .about-rule {
                    width: 96px;
                    height: 4px;
                    background: #eab308;
                    margin-bottom: 2rem;
                }
                .about-text p {
                    color: #4b5563;
                    font-size: 1.125rem;
                    margin-bottom: 1.5rem;
                }
                .about-image {
                    height: 600px;
                }
                .about-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 8px;
                    box-shadow: 0 20px 25px rgba(0,0,0,0.15);
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-image {
                        order: -1;
                        height: 400px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
