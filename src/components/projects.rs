use yew::prelude::*;
use yew_router::prelude::*;

use super::section::progress_style;
use crate::content::{Project, PROJECTS};
use crate::hooks::{use_reveal, use_viewport};
use crate::motion::{RevealConfig, RevealStyle, WatchOptions};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub index: usize,
    pub project: &'static Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let card_ref = use_node_ref();
    let in_view = use_viewport(card_ref.clone(), WatchOptions::once().margin("-100px"));
    let style = use_reveal(
        1,
        RevealConfig::fade_up()
            .from(RevealStyle::fade_up(50.0))
            .base_delay(props.index as f64 * 200.0),
        in_view.is_visible,
    );

    html! {
        <div ref={card_ref} class="project-card" style={style.into_iter().next().unwrap_or_default()}>
            <Link<Route> to={Route::Project { id: project.id.to_string() }} classes="project-link">
                <div class="project-image">
                    <img src={project.image} alt={project.title} />
                    <div class="project-overlay">
                        <h3>{project.title}</h3>
                        <p>{project.summary}</p>
                        <span class="project-cta">{"View Project"}</span>
                    </div>
                </div>
                <span class="project-category">{project.category}</span>
                <div class="project-number">{project.number()}</div>
            </Link<Route>>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let section_ref = use_node_ref();
    let heading_view = use_viewport(section_ref.clone(), WatchOptions::once().margin("-100px"));
    let scroll = use_viewport(section_ref.clone(), WatchOptions::continuous());
    let heading_styles = use_reveal(
        3,
        RevealConfig::fade_up().base_delay(200.0).stagger(200.0),
        heading_view.is_visible,
    );
    let heading_style = |i: usize| heading_styles.get(i).cloned().unwrap_or_default();

    html! {
        <section id="projects" ref={section_ref} class="projects-section" style={progress_style(scroll.progress, 0.2, 0.8)}>
            <div class="projects-container">
                <div class="projects-heading">
                    <span class="eyebrow" style={heading_style(0)}>{"Our Portfolio"}</span>
                    <h2 style={heading_style(1)}>{"Featured Projects"}</h2>
                    <p style={heading_style(2)}>
                        {"Explore our diverse portfolio of successful projects, showcasing our expertise in construction and infrastructure development."}
                    </p>
                </div>
                <div class="projects-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} {index} {project} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .projects-section {
                    padding: 6rem 1rem;
                    background: #1B2431;
                    color: white;
                }
                .projects-container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .projects-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .projects-heading h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .projects-heading p {
                    color: #9ca3af;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .project-link {
                    position: relative;
                    display: block;
                    background: black;
                    border-radius: 8px;
                    overflow: hidden;
                    color: white;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(0,0,0,0.3);
                }
                .project-image {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.6s ease;
                }
                .project-link:hover .project-image img {
                    transform: scale(1.1);
                }
                .project-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
                }
                .project-overlay h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .project-overlay p {
                    color: #d1d5db;
                    margin-bottom: 1rem;
                }
                .project-cta {
                    color: #FFD700;
                    font-weight: 600;
                }
                .project-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: #FFD700;
                    color: #1B2431;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .project-number {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: rgba(255,255,255,0.2);
                }
                @media (max-width: 768px) {
                    .projects-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
