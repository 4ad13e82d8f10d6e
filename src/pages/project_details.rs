use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::{use_window_scroll, use_window_size};
use yew_router::prelude::*;

use crate::content::{find_project, Project};
use crate::hooks::{scroll_to_id, scroll_to_top, use_motion_config, use_reveal};
use crate::motion::scroll_top::{above, below};
use crate::motion::RevealConfig;
use crate::Route;

pub const BACK_TO_TOP_AFTER: f64 = 300.0;
pub const SCROLL_HINT_UNTIL: f64 = 200.0;

/// Which floating control the project page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatingControl {
    BackToTop,
    ScrollDown,
    Hidden,
}

impl FloatingControl {
    pub fn for_viewport(width: f64, scroll_y: f64, breakpoint: f64) -> Self {
        let is_mobile = width <= breakpoint;
        if is_mobile {
            if above(scroll_y, BACK_TO_TOP_AFTER) {
                FloatingControl::BackToTop
            } else {
                FloatingControl::Hidden
            }
        } else if below(scroll_y, SCROLL_HINT_UNTIL) {
            FloatingControl::ScrollDown
        } else {
            FloatingControl::Hidden
        }
    }
}

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

/// Slide the autoplay timer moves to, or `None` when there is nothing to
/// cycle through.
pub fn autoplay_next(current: usize, len: usize) -> Option<usize> {
    (len > 1).then(|| next_slide(current, len))
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub images: &'static [&'static str],
    pub title: AttrValue,
}

#[function_component(ImageSlider)]
pub fn image_slider(props: &SliderProps) -> Html {
    let config = use_motion_config();
    let current = use_state_eq(|| 0usize);
    let len = props.images.len();

    // Restarted on every slide change, so manual navigation also resets the
    // autoplay delay.
    {
        let slide = current.clone();
        use_effect_with_deps(
            move |(index, interval_ms)| {
                let timeout = autoplay_next(*index, len).map(|next| {
                    let slide = slide.clone();
                    Timeout::new(*interval_ms, move || slide.set(next))
                });
                move || drop(timeout)
            },
            (*current, config.slider_interval_ms),
        );
    }

    let go_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_slide(*current, len)))
    };
    let go_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_slide(*current, len)))
    };

    html! {
        <div class="slider">
            <div class="slider-track" style={format!("transform: translateX(-{}%);", *current * 100)}>
                { for props.images.iter().enumerate().map(|(i, src)| html! {
                    <div class="slide" key={i}>
                        <img src={*src} alt={format!("{} - Image {}", props.title, i + 1)} />
                    </div>
                }) }
            </div>
            <button class="slider-nav slider-prev" onclick={go_prev} aria-label="Previous image">{"‹"}</button>
            <button class="slider-nav slider-next" onclick={go_next} aria-label="Next image">{"›"}</button>
            <div class="slider-dots">
                { for (0..len).map(|i| {
                    let onclick = {
                        let current = current.clone();
                        Callback::from(move |_: MouseEvent| current.set(i))
                    };
                    html! {
                        <button
                            key={i}
                            class={classes!("slider-dot", (*current == i).then_some("active"))}
                            aria-label={format!("Go to image {}", i + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsProps {
    pub id: AttrValue,
}

#[function_component(ProjectDetails)]
pub fn project_details(props: &ProjectDetailsProps) -> Html {
    match find_project(&props.id) {
        Some(project) => html! { <ProjectView {project} /> },
        None => html! {
            <div class="project-missing">
                <h2>{"Project not found"}</h2>
                <Link<Route> to={Route::Home} classes="back-link">
                    {"Back to Projects"}
                </Link<Route>>
                <style>{STYLE}</style>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ProjectViewProps {
    project: &'static Project,
}

#[function_component(ProjectView)]
fn project_view(props: &ProjectViewProps) -> Html {
    let project = props.project;
    let config = use_motion_config();
    let (width, _) = use_window_size();
    let (_, scroll_y) = use_window_scroll();

    let title_styles = use_reveal(2, RevealConfig::fade_up().base_delay(200.0).stagger(200.0), true);
    let paragraph_styles = use_reveal(
        project.description.len(),
        RevealConfig::fade_up()
            .duration(f64::from(config.reveal_duration_ms))
            .base_delay(600.0)
            .stagger(100.0),
        true,
    );
    let title_style = |i: usize| title_styles.get(i).cloned().unwrap_or_default();

    let control = FloatingControl::for_viewport(width, scroll_y, config.mobile_breakpoint);
    let floating = match control {
        FloatingControl::BackToTop => html! {
            <button class="floating-button" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
                aria-label="Back to top">{"↑"}</button>
        },
        FloatingControl::ScrollDown => html! {
            <button class="floating-button"
                onclick={Callback::from(|_: MouseEvent| scroll_to_id("project-content"))}
                aria-label="Scroll to project details">{"↓"}</button>
        },
        FloatingControl::Hidden => html! {},
    };

    html! {
        <div class="project-page">
            <div class="project-hero">
                <img class="project-hero-image" src={project.image} alt={project.title} />
                <div class="project-hero-text">
                    <span class="project-hero-category" style={title_style(0)}>{project.category}</span>
                    <h1 style={title_style(1)}>{project.title}</h1>
                </div>
                {floating}
            </div>

            <div id="project-content" class="project-content">
                <div class="project-description">
                    <h2>{"Project Overview"}</h2>
                    { for project.description.iter().zip(paragraph_styles).map(|(text, style)| html! {
                        <p {style}>{*text}</p>
                    }) }
                    <Link<Route> to={Route::Home} classes="back-link">
                        {"← Back to Projects"}
                    </Link<Route>>
                </div>
                <div class="project-gallery">
                    <ImageSlider images={project.gallery} title={project.title} />
                </div>
            </div>
            <style>{STYLE}</style>
        </div>
    }
}

const STYLE: &str = r#"
.project-page {
    min-height: 100vh;
    background: #f9fafb;
}
.project-hero {
    position: relative;
    height: 70vh;
    background: #1B2431;
    overflow: hidden;
}
.project-hero-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.3;
}
.project-hero-text {
    position: relative;
    z-index: 1;
    height: 100%;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    color: white;
    text-align: center;
    padding: 0 1rem;
}
.project-hero-category {
    background: #FFD700;
    color: #1B2431;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    font-weight: 500;
    margin-bottom: 1rem;
}
.project-hero-text h1 {
    font-size: clamp(2rem, 5vw, 3.75rem);
    font-weight: 700;
}
.floating-button {
    position: fixed;
    bottom: 2rem;
    right: 2rem;
    z-index: 40;
    width: 3rem;
    height: 3rem;
    border: none;
    border-radius: 50%;
    background: #FFD700;
    color: #1B2431;
    font-size: 1.25rem;
    cursor: pointer;
    box-shadow: 0 10px 15px rgba(0,0,0,0.2);
}
.project-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 4rem 1rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
}
.project-description h2 {
    font-size: 1.875rem;
    font-weight: 700;
    color: #1B2431;
    margin-bottom: 1.5rem;
}
.project-description p {
    color: #4b5563;
    line-height: 1.7;
    margin-bottom: 1rem;
}
.back-link {
    display: inline-block;
    margin-top: 1.5rem;
    color: #eab308;
    font-weight: 600;
    text-decoration: none;
}
.back-link:hover {
    color: #ca8a04;
}
.slider {
    position: relative;
    overflow: hidden;
    border-radius: 12px;
    aspect-ratio: 4 / 3;
}
.slider-track {
    display: flex;
    height: 100%;
    transition: transform 0.5s ease;
}
.slide {
    flex: 0 0 100%;
    height: 100%;
}
.slide img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.slider-nav {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    width: 2.5rem;
    height: 2.5rem;
    border: none;
    border-radius: 50%;
    background: rgba(255,255,255,0.8);
    font-size: 1.5rem;
    cursor: pointer;
}
.slider-prev {
    left: 1rem;
}
.slider-next {
    right: 1rem;
}
.slider-dots {
    position: absolute;
    bottom: 1rem;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    gap: 0.5rem;
}
.slider-dot {
    width: 0.6rem;
    height: 0.6rem;
    border: none;
    border-radius: 50%;
    background: rgba(255,255,255,0.5);
    cursor: pointer;
}
.slider-dot.active {
    background: #FFD700;
}
.project-missing {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}
.project-missing h2 {
    font-size: 1.5rem;
    font-weight: 700;
    color: #1f2937;
}
@media (max-width: 768px) {
    .project-content {
        grid-template-columns: 1fr;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_wrap_both_ways() {
        assert_eq!(next_slide(3, 4), 0);
        assert_eq!(next_slide(1, 4), 2);
        assert_eq!(prev_slide(0, 4), 3);
        assert_eq!(prev_slide(0, 0), 0);
    }

    #[test]
    fn autoplay_cycles_only_with_several_images() {
        assert_eq!(autoplay_next(0, 4), Some(1));
        assert_eq!(autoplay_next(3, 4), Some(0));
        assert_eq!(autoplay_next(0, 1), None);
        assert_eq!(autoplay_next(0, 0), None);
    }

    #[test]
    fn mobile_shows_back_to_top_past_300() {
        assert_eq!(FloatingControl::for_viewport(375.0, 300.0, 768.0), FloatingControl::Hidden);
        assert_eq!(FloatingControl::for_viewport(375.0, 301.0, 768.0), FloatingControl::BackToTop);
        assert_eq!(FloatingControl::for_viewport(768.0, 900.0, 768.0), FloatingControl::BackToTop);
    }

    #[test]
    fn desktop_shows_scroll_hint_near_top() {
        assert_eq!(FloatingControl::for_viewport(1280.0, 0.0, 768.0), FloatingControl::ScrollDown);
        assert_eq!(FloatingControl::for_viewport(1280.0, 199.0, 768.0), FloatingControl::ScrollDown);
        assert_eq!(FloatingControl::for_viewport(1280.0, 200.0, 768.0), FloatingControl::Hidden);
    }
}
