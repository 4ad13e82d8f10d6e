use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::hooks::{scroll_to_id, use_pointer_follow, use_reveal};
use crate::motion::frame::BrowserFrame;
use crate::motion::viewport::map_range;
use crate::motion::{BrowserFrames, Easing, FrameScheduler, RevealConfig};

pub const VIDEO_SRC: &str = "/videos/construction-video.mp4";
pub const PLAYBACK_RATE: f64 = 0.75;

const HEADLINE: [&str; 3] = ["Leaders in Quality", "Construction and", "Infrastructure"];

/// Overlay opacity for the current scroll offset.
pub fn gradient_opacity(scroll_y: f64) -> f64 {
    map_range(scroll_y, (0.0, 300.0), (0.3, 0.5))
}

fn start_playback(video: &HtmlVideoElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("Hero video did not start: {:?}", e);
            }
        }),
        Err(e) => debug!("Hero video did not start: {:?}", e),
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container_ref = use_node_ref();
    let video_ref = use_node_ref();
    let is_video_ready = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let light = use_pointer_follow(container_ref.clone());

    let headline_styles = use_reveal(
        HEADLINE.len(),
        RevealConfig::fade_up()
            .duration(800.0)
            .easing(Easing::HEADLINE)
            .stagger(200.0),
        true,
    );
    let indicator_style = use_reveal(
        1,
        RevealConfig::fade_up().duration(800.0).base_delay(1200.0),
        true,
    );

    {
        let video_ref = video_ref.clone();
        let is_video_ready = is_video_ready.clone();
        use_effect_with_deps(
            move |_| {
                let video = video_ref.cast::<HtmlVideoElement>();
                let frame: Rc<RefCell<Option<BrowserFrame>>> = Rc::new(RefCell::new(None));
                let mut listener = None;

                if let Some(video) = video {
                    video.set_playback_rate(PLAYBACK_RATE);
                    video.load();

                    let on_can_play = {
                        let video = video.clone();
                        let frame = frame.clone();
                        Closure::<dyn FnMut()>::new(move || {
                            let video = video.clone();
                            let is_video_ready = is_video_ready.clone();
                            let handle = BrowserFrames.request(Box::new(move |_| {
                                info!("Hero video ready");
                                is_video_ready.set(true);
                                start_playback(&video);
                            }));
                            *frame.borrow_mut() = handle;
                        })
                    };
                    let _ = video.add_event_listener_with_callback(
                        "canplay",
                        on_can_play.as_ref().unchecked_ref(),
                    );
                    listener = Some((video, on_can_play));
                }

                move || {
                    if let Some((video, on_can_play)) = listener {
                        let _ = video.remove_event_listener_with_callback(
                            "canplay",
                            on_can_play.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(handle) = frame.borrow_mut().take() {
                        BrowserFrames.cancel(handle);
                    }
                }
            },
            (),
        );
    }

    let scroll_down = Callback::from(|_: MouseEvent| scroll_to_id("services"));

    let light_style = light.map(|p| p.light_css()).unwrap_or_default();
    let gradient_style = format!("opacity: {};", gradient_opacity(scroll_y));

    html! {
        <section ref={container_ref} class="hero">
            <div class="hero-media">
                <video
                    ref={video_ref}
                    class={classes!("hero-video", (*is_video_ready).then_some("ready"))}
                    autoplay={true}
                    playsinline={true}
                    muted={true}
                    loop={true}
                    preload="auto"
                >
                    <source src={VIDEO_SRC} type="video/mp4" />
                </video>
                <div class="hero-dim"></div>
                <div class="hero-gradient" style={gradient_style}></div>
            </div>

            <div class="hero-light" style={light_style}></div>

            <div class="hero-content">
                <h1 class="hero-title">
                    { for HEADLINE.iter().zip(headline_styles).map(|(line, style)| html! {
                        <span class="hero-line" {style}>{*line}</span>
                    }) }
                </h1>

                <div class="scroll-indicator" style={indicator_style.into_iter().next().unwrap_or_default()}>
                    <span class="scroll-label">{"SCROLL DOWN"}</span>
                    <button class="scroll-mouse" onclick={scroll_down} aria-label="Scroll to services">
                        <div class="scroll-wheel"></div>
                    </button>
                    <div class="scroll-chevron">{"⌄"}</div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    background: #1B2431;
                }
                .hero-media {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .hero-video {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transform: scale(1.05);
                    opacity: 0;
                    filter: brightness(0.85);
                    transition: all 0.7s ease;
                }
                .hero-video.ready {
                    opacity: 1;
                }
                .hero-dim {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.25);
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.4), transparent, rgba(0,0,0,0.4));
                }
                .hero-light {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    text-align: center;
                }
                .hero-title {
                    color: white;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 3rem;
                }
                .hero-line {
                    display: block;
                    font-size: clamp(1.5rem, 4vw, 2.8rem);
                    line-height: 1.2;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    text-shadow: 2px 2px 4px rgba(0,0,0,0.3);
                }
                .scroll-indicator {
                    color: white;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .scroll-label {
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    margin-bottom: 0.75rem;
                }
                .scroll-mouse {
                    width: 2rem;
                    height: 3.5rem;
                    border: 2.5px solid rgba(255,255,255,0.9);
                    border-radius: 9999px;
                    background: none;
                    display: flex;
                    justify-content: center;
                    padding: 0.5rem;
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .scroll-mouse:hover {
                    border-color: #FFD700;
                }
                .scroll-wheel {
                    width: 6px;
                    height: 12px;
                    background: white;
                    border-radius: 9999px;
                    animation: scroll-down 1.5s ease-in-out infinite;
                }
                .scroll-chevron {
                    font-size: 1.75rem;
                    animation: bob 2s ease-in-out infinite;
                }
                @keyframes scroll-down {
                    0% { transform: translateY(0); opacity: 1; }
                    100% { transform: translateY(14px); opacity: 0; }
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); opacity: 1; }
                    50% { transform: translateY(5px); opacity: 0.7; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_deepens_over_first_300px() {
        assert_eq!(gradient_opacity(0.0), 0.3);
        assert!((gradient_opacity(150.0) - 0.4).abs() < 1e-9);
        assert_eq!(gradient_opacity(300.0), 0.5);
        assert_eq!(gradient_opacity(2000.0), 0.5);
    }
}
