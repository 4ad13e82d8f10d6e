use yew::prelude::*;

use super::section::progress_style;
use crate::content::STATS;
use crate::hooks::{use_count_up, use_motion_config, use_reveal, use_viewport};
use crate::motion::{RevealConfig, WatchOptions};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: u64,
    pub label: AttrValue,
    pub icon: AttrValue,
    pub start_counting: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let config = use_motion_config();
    let counter_ref = use_node_ref();
    let in_view = use_viewport(counter_ref.clone(), WatchOptions::once().margin("-50px"));
    let style = use_reveal(1, RevealConfig::fade_up(), in_view.is_visible);
    let count = use_count_up(props.value, config.count_duration_ms, props.start_counting);

    html! {
        <div ref={counter_ref} class="stat-counter" style={style.into_iter().next().unwrap_or_default()}>
            <div class="stat-icon">{props.icon.clone()}</div>
            <span class="stat-value">
                {count}
                <span class="stat-caret"></span>
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let stats_ref = use_node_ref();
    let start = use_viewport(stats_ref.clone(), WatchOptions::once().threshold(0.2));
    let scroll = use_viewport(stats_ref.clone(), WatchOptions::continuous());

    html! {
        <section class="stats-section">
            <div class="stats-glow"></div>
            <div ref={stats_ref} class="stats-grid" style={progress_style(scroll.progress, 0.2, 0.8)}>
                { for STATS.iter().map(|stat| html! {
                    <StatCounter
                        value={stat.value}
                        label={stat.label}
                        icon={stat.icon}
                        start_counting={start.is_visible}
                    />
                }) }
            </div>
            <style>
                {r#"
                .stats-section {
                    position: relative;
                    width: 100%;
                    padding: 6rem 1rem;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #f9fafb, white);
                }
                .stats-glow {
                    position: absolute;
                    top: -12rem;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(254, 249, 195, 0.3);
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: pulse-glow 8s ease-in-out infinite;
                }
                @keyframes pulse-glow {
                    0%, 100% { transform: scale(1); opacity: 0.3; }
                    50% { transform: scale(1.2); opacity: 0.2; }
                }
                .stats-grid {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .stat-counter {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1rem;
                    background: rgba(255,255,255,0.5);
                    backdrop-filter: blur(4px);
                }
                .stat-icon {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                    transition: transform 0.3s ease;
                }
                .stat-counter:hover .stat-icon {
                    transform: scale(1.1);
                }
                .stat-value {
                    position: relative;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #1B2431;
                    font-variant-numeric: tabular-nums;
                    margin-bottom: 0.25rem;
                }
                .stat-caret {
                    position: absolute;
                    right: -0.5rem;
                    top: 0;
                    height: 100%;
                    width: 2px;
                    background: #eab308;
                    animation: blink 1s linear infinite;
                }
                @keyframes blink {
                    0%, 100% { opacity: 0; }
                    50% { opacity: 1; }
                }
                .stat-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                    font-weight: 500;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
