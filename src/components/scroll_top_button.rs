use yew::prelude::*;

use crate::hooks::{scroll_to_top, use_scroll_top};

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_scroll_top();
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <button
                class={classes!("scroll-top-button", visible.then_some("visible"))}
                aria-label="Scroll to top"
                aria-hidden={(!visible).to_string()}
                {onclick}
            >
                {"↑"}
            </button>
            <style>
                {r#"
                .scroll-top-button {
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
                    opacity: 0;
                    pointer-events: none;
                    transform: translateY(20px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .scroll-top-button.visible {
                    opacity: 1;
                    pointer-events: auto;
                    transform: translateY(0);
                }
                "#}
            </style>
        </>
    }
}
