use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::content::NAV_ITEMS;
use crate::hooks::use_motion_config;
use crate::Route;

/// Query worth searching for, if any.
pub fn normalized_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Opening an open dropdown closes it; opening another one replaces it.
pub fn toggle_dropdown(active: Option<usize>, index: usize) -> Option<usize> {
    if active == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[function_component(Search)]
pub fn search() -> Html {
    let config = use_motion_config();
    let is_open = use_state(|| false);
    let query = use_state(String::new);
    let is_loading = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_submit = {
        let query = query.clone();
        let is_loading = is_loading.clone();
        let pending = pending.clone();
        let latency = config.search_latency_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(q) = normalized_query(&query) else {
                return;
            };
            info!("Searching for '{}'", q);
            is_loading.set(true);
            let is_loading = is_loading.clone();
            *pending.borrow_mut() = Some(Timeout::new(latency, move || is_loading.set(false)));
        })
    };

    html! {
        <div class="search">
            <button class="search-toggle" onclick={toggle} aria-label="Search">{"🔍"}</button>
            if *is_open {
                <div class="search-panel">
                    <form onsubmit={on_submit}>
                        <input
                            type="text"
                            placeholder="Search..."
                            value={(*query).clone()}
                            oninput={on_input}
                        />
                        <button type="submit" disabled={*is_loading}>
                            if *is_loading {
                                <div class="spinner"></div>
                            } else {
                                {"🔍"}
                            }
                        </button>
                    </form>
                    if !query.is_empty() {
                        <div class="search-results">
                            {format!("No results found for \"{}\"", *query)}
                        </div>
                    }
                </div>
            }
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_motion_config();
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let active_dropdown = use_state(|| None::<usize>);

    let is_scrolled = scroll_y > config.header_scroll_threshold;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        let active_dropdown = active_dropdown.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
            active_dropdown.set(None);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let nav_links = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let has_dropdown = !item.dropdown.is_empty();
            let is_active = *active_dropdown == Some(index);
            let onclick = {
                let active_dropdown = active_dropdown.clone();
                Callback::from(move |_: MouseEvent| {
                    if has_dropdown {
                        active_dropdown.set(toggle_dropdown(*active_dropdown, index));
                    }
                })
            };
            html! {
                <li class={classes!("nav-item", is_active.then_some("open"))}>
                    <a href={item.href} class="nav-link" {onclick}>
                        {item.label}
                        if has_dropdown {
                            <span class="chevron">{"▾"}</span>
                        }
                    </a>
                    if has_dropdown {
                        <div class="dropdown">
                            { for item.dropdown.iter().map(|link| html! {
                                <a href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                            }) }
                        </div>
                    }
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="logo">
                    <span class="logo-name">{"SPHERE"}</span>
                    <span class="logo-sub">{"CONSTRUCTIONS"}</span>
                </Link<Route>>

                <div class="header-right">
                    <Search />
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <nav class={classes!("main-nav", (*menu_open).then_some("mobile-menu-open"))}>
                        <ul>
                            {nav_links}
                            <li>
                                <a href="#contact" class="quote-button" onclick={close_menu.clone()}>
                                    {"GET A QUOTE"}
                                </a>
                            </li>
                        </ul>
                    </nav>
                </div>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    height: 80px;
                    background: #1B2431;
                    transition: all 0.3s ease;
                }
                .site-header.scrolled {
                    height: 64px;
                    background: rgba(27, 36, 49, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                }
                .header-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 100%;
                }
                .logo {
                    background: #FFD700;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 0 1.5rem;
                    width: 290px;
                    color: #1B2431;
                    text-decoration: none;
                    transition: width 0.3s ease;
                }
                .site-header.scrolled .logo {
                    width: 240px;
                }
                .logo-name {
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .logo-sub {
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                }
                .header-right {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding-right: 2rem;
                }
                .main-nav ul {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-item {
                    position: relative;
                }
                .nav-link {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #FFD700;
                }
                .dropdown {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    margin-top: 0.5rem;
                    width: 12rem;
                    background: white;
                    border-radius: 8px;
                    overflow: hidden;
                    visibility: hidden;
                    opacity: 0;
                    transition: all 0.2s ease;
                }
                .nav-item:hover .dropdown,
                .nav-item.open .dropdown {
                    visibility: visible;
                    opacity: 1;
                }
                .dropdown a {
                    display: block;
                    padding: 0.5rem 1rem;
                    color: #374151;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .dropdown a:hover {
                    background: #f3f4f6;
                }
                .quote-button {
                    background: #FFD700;
                    color: #1B2431;
                    padding: 0.5rem 1rem;
                    border-radius: 6px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .quote-button:hover {
                    transform: scale(1.05);
                }
                .search {
                    position: relative;
                }
                .search-toggle {
                    background: none;
                    border: none;
                    color: #d1d5db;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .search-panel {
                    position: absolute;
                    right: 0;
                    top: 3rem;
                    width: 18rem;
                    background: white;
                    border-radius: 8px;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.2);
                    overflow: hidden;
                }
                .search-panel form {
                    position: relative;
                }
                .search-panel input {
                    width: 100%;
                    padding: 1rem 3rem 1rem 1rem;
                    border: none;
                    outline: none;
                    box-sizing: border-box;
                }
                .search-panel button {
                    position: absolute;
                    right: 1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .search-results {
                    border-top: 1px solid #f3f4f6;
                    padding: 1rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 2px solid #FFD700;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem 1rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #d1d5db;
                }
                @media (max-width: 1024px) {
                    .burger-menu {
                        display: flex;
                    }
                    .main-nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: #1B2431;
                        border-top: 1px solid #374151;
                        padding: 0.5rem 1rem;
                    }
                    .main-nav.mobile-menu-open {
                        display: block;
                    }
                    .main-nav ul {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
                    .dropdown {
                        position: static;
                        display: none;
                        visibility: visible;
                        opacity: 1;
                        background: transparent;
                    }
                    .nav-item.open .dropdown {
                        display: block;
                    }
                    .dropdown a {
                        color: #9ca3af;
                    }
                    .logo {
                        width: 200px;
                    }
                    .site-header.scrolled .logo {
                        width: 180px;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_are_ignored() {
        assert_eq!(normalized_query(""), None);
        assert_eq!(normalized_query("   \t"), None);
        assert_eq!(normalized_query("  bridges "), Some("bridges"));
    }

    #[test]
    fn one_dropdown_at_a_time() {
        assert_eq!(toggle_dropdown(None, 1), Some(1));
        assert_eq!(toggle_dropdown(Some(1), 1), None);
        assert_eq!(toggle_dropdown(Some(1), 3), Some(3));
    }
}
