use chrono::{Datelike, Local};
use yew::prelude::*;

pub fn copyright(year: i32) -> String {
    format!("© {} Sphere Constructions", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{copyright(year)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #1B2431;
                    color: #9ca3af;
                    text-align: center;
                    padding: 2rem 1rem;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Sphere Constructions");
    }
}
