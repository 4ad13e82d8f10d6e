use crate::motion::viewport::map_range;

/// Section-level fade driven by scroll progress: opacity rises over
/// `[0, until]` while scale grows from `scale_from` to 1.
pub fn progress_style(progress: f64, until: f64, scale_from: f64) -> String {
    let opacity = map_range(progress, (0.0, until), (0.0, 1.0));
    let scale = map_range(progress, (0.0, until), (scale_from, 1.0));
    format!("opacity: {}; transform: scale({});", opacity, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_shown_past_the_input_range() {
        assert_eq!(progress_style(0.5, 0.2, 0.8), "opacity: 1; transform: scale(1);");
    }

    #[test]
    fn hidden_before_entering() {
        assert_eq!(progress_style(0.0, 0.2, 0.8), "opacity: 0; transform: scale(0.8);");
    }

    #[test]
    fn halfway() {
        assert_eq!(progress_style(0.1, 0.2, 0.8), "opacity: 0.5; transform: scale(0.9);");
    }
}
