/// Timing curves used by reveal transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// The curve the hero headline uses.
    pub const HEADLINE: Easing = Easing::CubicBezier(0.6, -0.05, 0.01, 0.99);

    /// The value for a CSS `transition-timing-function`.
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names_the_bezier() {
        assert_eq!(Easing::HEADLINE.css(), "cubic-bezier(0.6, -0.05, 0.01, 0.99)");
    }

    #[test]
    fn keyword_curves_map_to_timing_functions() {
        assert_eq!(Easing::default().css(), "linear");
        assert_eq!(Easing::EaseOut.css(), "cubic-bezier(0.33, 1, 0.68, 1)");
    }
}
