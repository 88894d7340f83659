/// Easing functions for smooth animations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutBack,
    EaseOutBounce,
    /// Custom easing function mapping normalized progress to eased progress
    Custom(fn(f64) -> f64),
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            EasingFunction::EaseInQuad => t * t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t).powi(2)
                }
            }
            EasingFunction::EaseInCubic => t * t * t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - 4.0 * (1.0 - t).powi(3)
                }
            }
            EasingFunction::EaseOutBack => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
            EasingFunction::EaseOutBounce => {
                let n1 = 7.5625;
                let d1 = 2.75;

                if t < 1.0 / d1 {
                    n1 * t * t
                } else if t < 2.0 / d1 {
                    let t = t - 1.5 / d1;
                    n1 * t * t + 0.75
                } else if t < 2.5 / d1 {
                    let t = t - 2.25 / d1;
                    n1 * t * t + 0.9375
                } else {
                    let t = t - 2.625 / d1;
                    n1 * t * t + 0.984375
                }
            }
            EasingFunction::Custom(func) => func(t),
        }
    }

    /// Stable name used when encoding snapshots. `Custom` has no name.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            EasingFunction::Linear => Some("linear"),
            EasingFunction::EaseIn => Some("ease_in"),
            EasingFunction::EaseOut => Some("ease_out"),
            EasingFunction::EaseInOut => Some("ease_in_out"),
            EasingFunction::EaseInQuad => Some("ease_in_quad"),
            EasingFunction::EaseOutQuad => Some("ease_out_quad"),
            EasingFunction::EaseInOutQuad => Some("ease_in_out_quad"),
            EasingFunction::EaseInCubic => Some("ease_in_cubic"),
            EasingFunction::EaseOutCubic => Some("ease_out_cubic"),
            EasingFunction::EaseInOutCubic => Some("ease_in_out_cubic"),
            EasingFunction::EaseOutBack => Some("ease_out_back"),
            EasingFunction::EaseOutBounce => Some("ease_out_bounce"),
            EasingFunction::Custom(_) => None,
        }
    }

    /// Look up an easing function by its snapshot name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(EasingFunction::Linear),
            "ease_in" => Some(EasingFunction::EaseIn),
            "ease_out" => Some(EasingFunction::EaseOut),
            "ease_in_out" => Some(EasingFunction::EaseInOut),
            "ease_in_quad" => Some(EasingFunction::EaseInQuad),
            "ease_out_quad" => Some(EasingFunction::EaseOutQuad),
            "ease_in_out_quad" => Some(EasingFunction::EaseInOutQuad),
            "ease_in_cubic" => Some(EasingFunction::EaseInCubic),
            "ease_out_cubic" => Some(EasingFunction::EaseOutCubic),
            "ease_in_out_cubic" => Some(EasingFunction::EaseInOutCubic),
            "ease_out_back" => Some(EasingFunction::EaseOutBack),
            "ease_out_bounce" => Some(EasingFunction::EaseOutBounce),
            _ => None,
        }
    }
}
