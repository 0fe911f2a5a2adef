pub const DEFAULT_OVERSHOOT_TENSION: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolator {
    Linear,
    /// Flings past the target and settles back. Higher tension, bigger fling.
    Overshoot { tension: f64 },
}

impl Interpolator {
    pub fn overshoot() -> Self {
        Self::Overshoot {
            tension: DEFAULT_OVERSHOOT_TENSION,
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }
}
