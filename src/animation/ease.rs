use std::{fmt, str::FromStr};

use crate::foundation::error::HalftoneError;

/// Radius-progression curve.
///
/// Input is normalized vertical progress, output is the multiplicative coefficient applied to
/// the dot radius. Curves are evaluated exactly as written, without clamping, so inputs outside
/// `[0, 1]` extrapolate the formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// `t`
    #[default]
    Linear,
    /// `t²`
    InQuad,
    /// `sqrt(1 - (t - 1)²)`
    OutCirc,
    /// `2^(10(t - 1))`, pinned to `0` at `t == 0`.
    InExpo,
    /// `1 - 2^(-10t)`, pinned to `1` at `t == 1`.
    OutExpo,
    /// Quadratic in, quadratic out, split at `t = 0.5`.
    InOutQuad,
    /// Quartic in, quartic out, split at `t = 0.5`.
    InOutQuart,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutCirc,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutQuad,
        Ease::InOutQuart,
    ];

    /// Evaluate the curve at `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutCirc => {
                let u = t - 1.0;
                (1.0 - u * u).sqrt()
            }
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    (10.0 * (t - 1.0)).exp2()
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - (-10.0 * t).exp2()
                }
            }
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0 * t - 1.0;
                    -0.5 * (u * (u - 2.0) - 1.0)
                }
            }
            Self::InOutQuart => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t * t
                } else {
                    let u = t - 2.0;
                    -0.5 * (u * u * u * u - 2.0)
                }
            }
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutCirc => "out_circ",
            Self::InExpo => "in_expo",
            Self::OutExpo => "out_expo",
            Self::InOutQuad => "in_out_quad",
            Self::InOutQuart => "in_out_quart",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ease {
    type Err = HalftoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == key)
            .ok_or_else(|| HalftoneError::validation(format!("unknown ease '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
