use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;
pub const DEFAULT_ENTRANCE_EASE: &str = "back.out(1.7)";
pub const DEFAULT_EXIT_EASE: &str = "power1.out";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

impl EaseDirection {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "in" => Some(EaseDirection::In),
            "out" => Some(EaseDirection::Out),
            "inout" => Some(EaseDirection::InOut),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            EaseDirection::In => "in",
            EaseDirection::Out => "out",
            EaseDirection::InOut => "inOut",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Linear,
    /// `t^(power + 1)` on the in side.
    Power(u8),
    Sine,
    Expo,
    Circ,
    Back { overshoot: f64 },
}

/// Named easing curve, written the way animation configs usually spell
/// them: `power2.out`, `sine.inOut`, `back.out(1.7)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ease {
    pub curve: Curve,
    pub direction: EaseDirection,
}

impl Ease {
    pub const LINEAR: Ease = Ease {
        curve: Curve::Linear,
        direction: EaseDirection::Out,
    };

    pub fn new(curve: Curve, direction: EaseDirection) -> Self {
        Self { curve, direction }
    }

    pub fn back_out(overshoot: f64) -> Self {
        Self::new(Curve::Back { overshoot }, EaseDirection::Out)
    }

    pub fn entrance_default() -> Self {
        Self::back_out(1.7)
    }

    pub fn exit_default() -> Self {
        Self::new(Curve::Power(1), EaseDirection::Out)
    }

    /// Maps linear progress to eased progress. Input is clamped to `[0, 1]`
    /// and the endpoints are exact.
    pub fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.direction {
            EaseDirection::In => self.ease_in(t),
            EaseDirection::Out => 1.0 - self.ease_in(1.0 - t),
            EaseDirection::InOut => {
                if t < 0.5 {
                    self.ease_in(t * 2.0) * 0.5
                } else {
                    1.0 - self.ease_in((1.0 - t) * 2.0) * 0.5
                }
            }
        }
    }

    fn ease_in(&self, t: f64) -> f64 {
        match self.curve {
            Curve::Linear => t,
            Curve::Power(power) => t.powi(i32::from(power) + 1),
            Curve::Sine => 1.0 - (t * PI * 0.5).cos(),
            Curve::Expo => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
            Curve::Circ => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Curve::Back { overshoot } => t * t * ((overshoot + 1.0) * t - overshoot),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::entrance_default()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = self.direction.as_str();
        match self.curve {
            Curve::Linear => f.write_str("linear"),
            Curve::Power(power) => write!(f, "power{power}.{direction}"),
            Curve::Sine => write!(f, "sine.{direction}"),
            Curve::Expo => write!(f, "expo.{direction}"),
            Curve::Circ => write!(f, "circ.{direction}"),
            Curve::Back { overshoot } => write!(f, "back.{direction}({overshoot})"),
        }
    }
}

impl FromStr for Ease {
    type Err = EaseParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EaseParseError::Empty);
        }
        let (head, param) = match trimmed.find('(') {
            Some(open) => {
                let Some(inner) = trimmed[open + 1..].strip_suffix(')') else {
                    return Err(EaseParseError::InvalidParameter(trimmed.to_string()));
                };
                (&trimmed[..open], Some(inner.trim()))
            }
            None => (trimmed, None),
        };
        let (name, direction) = match head.split_once('.') {
            Some((name, direction)) => {
                let parsed = EaseDirection::parse(direction)
                    .ok_or_else(|| EaseParseError::UnknownDirection(direction.to_string()))?;
                (name, parsed)
            }
            None => (head, EaseDirection::Out),
        };
        let curve = match name.to_ascii_lowercase().as_str() {
            "linear" | "none" | "power0" => Curve::Linear,
            "power1" | "quad" => Curve::Power(1),
            "power2" | "cubic" => Curve::Power(2),
            "power3" | "quart" => Curve::Power(3),
            "power4" | "quint" | "strong" => Curve::Power(4),
            "sine" => Curve::Sine,
            "expo" => Curve::Expo,
            "circ" => Curve::Circ,
            "back" => {
                let overshoot = match param {
                    Some(raw) if !raw.is_empty() => raw
                        .parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .ok_or_else(|| EaseParseError::InvalidParameter(raw.to_string()))?,
                    _ => DEFAULT_BACK_OVERSHOOT,
                };
                return Ok(Ease::new(Curve::Back { overshoot }, direction));
            }
            _ => return Err(EaseParseError::UnknownCurve(name.to_string())),
        };
        if let Some(raw) = param {
            return Err(EaseParseError::UnexpectedParameter(raw.to_string()));
        }
        Ok(Ease::new(curve, direction))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EaseParseError {
    Empty,
    UnknownCurve(String),
    UnknownDirection(String),
    InvalidParameter(String),
    UnexpectedParameter(String),
}

impl fmt::Display for EaseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EaseParseError::Empty => f.write_str("ease name is empty"),
            EaseParseError::UnknownCurve(name) => write!(f, "unknown ease curve '{name}'"),
            EaseParseError::UnknownDirection(direction) => {
                write!(f, "unknown ease direction '{direction}'")
            }
            EaseParseError::InvalidParameter(raw) => write!(f, "invalid ease parameter '{raw}'"),
            EaseParseError::UnexpectedParameter(raw) => {
                write!(f, "ease does not take a parameter, got '{raw}'")
            }
        }
    }
}

impl std::error::Error for EaseParseError {}
