use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SumVariant {
    Right,
    Left,
    Midpoint,
    Upper,
    Lower
}

impl SumVariant {
    pub const ALL: [SumVariant; 5] = [
        SumVariant::Right,
        SumVariant::Left,
        SumVariant::Midpoint,
        SumVariant::Upper,
        SumVariant::Lower
    ];

    /// Short machine tag, also used in frame names.
    pub fn tag(&self) -> &'static str {
        match self {
            SumVariant::Right => "right",
            SumVariant::Left => "left",
            SumVariant::Midpoint => "midpoint",
            SumVariant::Upper => "upper",
            SumVariant::Lower => "lower"
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SumVariant::Right => "Right Riemann sum",
            SumVariant::Left => "Left Riemann sum",
            SumVariant::Midpoint => "Midpoint Riemann sum",
            SumVariant::Upper => "Upper Riemann sum",
            SumVariant::Lower => "Lower Riemann sum"
        }
    }
}

impl fmt::Display for SumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SumVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "right" => Ok(SumVariant::Right),
            "left" => Ok(SumVariant::Left),
            "midpoint" | "mid" => Ok(SumVariant::Midpoint),
            "upper" => Ok(SumVariant::Upper),
            "lower" => Ok(SumVariant::Lower),
            _ => Err(format!("invalid sum variant: {s}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for variant in SumVariant::ALL {
            assert_eq!(variant.tag().parse::<SumVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn parsing_is_lenient_on_case_and_space() {
        assert_eq!(" Upper ".parse::<SumVariant>().unwrap(), SumVariant::Upper);
        assert_eq!("MID".parse::<SumVariant>().unwrap(), SumVariant::Midpoint);
        assert!("trapezoid".parse::<SumVariant>().is_err());
    }

    #[test]
    fn serde_uses_tags() {
        assert_eq!(serde_json::to_string(&SumVariant::Midpoint).unwrap(), "\"midpoint\"");
        let v: SumVariant = serde_json::from_str("\"lower\"").unwrap();
        assert_eq!(v, SumVariant::Lower);
    }
}
