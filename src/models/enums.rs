use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Parsing trims and ignores ASCII case, since every value comes from
/// either a user answer or a hand-edited CSV cell.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(YesNo {
    Yes => "yes",
    No => "no",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
});

str_enum!(Level {
    Low => "low",
    Normal => "normal",
    High => "high",
});

str_enum!(Outcome {
    Positive => "positive",
    Negative => "negative",
    Borderline => "borderline",
});

impl YesNo {
    pub fn code(&self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }
}

impl Gender {
    pub fn code(&self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}

impl Level {
    /// Ordinal code: low < normal < high.
    pub fn code(&self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Normal => 1.0,
            Self::High => 2.0,
        }
    }
}

impl Outcome {
    pub fn code(&self) -> u8 {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
            Self::Borderline => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn level_round_trip() {
        for (variant, s) in [
            (Level::Low, "low"),
            (Level::Normal, "normal"),
            (Level::High, "high"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Level::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(YesNo::from_str(" Yes ").unwrap(), YesNo::Yes);
        assert_eq!(Gender::from_str("FEMALE").unwrap(), Gender::Female);
        assert_eq!(Outcome::from_str("Borderline").unwrap(), Outcome::Borderline);
    }

    #[test]
    fn level_codes_are_ordinal() {
        assert_eq!(Level::Low.code(), 0.0);
        assert_eq!(Level::Normal.code(), 1.0);
        assert_eq!(Level::High.code(), 2.0);
    }

    #[test]
    fn binary_codes() {
        assert_eq!(YesNo::Yes.code(), 1.0);
        assert_eq!(YesNo::No.code(), 0.0);
        assert_eq!(Gender::Male.code(), 1.0);
        assert_eq!(Gender::Female.code(), 0.0);
    }

    #[test]
    fn invalid_enum_returns_error() {
        let err = Level::from_str("very high").unwrap_err();
        assert_eq!(err.field, "Level");
        assert_eq!(err.value, "very high");
        assert!(YesNo::from_str("maybe").is_err());
        assert!(Gender::from_str("").is_err());
    }
}
