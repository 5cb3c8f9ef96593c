use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status code reported by the environment for a single position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardStatus {
    None,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoves,
    Unknown(i64),
}

impl BoardStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => BoardStatus::None,
            1 => BoardStatus::Checkmate,
            2 => BoardStatus::Stalemate,
            3 => BoardStatus::InsufficientMaterial,
            4 => BoardStatus::FiftyMoves,
            code => BoardStatus::Unknown(code),
        }
    }

    pub fn to_outcome(self) -> Outcome {
        match self {
            BoardStatus::None => Outcome::None,
            BoardStatus::Checkmate => Outcome::Decisive,
            _ => Outcome::Draw,
        }
    }
}

/// Per ply game status: still running, drawn, or decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    None,
    Draw,
    Decisive,
}

impl Outcome {
    pub fn value(&self) -> f32 {
        match self {
            Outcome::None => 0.0,
            Outcome::Draw => 0.5,
            Outcome::Decisive => 1.0,
        }
    }

    pub fn from_value(value: f32) -> Option<Self> {
        if value == 0.0 {
            Some(Outcome::None)
        } else if value == 0.5 {
            Some(Outcome::Draw)
        } else if value == 1.0 {
            Some(Outcome::Decisive)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != Outcome::None
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.value())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f32::deserialize(deserializer)?;

        Outcome::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid outcome value {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_to_outcome() {
        assert_eq!(BoardStatus::from_code(0).to_outcome(), Outcome::None);
        assert_eq!(BoardStatus::from_code(1).to_outcome(), Outcome::Decisive);
        assert_eq!(BoardStatus::from_code(2).to_outcome(), Outcome::Draw);
        assert_eq!(BoardStatus::from_code(3).to_outcome(), Outcome::Draw);
        assert_eq!(BoardStatus::from_code(4).to_outcome(), Outcome::Draw);
        assert_eq!(BoardStatus::from_code(17), BoardStatus::Unknown(17));
        assert_eq!(BoardStatus::from_code(17).to_outcome(), Outcome::Draw);
    }

    #[test]
    fn test_outcome_values() {
        assert_eq!(Outcome::None.value(), 0.0);
        assert_eq!(Outcome::Draw.value(), 0.5);
        assert_eq!(Outcome::Decisive.value(), 1.0);
        assert!(!Outcome::None.is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }

    #[test]
    fn test_outcome_json() {
        let outcomes = vec![Outcome::None, Outcome::Draw, Outcome::Decisive];
        let json = serde_json::to_string(&outcomes).unwrap();

        assert_eq!(json, "[0.0,0.5,1.0]");
        assert_eq!(serde_json::from_str::<Vec<Outcome>>("[0, 0.5, 1]").unwrap(), outcomes);
        assert!(serde_json::from_str::<Outcome>("0.25").is_err());
    }
}
