use std::fmt;

use serde::{Deserialize, Serialize};

/// Style tag attached to every shape.
///
/// The named variants are the board widget's stock brushes. Anything else
/// round-trips through [`Brush::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Brush {
    Green,
    Red,
    #[default]
    Blue,
    Yellow,
    Custom(String),
}

impl Brush {
    pub fn name(&self) -> &str {
        match self {
            Brush::Green => "green",
            Brush::Red => "red",
            Brush::Blue => "blue",
            Brush::Yellow => "yellow",
            Brush::Custom(name) => name,
        }
    }
}

impl From<&str> for Brush {
    fn from(name: &str) -> Self {
        match name {
            "green" => Brush::Green,
            "red" => Brush::Red,
            "blue" => Brush::Blue,
            "yellow" => Brush::Yellow,
            other => Brush::Custom(other.to_string()),
        }
    }
}

impl From<String> for Brush {
    fn from(name: String) -> Self {
        match Brush::from(name.as_str()) {
            Brush::Custom(_) => Brush::Custom(name),
            stock => stock,
        }
    }
}

impl From<Brush> for String {
    fn from(brush: Brush) -> Self {
        match brush {
            Brush::Custom(name) => name,
            stock => stock.name().to_string(),
        }
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
