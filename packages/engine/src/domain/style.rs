use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    White,
    Black,
}

impl Color {
    /// Colors cycled through by the initial cube population
    pub const CUBE_CYCLE: [Color; 3] = [Color::Red, Color::Yellow, Color::Blue];

    pub fn css(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Appearance requested for an object created by `add_object`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl ObjectStyle {
    pub fn colored(color: Color) -> Self {
        Self { color: Some(color) }
    }
}
