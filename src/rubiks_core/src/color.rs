use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The color of a cube face, identified by its center sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    White,
}

/// A face location relative to the viewer. Unlike a `Color` this is not
/// attached to the cube, it depends on how the cube is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacePose {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

/// A quarter turn direction, as seen when looking at the turned face from
/// outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Clockwise,
    Anticlockwise,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown color {0:?}, expected one of red, green, blue, yellow, orange, white")]
    Color(String),
    #[error("Unknown face pose {0:?}, expected one of front, back, right, left, top, bottom")]
    FacePose(String),
    #[error("Unknown rotation {0:?}, expected clockwise or anticlockwise")]
    Rotation(String),
}

impl Color {
    /// Every face color, in discriminant order.
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [Red, Green, Blue, Yellow, Orange, White];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// Single letter used when printing a cube.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::White => 'W',
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl FacePose {
    /// The population random shuffles draw from.
    pub const ALL: [Self; 6] = [
        FacePose::Front,
        FacePose::Top,
        FacePose::Right,
        FacePose::Left,
        FacePose::Back,
        FacePose::Bottom,
    ];
}

impl Rotation {
    pub const ALL: [Self; 2] = [Rotation::Clockwise, Rotation::Anticlockwise];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::Anticlockwise,
            Rotation::Anticlockwise => Rotation::Clockwise,
        }
    }

    /// The pose a sticker next to the turned face travels towards. Seen from
    /// the turned face, with any adjacent face on top, a clockwise turn
    /// carries the top stickers to the right.
    #[must_use]
    pub const fn adjacent_pose(self) -> FacePose {
        match self {
            Rotation::Clockwise => FacePose::Right,
            Rotation::Anticlockwise => FacePose::Left,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for FacePose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FacePose::Front => "Front",
            FacePose::Back => "Back",
            FacePose::Right => "Right",
            FacePose::Left => "Left",
            FacePose::Top => "Top",
            FacePose::Bottom => "Bottom",
        })
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rotation::Clockwise => "Clockwise",
            Rotation::Anticlockwise => "Anticlockwise",
        })
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "g" | "green" => Ok(Color::Green),
            "b" | "blue" => Ok(Color::Blue),
            "y" | "yellow" => Ok(Color::Yellow),
            "o" | "orange" => Ok(Color::Orange),
            "w" | "white" => Ok(Color::White),
            _ => Err(ParseError::Color(s.to_owned())),
        }
    }
}

impl FromStr for FacePose {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" => Ok(FacePose::Front),
            "back" => Ok(FacePose::Back),
            "right" => Ok(FacePose::Right),
            "left" => Ok(FacePose::Left),
            "top" => Ok(FacePose::Top),
            "bottom" => Ok(FacePose::Bottom),
            _ => Err(ParseError::FacePose(s.to_owned())),
        }
    }
}

impl FromStr for Rotation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Rotation::Clockwise),
            "acw" | "ccw" | "anticlockwise" | "counterclockwise" => Ok(Rotation::Anticlockwise),
            _ => Err(ParseError::Rotation(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_distinct() {
        let mut letters = Color::ALL.map(Color::letter);
        letters.sort_unstable();
        assert!(letters.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn parse_round_trips_display() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
        for pose in FacePose::ALL {
            assert_eq!(pose.to_string().parse::<FacePose>(), Ok(pose));
        }
        for rotation in Rotation::ALL {
            assert_eq!(rotation.to_string().parse::<Rotation>(), Ok(rotation));
        }
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn inverse_is_involutive() {
        for rotation in Rotation::ALL {
            assert_ne!(rotation.inverse(), rotation);
            assert_eq!(rotation.inverse().inverse(), rotation);
        }
    }
}
