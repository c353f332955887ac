//! Color themes for the maze view.
//!
//! Three palettes, selectable at startup via `MAZE_THEME` and cyclable at
//! runtime. Theme is presentation state only; the core never sees it.

use std::env;

use crate::fb::Rgb;

/// The colors a theme assigns to each part of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub wall: Rgb,
    pub bg: Rgb,
    pub path: Rgb,
    pub goal: Rgb,
    pub player: Rgb,
    pub accent: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Neon,
    Pastel,
    Sakura,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Neon => Palette {
                wall: Rgb::new(255, 61, 158),
                bg: Rgb::new(15, 0, 20),
                path: Rgb::new(11, 6, 16),
                goal: Rgb::new(0, 255, 204),
                player: Rgb::new(255, 209, 220),
                accent: Rgb::new(0, 255, 204),
            },
            Theme::Pastel => Palette {
                wall: Rgb::new(245, 157, 187),
                bg: Rgb::new(255, 247, 251),
                path: Rgb::new(255, 238, 255),
                goal: Rgb::new(189, 224, 254),
                player: Rgb::new(255, 179, 193),
                accent: Rgb::new(255, 179, 193),
            },
            Theme::Sakura => Palette {
                wall: Rgb::new(255, 127, 191),
                bg: Rgb::new(255, 240, 246),
                path: Rgb::new(255, 245, 250),
                goal: Rgb::new(255, 214, 224),
                player: Rgb::new(255, 159, 207),
                accent: Rgb::new(255, 127, 191),
            },
        }
    }

    /// The next theme in the cycle (wraps around).
    pub fn cycle(&self) -> Self {
        match self {
            Theme::Neon => Theme::Pastel,
            Theme::Pastel => Theme::Sakura,
            Theme::Sakura => Theme::Neon,
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "neon" => Some(Theme::Neon),
            "pastel" => Some(Theme::Pastel),
            "sakura" => Some(Theme::Sakura),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Neon => "neon",
            Theme::Pastel => "pastel",
            Theme::Sakura => "sakura",
        }
    }

    /// Read `MAZE_THEME`, defaulting to neon on anything unrecognized.
    pub fn from_env_or_default() -> Self {
        env::var("MAZE_THEME")
            .ok()
            .and_then(|v| Theme::from_str(&v))
            .unwrap_or(Theme::Neon)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Neon
    }
}
