//! The fixed word lists ideas are drawn from.
//!
//! Six categories feed the sentence template. The lists are data, not
//! configuration: they version with the binary so that previously saved
//! sentences keep parsing after an upgrade.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const GENRES: &[&str] = &[
    "platformer",
    "roguelike",
    "survival game",
    "puzzle game",
    "visual novel",
    "deck builder",
    "idle clicker",
    "management sim",
    "metroidvania",
    "party game",
];

pub const MECHANICS: &[&str] = &[
    "physics-based puzzles",
    "turn-based combat",
    "time loop progression",
    "resource gathering",
    "card collection",
    "conversation-based gameplay",
    "stealth mechanics",
    "rhythm-based movement",
    "multiplayer sabotage",
    "crafting system",
];

pub const TWISTS: &[&str] = &[
    "set entirely in a dream world",
    "every level is randomly generated",
    "you play as the villain",
    "it's all narrated by a sarcastic AI",
    "takes place inside a computer",
    "your choices reset every 60 seconds",
    "you control gravity",
    "no violence allowed",
    "you can't directly control the main character",
];

pub const TONES: &[&str] = &[
    "dark and tragic",
    "absurd and goofy",
    "mysterious and eerie",
    "inspirational and emotional",
    "philosophical",
    "satirical",
];

pub const PERSPECTIVES: &[&str] = &[
    "top-down",
    "side-scrolling",
    "first-person",
    "isometric",
    "text-only interface",
    "hand-drawn 2D",
];

pub const ROLES: &[&str] = &[
    "you play as a god",
    "you play as the villain",
    "you play as the environment",
    "you play as a talking animal",
    "you’re the game’s narrator",
    "you’re a janitor cleaning up after heroes",
    "you control multiple characters at once",
];

/// The six slots of an idea, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tone,
    Genre,
    Mechanic,
    Perspective,
    Role,
    Twist,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tone,
        Category::Genre,
        Category::Mechanic,
        Category::Perspective,
        Category::Role,
        Category::Twist,
    ];

    pub fn words(self) -> &'static [&'static str] {
        match self {
            Category::Tone => TONES,
            Category::Genre => GENRES,
            Category::Mechanic => MECHANICS,
            Category::Perspective => PERSPECTIVES,
            Category::Role => ROLES,
            Category::Twist => TWISTS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Tone => "tone",
            Category::Genre => "genre",
            Category::Mechanic => "mechanic",
            Category::Perspective => "perspective",
            Category::Role => "role",
            Category::Twist => "twist",
        }
    }
}
