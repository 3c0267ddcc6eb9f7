//! Idea composition: the sentence template, article agreement, and
//! lock-aware rolls.

use crate::core::lexicon::Category;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One structured idea: a value for each of the six categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaParts {
    pub tone: String,
    pub genre: String,
    pub mechanic: String,
    pub perspective: String,
    pub role: String,
    pub twist: String,
}

impl IdeaParts {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Tone => &self.tone,
            Category::Genre => &self.genre,
            Category::Mechanic => &self.mechanic,
            Category::Perspective => &self.perspective,
            Category::Role => &self.role,
            Category::Twist => &self.twist,
        }
    }
}

/// Which categories survive the next roll unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockState {
    pub tone: bool,
    pub genre: bool,
    pub mechanic: bool,
    pub perspective: bool,
    pub role: bool,
    pub twist: bool,
}

impl LockState {
    pub fn is_locked(&self, category: Category) -> bool {
        match category {
            Category::Tone => self.tone,
            Category::Genre => self.genre,
            Category::Mechanic => self.mechanic,
            Category::Perspective => self.perspective,
            Category::Role => self.role,
            Category::Twist => self.twist,
        }
    }

    pub fn set(&mut self, category: Category, locked: bool) {
        match category {
            Category::Tone => self.tone = locked,
            Category::Genre => self.genre = locked,
            Category::Mechanic => self.mechanic = locked,
            Category::Perspective => self.perspective = locked,
            Category::Role => self.role = locked,
            Category::Twist => self.twist = locked,
        }
    }

    pub fn any(&self) -> bool {
        Category::ALL.iter().any(|c| self.is_locked(*c))
    }
}

/// "An" before a leading vowel, "A" otherwise. The empty string takes "A".
pub fn article_for(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "An",
        _ => "A",
    }
}

/// Render the canonical sentence. `parse` is its inverse for lexicon values.
pub fn compose(parts: &IdeaParts) -> String {
    format!(
        "{} {} {} with {}, seen from {} {} perspective, where {}, and {}.",
        article_for(&parts.tone),
        parts.tone,
        parts.genre,
        parts.mechanic,
        article_for(&parts.perspective).to_lowercase(),
        parts.perspective,
        parts.role,
        parts.twist,
    )
}

/// Roll a fresh idea. Locked categories keep the previous value. Without a
/// previous idea there is nothing to hold, so every category is drawn.
pub fn generate<R: Rng>(
    current: Option<&IdeaParts>,
    locks: &LockState,
    rng: &mut R,
) -> IdeaParts {
    let mut pick = |category: Category| -> String {
        match current {
            Some(prev) if locks.is_locked(category) => prev.get(category).to_string(),
            _ => category
                .words()
                .choose(rng)
                .map(|w| (*w).to_string())
                .unwrap_or_default(),
        }
    };
    IdeaParts {
        tone: pick(Category::Tone),
        genre: pick(Category::Genre),
        mechanic: pick(Category::Mechanic),
        perspective: pick(Category::Perspective),
        role: pick(Category::Role),
        twist: pick(Category::Twist),
    }
}
