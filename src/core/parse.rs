//! Inverse of the composer: recover structured parts from a sentence.
//!
//! The grammar is a single anchored regex over the fixed template. The
//! tone and genre land in one fused capture because both are free text;
//! they are split by matching known genres as suffixes. That split is a
//! heuristic, not a guaranteed inverse: it is exact for lexicon values
//! and best-effort for hand-edited sentences.

use crate::core::idea::IdeaParts;
use crate::core::lexicon;
use regex::Regex;
use std::sync::LazyLock;

static IDEA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(An?)\s+(.+?)\s+with\s+([^,]+),\s+seen from\s+(an?)\s+([^,]+)\s+perspective,\s+where\s+([^,]+),\s+and\s+([^.]+)\.$",
    )
    .expect("idea grammar regex compiles")
});

/// Split the fused "tone genre" run. The longest known genre that suffixes
/// the run wins; with no known genre the last space splits it.
fn split_tone_genre(run: &str) -> (String, String) {
    let mut found: Option<&str> = None;
    for genre in lexicon::GENRES {
        if run.ends_with(*genre) && found.map_or(true, |f| genre.len() > f.len()) {
            found = Some(genre);
        }
    }
    if let Some(genre) = found {
        let tone = run[..run.len() - genre.len()].trim().to_string();
        return (tone, genre.to_string());
    }
    match run.rsplit_once(' ') {
        Some((tone, genre)) => (tone.to_string(), genre.to_string()),
        None => (String::new(), run.to_string()),
    }
}

/// Parse a composed sentence back into parts. `None` when the sentence
/// does not follow the template. Articles are matched but not stored;
/// `compose` re-derives them.
pub fn parse(sentence: &str) -> Option<IdeaParts> {
    let caps = IDEA_RE.captures(sentence)?;
    let (tone, genre) = split_tone_genre(caps.get(2)?.as_str());
    Some(IdeaParts {
        tone,
        genre,
        mechanic: caps.get(3)?.as_str().trim().to_string(),
        perspective: caps.get(5)?.as_str().trim().to_string(),
        role: caps.get(6)?.as_str().trim().to_string(),
        twist: caps.get(7)?.as_str().trim().to_string(),
    })
}
