use ideapod::core::idea::{self, IdeaParts};
use ideapod::core::parse::parse;

#[test]
fn test_parses_a_canonical_sentence_into_six_parts() {
    let parts = parse(
        "A dark and tragic roguelike with stealth mechanics, seen from \
         an isometric perspective, where you play as the environment, \
         and you control gravity.",
    )
    .expect("canonical sentence should parse");
    assert_eq!(parts.tone, "dark and tragic");
    assert_eq!(parts.genre, "roguelike");
    assert_eq!(parts.mechanic, "stealth mechanics");
    assert_eq!(parts.perspective, "isometric");
    assert_eq!(parts.role, "you play as the environment");
    assert_eq!(parts.twist, "you control gravity");
}

#[test]
fn test_longest_genre_suffix_beats_the_last_space_split() {
    // "idle idle clicker" would split to ("idle idle", "clicker") on the
    // last space; the known genre "idle clicker" claims the longer suffix.
    let parts = parse(
        "An idle idle clicker with crafting system, seen from \
         an isometric perspective, where you play as the environment, \
         and you control gravity.",
    )
    .unwrap();
    assert_eq!(parts.tone, "idle");
    assert_eq!(parts.genre, "idle clicker");
}

#[test]
fn test_unknown_genre_splits_on_the_last_space() {
    let parts = parse(
        "A gloomy farmcore with crafting system, seen from a top-down \
         perspective, where you play as a god, and no violence allowed.",
    )
    .unwrap();
    assert_eq!(parts.tone, "gloomy");
    assert_eq!(parts.genre, "farmcore");
}

#[test]
fn test_single_word_run_becomes_a_bare_genre() {
    let parts = parse(
        "A roguelike with resource gathering, seen from a first-person \
         perspective, where you play as a god, and no violence allowed.",
    )
    .unwrap();
    assert_eq!(parts.tone, "");
    assert_eq!(parts.genre, "roguelike");

    // A tone-less idea still renders and parses back to itself.
    let again = parse(&idea::compose(&parts)).unwrap();
    assert_eq!(again, parts);
}

#[test]
fn test_near_misses_are_rejected() {
    // No terminal period.
    assert!(
        parse(
            "A dark platformer with crafting system, seen from a top-down \
             perspective, where you play as a god, and no violence allowed"
        )
        .is_none()
    );
    // Wrong joiner.
    assert!(
        parse(
            "A dark platformer with crafting system, viewed from a top-down \
             perspective, where you play as a god, and no violence allowed."
        )
        .is_none()
    );
    // Missing the perspective clause entirely.
    assert!(parse("A dark platformer with crafting system, where you play as a god.").is_none());
    // Not starting with an article.
    assert!(
        parse(
            "The dark platformer with crafting system, seen from a top-down \
             perspective, where you play as a god, and no violence allowed."
        )
        .is_none()
    );
}

#[test]
fn test_surrounding_whitespace_in_captures_is_trimmed() {
    let parts = parse(
        "A dark  platformer with  crafting system , seen from a  top-down  \
         perspective, where  you play as a god , and  no violence allowed .",
    );
    // Extra internal whitespace inside captures survives the regex but the
    // edges are trimmed.
    let parts = parts.expect("whitespace-padded sentence should still parse");
    assert_eq!(parts.mechanic, "crafting system");
    assert_eq!(parts.perspective, "top-down");
    assert_eq!(parts.role, "you play as a god");
    assert_eq!(parts.twist, "no violence allowed");
}

#[test]
fn test_curly_apostrophes_survive_the_round_trip() {
    let parts = IdeaParts {
        tone: "satirical".to_string(),
        genre: "party game".to_string(),
        mechanic: "multiplayer sabotage".to_string(),
        perspective: "hand-drawn 2D".to_string(),
        role: "you’re a janitor cleaning up after heroes".to_string(),
        twist: "it's all narrated by a sarcastic AI".to_string(),
    };
    assert_eq!(parse(&idea::compose(&parts)), Some(parts));
}
