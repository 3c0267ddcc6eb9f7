use ideapod::core::idea::{self, IdeaParts, LockState};
use ideapod::core::lexicon::Category;
use ideapod::core::parse;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn baseline() -> IdeaParts {
    IdeaParts {
        tone: "philosophical".to_string(),
        genre: "platformer".to_string(),
        mechanic: "turn-based combat".to_string(),
        perspective: "top-down".to_string(),
        role: "you play as a god".to_string(),
        twist: "no violence allowed".to_string(),
    }
}

fn with_word(category: Category, word: &str) -> IdeaParts {
    let mut parts = baseline();
    match category {
        Category::Tone => parts.tone = word.to_string(),
        Category::Genre => parts.genre = word.to_string(),
        Category::Mechanic => parts.mechanic = word.to_string(),
        Category::Perspective => parts.perspective = word.to_string(),
        Category::Role => parts.role = word.to_string(),
        Category::Twist => parts.twist = word.to_string(),
    }
    parts
}

#[test]
fn test_compose_then_parse_recovers_every_lexicon_word() {
    for category in Category::ALL {
        for word in category.words() {
            let parts = with_word(category, word);
            let sentence = idea::compose(&parts);
            let back = parse::parse(&sentence)
                .unwrap_or_else(|| panic!("unparsable sentence: {}", sentence));
            assert_eq!(back, parts, "round trip broke on {:?} = {}", category, word);
        }
    }
}

#[test]
fn test_random_rolls_always_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let locks = LockState::default();
    for _ in 0..100 {
        let parts = idea::generate(None, &locks, &mut rng);
        let sentence = idea::compose(&parts);
        assert_eq!(parse::parse(&sentence).as_ref(), Some(&parts), "{}", sentence);
    }
}

#[test]
fn test_locked_categories_survive_a_hundred_rerolls() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut locks = LockState::default();
    locks.set(Category::Genre, true);
    locks.set(Category::Twist, true);

    let first = idea::generate(None, &locks, &mut rng);
    let mut current = first.clone();
    for _ in 0..100 {
        let next = idea::generate(Some(&current), &locks, &mut rng);
        assert_eq!(next.genre, first.genre);
        assert_eq!(next.twist, first.twist);
        for category in Category::ALL {
            assert!(
                category.words().contains(&next.get(category)),
                "{:?} value {:?} is not from its list",
                category,
                next.get(category)
            );
        }
        current = next;
    }
}

#[test]
fn test_locks_do_nothing_without_a_previous_idea() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut locks = LockState::default();
    for category in Category::ALL {
        locks.set(category, true);
    }
    let parts = idea::generate(None, &locks, &mut rng);
    for category in Category::ALL {
        assert!(category.words().contains(&parts.get(category)));
    }
}

#[test]
fn test_sentence_articles_agree_with_tone_and_perspective() {
    let parts = with_word(Category::Tone, "absurd and goofy");
    assert!(idea::compose(&parts).starts_with("An absurd and goofy"));

    let parts = with_word(Category::Tone, "dark and tragic");
    assert!(idea::compose(&parts).starts_with("A dark and tragic"));

    let parts = with_word(Category::Perspective, "isometric");
    assert!(
        idea::compose(&parts).contains("seen from an isometric perspective"),
        "{}",
        idea::compose(&parts)
    );

    let parts = with_word(Category::Perspective, "top-down");
    assert!(idea::compose(&parts).contains("seen from a top-down perspective"));
}
