use ideapod::core::favorites::FavoriteIdea;
use ideapod::core::query::{SearchQuery, SortOption, filter_and_sort};

fn entry(idea: &str, name: Option<&str>, timestamp: Option<u64>) -> FavoriteIdea {
    FavoriteIdea {
        idea: idea.to_string(),
        name: name.map(str::to_string),
        timestamp,
    }
}

fn indices(rows: &[(usize, &FavoriteIdea)]) -> Vec<usize> {
    rows.iter().map(|(i, _)| *i).collect()
}

#[test]
fn test_case_insensitive_substring_filter_over_names_only() {
    let entries = vec![
        entry("s0", Some("Banana"), Some(1)),
        entry("s1", Some("apple"), Some(2)),
        entry("s2", Some("Cherry"), Some(3)),
    ];

    let rows = filter_and_sort(&entries, &SearchQuery::new("an", false), SortOption::Az);
    assert_eq!(indices(&rows), vec![0], "only Banana contains 'an'");

    // The sentence text is never searched.
    let rows = filter_and_sort(&entries, &SearchQuery::new("s1", false), SortOption::Az);
    assert!(rows.is_empty());
}

#[test]
fn test_exact_mode_matches_whole_names_case_insensitively() {
    let entries = vec![
        entry("s0", Some("Boss Run"), Some(1)),
        entry("s1", Some("boss run extended"), Some(2)),
    ];

    let rows = filter_and_sort(&entries, &SearchQuery::new("boss run", true), SortOption::Az);
    assert_eq!(indices(&rows), vec![0]);

    // Empty query matches everything even in exact mode.
    let rows = filter_and_sort(&entries, &SearchQuery::new("", true), SortOption::Az);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_unnamed_records_match_only_the_empty_query() {
    let entries = vec![entry("s0", None, Some(1)), entry("s1", Some("named"), Some(2))];

    let rows = filter_and_sort(&entries, &SearchQuery::new("n", false), SortOption::Az);
    assert_eq!(indices(&rows), vec![1]);

    let rows = filter_and_sort(&entries, &SearchQuery::default(), SortOption::Oldest);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_alphabetical_sort_folds_case() {
    let entries = vec![
        entry("s0", Some("Banana"), Some(1)),
        entry("s1", Some("apple"), Some(2)),
        entry("s2", Some("Cherry"), Some(3)),
    ];

    let az = filter_and_sort(&entries, &SearchQuery::default(), SortOption::Az);
    assert_eq!(indices(&az), vec![1, 0, 2]);

    let za = filter_and_sort(&entries, &SearchQuery::default(), SortOption::Za);
    assert_eq!(indices(&za), vec![2, 0, 1]);
}

#[test]
fn test_default_sort_is_newest_first_and_blanks_sink() {
    let entries = vec![
        entry("s0", Some("mid"), Some(5)),
        entry("s1", Some("no stamp"), None),
        entry("s2", Some("new"), Some(9)),
    ];

    let rows = filter_and_sort(&entries, &SearchQuery::default(), SortOption::Default);
    assert_eq!(indices(&rows), vec![2, 0, 1]);

    let rows = filter_and_sort(&entries, &SearchQuery::default(), SortOption::Oldest);
    assert_eq!(indices(&rows), vec![1, 0, 2]);
}

#[test]
fn test_equal_keys_keep_store_order() {
    let entries = vec![
        entry("s0", Some("twin"), Some(7)),
        entry("s1", Some("twin"), Some(7)),
        entry("s2", Some("twin"), Some(7)),
    ];

    for sort in [
        SortOption::Default,
        SortOption::Oldest,
        SortOption::Az,
        SortOption::Za,
    ] {
        let rows = filter_and_sort(&entries, &SearchQuery::default(), sort);
        assert_eq!(indices(&rows), vec![0, 1, 2], "{:?} must be stable", sort);
    }
}

#[test]
fn test_rows_carry_true_store_indices_through_filters() {
    let entries = vec![
        entry("s0", None, Some(1)),
        entry("s1", Some("boss run"), Some(2)),
        entry("s2", Some("Boss 2"), Some(3)),
    ];

    let rows = filter_and_sort(&entries, &SearchQuery::new("boss", false), SortOption::Oldest);
    assert_eq!(indices(&rows), vec![1, 2]);

    // Leading whitespace in the query is input noise and is ignored.
    let rows = filter_and_sort(&entries, &SearchQuery::new("   boss", false), SortOption::Oldest);
    assert_eq!(indices(&rows), vec![1, 2]);
}
