use anyhow::Result;
use brickset::core::lego_sets::{NAME_LENGTH_THRESHOLD, TOP_NAMES_LIMIT, ZERO_PIECES_LIMIT};
use brickset::{BricksetError, LegoSet, LegoSetRepository};
use std::collections::BTreeMap;

fn town_catalog() -> LegoSetRepository {
    LegoSetRepository::from_sets(vec![
        LegoSet::new("60004-1", "Fire Station", 752)
            .with_theme("City")
            .with_subtheme("Fire")
            .with_tags(["Fire", "Truck", "Fire"]),
        LegoSet::new("60002-1", "Fire Truck", 212)
            .with_theme("City")
            .with_subtheme("Fire")
            .with_tags(["Truck", "Ladder"]),
        LegoSet::new("60047-1", "Police Station", 854)
            .with_theme("City")
            .with_subtheme("Police"),
        LegoSet::new("60004-1", "Fire Station Reissue", 752)
            .with_theme("City")
            .with_subtheme("Fire"),
        LegoSet::new("853373-1", "Kingdoms Chess Set", 0)
            .with_theme("Castle")
            .with_subtheme("Kingdoms"),
        LegoSet::new("K8701-1", "Fire Station Kit", 752).with_tags(["Fire", "Kit"]),
        LegoSet::new("5004-1", "Keyring", 0),
    ])
}

#[test]
fn test_has_sets_with_pieces_at_least() {
    let repo = town_catalog();

    assert!(repo.has_sets_with_pieces_at_least(854));
    assert!(!repo.has_sets_with_pieces_at_least(855));
    assert!(repo.has_sets_with_pieces_at_least(0));
    assert!(!LegoSetRepository::from_sets(vec![]).has_sets_with_pieces_at_least(0));
}

#[test]
fn test_tags_for_set_named_are_distinct_in_first_seen_order() {
    let repo = LegoSetRepository::from_sets(vec![
        LegoSet::new("1-1", "Twin", 1).with_tags(["b", "a", "b"]),
        LegoSet::new("2-1", "Other", 1).with_tags(["z"]),
        LegoSet::new("3-1", "Twin", 1).with_tags(["c", "a"]),
    ]);

    assert_eq!(repo.tags_for_set_named("Twin"), vec!["b", "a", "c"]);
    assert!(repo.tags_for_set_named("twin").is_empty());
    assert!(repo.tags_for_set_named("Nothing").is_empty());
}

#[test]
fn test_subthemes_in_theme() {
    let repo = town_catalog();

    assert_eq!(
        repo.subthemes_in_theme("City"),
        "Subthemes in the theme: | Fire | Police"
    );
    assert_eq!(
        repo.subthemes_in_theme("Castle"),
        "Subthemes in the theme: | Kingdoms"
    );
    // exact match only, and sets without a theme never match
    assert_eq!(repo.subthemes_in_theme("Cit"), "Subthemes in the theme:");
}

#[test]
fn test_subthemes_render_absent_subtheme_as_null_once() {
    let repo = LegoSetRepository::from_sets(vec![
        LegoSet::new("1-1", "A", 1).with_theme("Space"),
        LegoSet::new("2-1", "B", 1).with_theme("Space").with_subtheme("Blacktron"),
        LegoSet::new("3-1", "C", 1).with_theme("Space"),
    ]);
    assert_eq!(
        repo.subthemes_in_theme("Space"),
        "Subthemes in the theme: | null | Blacktron"
    );
}

#[test]
fn test_number_to_name_last_write_wins() {
    let repo = town_catalog();

    let expected: BTreeMap<String, String> = [
        ("60004-1".to_string(), "Fire Station Reissue".to_string()),
        ("K8701-1".to_string(), "Fire Station Kit".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(repo.number_to_name_for_piece_count(752), expected);
    assert!(repo.number_to_name_for_piece_count(1).is_empty());
}

#[test]
fn test_names_grouped_by_theme() {
    let repo = town_catalog();
    let groups = repo.names_grouped_by_theme();

    assert_eq!(groups.len(), 3);
    assert_eq!(
        groups[&Some("City".to_string())],
        vec![
            "Fire Station",
            "Fire Truck",
            "Police Station",
            "Fire Station Reissue"
        ]
    );
    assert_eq!(groups[&Some("Castle".to_string())], vec!["Kingdoms Chess Set"]);
    assert_eq!(groups[&None], vec!["Fire Station Kit", "Keyring"]);

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, repo.get_all().len());
}

#[test]
fn test_names_of_sets_with_zero_pieces() {
    let repo = LegoSetRepository::from_sets(vec![
        LegoSet::new("1-1", "A", 0),
        LegoSet::new("2-1", "B", 0),
        LegoSet::new("3-1", "C", 5),
    ]);
    assert_eq!(repo.names_of_sets_with_zero_pieces(ZERO_PIECES_LIMIT), vec!["A", "B"]);
    assert_eq!(repo.names_of_sets_with_zero_pieces(1), vec!["A"]);
    assert!(repo.names_of_sets_with_zero_pieces(0).is_empty());
}

#[test]
fn test_themes_starting_with_a() {
    let repo = LegoSetRepository::from_sets(vec![
        LegoSet::new("1-1", "One", 1).with_theme("Atlantis"),
        LegoSet::new("2-1", "Two", 1).with_theme("Agents"),
        LegoSet::new("3-1", "Three", 1),
        LegoSet::new("4-1", "Four", 1).with_theme("Atlantis"),
        LegoSet::new("5-1", "Five", 1).with_theme("adventurers"),
        LegoSet::new("6-1", "Six", 1).with_theme("Bionicle"),
    ]);

    assert_eq!(repo.themes_starting_with_a(), vec!["Agents", "Atlantis"]);
}

#[test]
fn test_has_theme_containing() {
    let repo = town_catalog();

    assert!(repo.has_theme_containing("Cas"));
    assert!(repo.has_theme_containing("ity"));
    assert!(!repo.has_theme_containing("city"));
    assert!(!repo.has_theme_containing("Space"));
}

#[test]
fn test_average_name_length_in_theme() -> Result<()> {
    let repo = LegoSetRepository::from_sets(vec![
        LegoSet::new("1-1", "abcd", 1).with_theme("Star Wars"),
        LegoSet::new("2-1", "ab", 1).with_theme("Star Wars Legends"),
        LegoSet::new("3-1", "abcdefghij", 1).with_theme("Technic"),
        LegoSet::new("4-1", "abcdefghij", 1),
    ]);

    assert_eq!(repo.average_name_length_in_theme("Star Wars")?, 3.0);
    assert_eq!(repo.average_name_length_in_theme("Tech")?, 10.0);
    Ok(())
}

#[test]
fn test_average_name_length_without_matches_is_an_error() {
    let repo = town_catalog();

    let err = repo.average_name_length_in_theme("Space").unwrap_err();
    assert!(matches!(err, BricksetError::EmptyResult { .. }));

    let empty = LegoSetRepository::from_sets(vec![]);
    assert!(empty.average_name_length_in_theme("").is_err());
}

#[test]
fn test_top_names_over_length() {
    let repo = LegoSetRepository::from_sets(vec![
        LegoSet::new("1-1", "Exactly Fifteen", 1),
        LegoSet::new("2-1", "Sixteen chars ok", 1),
        LegoSet::new("3-1", "Zebra Crossing Corner", 1),
        LegoSet::new("4-1", "Alpine Ski Lodge Resort", 1),
        LegoSet::new("5-1", "Medieval Market Village", 1),
        LegoSet::new("6-1", "Haunted House Deluxe", 1),
        LegoSet::new("7-1", "Creator Expert Cafe", 1),
        LegoSet::new("8-1", "Short", 1),
    ]);

    let names = repo.top_names_over_length(NAME_LENGTH_THRESHOLD, TOP_NAMES_LIMIT);
    assert_eq!(
        names,
        vec![
            "Alpine Ski Lodge Resort",
            "Creator Expert Cafe",
            "Haunted House Deluxe",
            "Medieval Market Village",
            "Sixteen chars ok",
        ]
    );
    assert_eq!(
        repo.names_over_length_joined(20, TOP_NAMES_LIMIT),
        "Alpine Ski Lodge Resort, Medieval Market Village, Zebra Crossing Corner"
    );
}

#[test]
fn test_queries_on_bundled_catalog() -> Result<()> {
    let repo = LegoSetRepository::new()?;

    assert!(repo.has_sets_with_pieces_at_least(1000));
    assert_eq!(
        repo.tags_for_set_named("Star Wars Magnet Set"),
        vec!["Darth Vader", "Luke Skywalker", "Magnet", "Clone Trooper"]
    );
    assert_eq!(
        repo.subthemes_in_theme("Bionicle"),
        "Subthemes in the theme: | Bohrok | Bohrok Va | Toa Mata | null"
    );
    assert_eq!(repo.number_to_name_for_piece_count(49).len(), 4);
    assert_eq!(
        repo.names_of_sets_with_zero_pieces(ZERO_PIECES_LIMIT),
        vec!["Star Wars Magnet Set", "Star Wars Magnet Set", "The LEGO Ideas Book"]
    );
    assert_eq!(
        repo.themes_starting_with_a(),
        vec!["Adventurers", "Agents", "Alpha Team", "Architecture", "Atlantis"]
    );
    assert!(repo.has_theme_containing("Miscellaneous"));
    assert_eq!(repo.average_name_length_in_theme("Books")?, 23.0);
    assert_eq!(
        repo.top_names_over_length(NAME_LENGTH_THRESHOLD, TOP_NAMES_LIMIT),
        vec![
            "Alpha Team Helicopter",
            "Clone Wars Pack - San Diego Comic-Con 2008 Exclusive",
            "Collectible Display Case",
            "LEGO Star Wars Character Encyclopedia",
            "Speedboat Rescue",
        ]
    );
    Ok(())
}
