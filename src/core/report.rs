//! Printing wrappers over the catalog queries, and the numbered demo run
//! that exercises all of them against one catalog.

use crate::core::lego_sets::{
    LegoSetRepository, NAME_LENGTH_THRESHOLD, NULL_LABEL, TOP_NAMES_LIMIT, ZERO_PIECES_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Arguments the demo passes to the parameterised queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoParams {
    pub min_pieces: u32,
    pub set_name: String,
    pub theme: String,
    pub piece_count: u32,
    pub contains_theme: String,
    pub average_theme: String,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            min_pieces: 1000,
            set_name: "Star Wars Magnet Set".to_string(),
            theme: "Bionicle".to_string(),
            piece_count: 49,
            contains_theme: "Miscellaneous".to_string(),
            average_theme: "Books".to_string(),
        }
    }
}

/// All demo results in one value, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub has_sets_with_min_pieces: bool,
    pub tags: Vec<String>,
    pub subthemes: String,
    pub numbers_with_piece_count: BTreeMap<String, String>,
    pub names_by_theme: BTreeMap<String, Vec<String>>,
    pub zero_piece_names: Vec<String>,
    pub themes_starting_with_a: Vec<String>,
    pub has_theme_containing: bool,
    /// `None` when no theme contains the configured substring.
    pub average_name_length: Option<f64>,
    pub long_names: String,
}

/// Theme groups keyed by theme name, the absent theme keyed as `null`.
pub fn names_by_theme(repo: &LegoSetRepository) -> BTreeMap<String, Vec<String>> {
    repo.names_grouped_by_theme()
        .into_iter()
        .map(|(theme, names)| (theme.unwrap_or_else(|| NULL_LABEL.to_string()), names))
        .collect()
}

pub fn demo_report(repo: &LegoSetRepository, params: &DemoParams) -> DemoReport {
    DemoReport {
        has_sets_with_min_pieces: repo.has_sets_with_pieces_at_least(params.min_pieces),
        tags: repo.tags_for_set_named(&params.set_name),
        subthemes: repo.subthemes_in_theme(&params.theme),
        numbers_with_piece_count: repo.number_to_name_for_piece_count(params.piece_count),
        names_by_theme: names_by_theme(repo),
        zero_piece_names: repo.names_of_sets_with_zero_pieces(ZERO_PIECES_LIMIT),
        themes_starting_with_a: repo.themes_starting_with_a(),
        has_theme_containing: repo.has_theme_containing(&params.contains_theme),
        average_name_length: repo.average_name_length_in_theme(&params.average_theme).ok(),
        long_names: repo.names_over_length_joined(NAME_LENGTH_THRESHOLD, TOP_NAMES_LIMIT),
    }
}

pub fn print_tags_of_set_named<W: Write>(
    out: &mut W,
    repo: &LegoSetRepository,
    name: &str,
) -> io::Result<()> {
    for tag in repo.tags_for_set_named(name) {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

pub fn print_names_with_zero_pieces<W: Write>(
    out: &mut W,
    repo: &LegoSetRepository,
) -> io::Result<()> {
    for name in repo.names_of_sets_with_zero_pieces(ZERO_PIECES_LIMIT) {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

pub fn print_themes_starting_with_a<W: Write>(
    out: &mut W,
    repo: &LegoSetRepository,
) -> io::Result<()> {
    for theme in repo.themes_starting_with_a() {
        writeln!(out, "{}", theme)?;
    }
    Ok(())
}

pub fn run_demo<W: Write>(
    out: &mut W,
    repo: &LegoSetRepository,
    params: &DemoParams,
) -> io::Result<()> {
    tracing::debug!("Running demo over {} sets", repo.get_all().len());

    writeln!(
        out,
        "1. Are there sets with at least {} pieces?",
        params.min_pieces
    )?;
    writeln!(out, "{}", repo.has_sets_with_pieces_at_least(params.min_pieces))?;

    writeln!(out, "2. Distinct tags of the set named '{}':", params.set_name)?;
    print_tags_of_set_named(out, repo, &params.set_name)?;

    writeln!(out, "3. Subthemes in the theme '{}':", params.theme)?;
    writeln!(out, "{}", repo.subthemes_in_theme(&params.theme))?;

    writeln!(
        out,
        "4. Number and name of sets with exactly {} pieces:",
        params.piece_count
    )?;
    for (number, name) in repo.number_to_name_for_piece_count(params.piece_count) {
        writeln!(out, "{} = {}", number, name)?;
    }

    writeln!(out, "5. Set names grouped by theme:")?;
    for (theme, names) in names_by_theme(repo) {
        writeln!(out, "{} = [{}]", theme, names.join(", "))?;
    }

    writeln!(out, "6. First {} sets with zero pieces:", ZERO_PIECES_LIMIT)?;
    print_names_with_zero_pieces(out, repo)?;

    writeln!(out, "7. Themes starting with A:")?;
    print_themes_starting_with_a(out, repo)?;

    writeln!(
        out,
        "8. Is there a theme containing '{}'?",
        params.contains_theme
    )?;
    writeln!(out, "{}", repo.has_theme_containing(&params.contains_theme))?;

    writeln!(
        out,
        "9. Average name length in themes containing '{}':",
        params.average_theme
    )?;
    match repo.average_name_length_in_theme(&params.average_theme) {
        Ok(average) => writeln!(out, "{}", average)?,
        Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
    }

    writeln!(
        out,
        "10. First {} names longer than {} characters:",
        TOP_NAMES_LIMIT, NAME_LENGTH_THRESHOLD
    )?;
    writeln!(
        out,
        "{}",
        repo.names_over_length_joined(NAME_LENGTH_THRESHOLD, TOP_NAMES_LIMIT)
    )?;

    Ok(())
}
