//! Runs one command-line query against a catalog and writes its result.

use crate::config::Command;
use crate::core::lego_sets::LegoSetRepository;
use crate::core::report::{self, DemoParams};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Text output is one value per line; `json` switches every command,
/// `demo` included, to a single pretty-printed JSON document.
pub fn execute<W: Write>(
    out: &mut W,
    repo: &LegoSetRepository,
    command: &Command,
    params: &DemoParams,
    json: bool,
) -> Result<()> {
    tracing::debug!("Executing {:?}", command);

    match command {
        Command::PiecesAtLeast { pieces } => {
            emit(out, json, &repo.has_sets_with_pieces_at_least(*pieces))
        }
        Command::Tags { name } => emit_lines(out, json, &repo.tags_for_set_named(name)),
        Command::Subthemes { theme } => emit(out, json, &repo.subthemes_in_theme(theme)),
        Command::NumbersWithPieces { pieces } => {
            let numbers = repo.number_to_name_for_piece_count(*pieces);
            if json {
                return emit_json(out, &numbers);
            }
            for (number, name) in numbers {
                writeln!(out, "{} = {}", number, name)?;
            }
            Ok(())
        }
        Command::ByTheme => {
            let groups = report::names_by_theme(repo);
            if json {
                return emit_json(out, &groups);
            }
            for (theme, names) in groups {
                writeln!(out, "{} = [{}]", theme, names.join(", "))?;
            }
            Ok(())
        }
        Command::ZeroPieces { limit } => {
            emit_lines(out, json, &repo.names_of_sets_with_zero_pieces(*limit))
        }
        Command::ThemesA => emit_lines(out, json, &repo.themes_starting_with_a()),
        Command::ThemeContains { substring } => {
            emit(out, json, &repo.has_theme_containing(substring))
        }
        Command::AvgNameLength { substring } => {
            let average = repo.average_name_length_in_theme(substring)?;
            emit(out, json, &average)
        }
        Command::LongNames { min_len, limit } => {
            emit_lines(out, json, &repo.top_names_over_length(*min_len, *limit))
        }
        Command::Demo if json => emit_json(out, &report::demo_report(repo, params)),
        Command::Demo => {
            report::run_demo(out, repo, params)?;
            Ok(())
        }
    }
}

fn emit<W: Write, T: Serialize + Display>(out: &mut W, json: bool, value: &T) -> Result<()> {
    if json {
        return emit_json(out, value);
    }
    writeln!(out, "{}", value)?;
    Ok(())
}

fn emit_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn emit_lines<W: Write>(out: &mut W, json: bool, values: &[String]) -> Result<()> {
    if json {
        return emit_json(out, values);
    }
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
