//! Text and JSON output of a finished aggregation.

use std::fmt;

use reelstats_core::{StatRow, Statistics};

const MISSING: &str = "-";

/// Plain-text tables of a [`Statistics`] value.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    stats: &'a Statistics,
}

impl<'a> TableView<'a> {
    pub fn new(stats: &'a Statistics) -> Self {
        Self { stats }
    }
}

struct Cells {
    name: String,
    count: String,
    rating: String,
    user_rating: String,
    runtime: String,
    year: String,
}

impl Cells {
    fn of(row: &StatRow) -> Self {
        Self {
            name: row.name().unwrap_or("All titles").to_string(),
            count: row.occurrences().to_string(),
            rating: row
                .formatted_average_rating()
                .unwrap_or_else(|| MISSING.to_string()),
            user_rating: row
                .formatted_average_user_rating()
                .unwrap_or_else(|| MISSING.to_string()),
            runtime: row
                .average_runtime()
                .unwrap_or_else(|| MISSING.to_string()),
            year: row
                .average_year_of_release()
                .map(|year| year.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

fn width<'c>(header: &str, cells: impl Iterator<Item = &'c str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or_default()
}

fn write_table(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    rows: &[StatRow],
) -> fmt::Result {
    writeln!(f, "{heading}")?;
    if rows.is_empty() {
        return writeln!(f, "  (none)");
    }

    let cells: Vec<Cells> = rows.iter().map(Cells::of).collect();
    let rank_w = rows.len().to_string().len().max(1);
    let name_w = width("Name", cells.iter().map(|c| c.name.as_str()));
    let count_w = width("Count", cells.iter().map(|c| c.count.as_str()));
    let runtime_w = width("Runtime", cells.iter().map(|c| c.runtime.as_str()));

    writeln!(
        f,
        "  {:>rank_w$}  {:<name_w$}  {:>count_w$}  {:>6}  {:>6}  {:<runtime_w$}  {:>4}",
        "#", "Name", "Count", "Rating", "Yours", "Runtime", "Year"
    )?;
    for (rank, c) in cells.iter().enumerate() {
        writeln!(
            f,
            "  {:>rank_w$}  {:<name_w$}  {:>count_w$}  {:>6}  {:>6}  {:<runtime_w$}  {:>4}",
            rank + 1,
            c.name,
            c.count,
            c.rating,
            c.user_rating,
            c.runtime,
            c.year
        )?;
    }
    Ok(())
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.stats.counts();
        writeln!(
            f,
            "Analyzed titles: {} ({} movies, {} episodes, {} series)",
            self.stats.titles().len(),
            counts.movies,
            counts.episodes,
            counts.series
        )?;

        let global = Cells::of(self.stats.global());
        writeln!(
            f,
            "Average rating {} | your rating {} | runtime {} | year {}",
            global.rating, global.user_rating, global.runtime, global.year
        )?;

        writeln!(f)?;
        write_table(f, "Actors", self.stats.actors())?;
        writeln!(f)?;
        write_table(f, "Directors / creators", self.stats.directors())?;
        writeln!(f)?;
        write_table(f, "Genres", self.stats.genres())
    }
}

/// Pretty-printed JSON of [`Statistics::report`].
pub fn render_json(stats: &Statistics) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&stats.report())
}
