//! Terminal output for lookup results.
//!
//! [`render`] is the single entry point used by the prompt loop; it picks the
//! chart view for game logs and the text record for player details.

pub mod chart;

use std::io::{self, Write};

use crate::{
    api::{PlayerDetail, PlayerReport},
    stats::{average, recent, series, GameStat, StatKind},
};
use chart::{plot, CHART_HEIGHT};


/// Games covered by the short-term average line.
pub const RECENT_GAMES: usize = 5;

/// Print a report in the form that matches its source.
pub fn render<W: Write>(out: &mut W, report: &PlayerReport) -> io::Result<()> {
    match report {
        PlayerReport::Stats(games) => render_stats(out, games),
        PlayerReport::Detail(detail) => render_detail(out, detail),
    }
}

/// Chart and average for points, assists and rebounds, then a recent-form summary.
pub fn render_stats<W: Write>(out: &mut W, games: &[GameStat]) -> io::Result<()> {
    for kind in StatKind::ALL {
        render_stat_graph(out, games, kind)?;
    }
    render_recent_form(out, games)
}

/// One stat's chart followed by its average to one decimal place.
pub fn render_stat_graph<W: Write>(out: &mut W, games: &[GameStat], kind: StatKind) -> io::Result<()> {
    let values = series(games, kind);
    let label = kind.to_string();
    writeln!(
        out,
        "\n{} OVER LAST {} GAMES:",
        label.to_uppercase(),
        values.len()
    )?;

    if values.is_empty() {
        writeln!(out, "No {} data available.", label)?;
    } else {
        writeln!(out, "{}", plot(&values, CHART_HEIGHT))?;
    }

    match average(games, kind) {
        Some(avg) => writeln!(out, "\nAverage {}: {:.1}", label, avg),
        None => writeln!(out, "\nAverage {}: no data", label),
    }
}

/// Last game line and the average over the last [`RECENT_GAMES`] games.
pub fn render_recent_form<W: Write>(out: &mut W, games: &[GameStat]) -> io::Result<()> {
    let Some(last) = games.first() else {
        return Ok(());
    };

    writeln!(
        out,
        "\nLast game ({}): {} pts, {} ast, {} reb",
        last.date, last.points, last.assists, last.rebounds
    )?;

    let window = recent(games, RECENT_GAMES);
    let avg = |kind| average(window, kind).unwrap_or_default();
    writeln!(
        out,
        "Last {} games: {:.1} pts, {:.1} ast, {:.1} reb",
        window.len(),
        avg(StatKind::Points),
        avg(StatKind::Assists),
        avg(StatKind::Rebounds)
    )
}

/// Fixed-order player record.
pub fn render_detail<W: Write>(out: &mut W, detail: &PlayerDetail) -> io::Result<()> {
    writeln!(out, "\nPlayer Information:")?;
    writeln!(out, "Name: {}", detail.name)?;
    writeln!(out, "Team: {}", detail.team)?;
    writeln!(out, "Position: {}", detail.position)?;
    writeln!(out, "Birth Date: {}", detail.birth_date)?;
    writeln!(out, "Description: {}", detail.description)
}
