use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::autoplay::BatchSummary;
use accelerando_game::Ending;

fn ending_label(ending: Option<Ending>) -> String {
    ending.map_or_else(|| "unfinished".to_string(), |e| e.to_string())
}

pub fn generate_console_report(
    out: &mut dyn Write,
    summary: &BatchSummary,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Autoplay Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===========================".cyan())?;
    writeln!(out, "Strategy: {}", summary.strategy.label().bold())?;
    writeln!(out, "Games played: {}", summary.games)?;
    writeln!(out, "Victories: {}", summary.victories.to_string().green())?;
    writeln!(
        out,
        "Reputation collapses: {}",
        summary.reputation_collapses.to_string().red()
    )?;
    writeln!(
        out,
        "Kitten catastrophes: {}",
        summary.kitten_catastrophes.to_string().red()
    )?;
    writeln!(
        out,
        "Disconnections: {}",
        summary.disconnections.to_string().red()
    )?;
    writeln!(out, "Unfinished: {}", summary.unfinished.to_string().yellow())?;
    writeln!(out, "Win rate: {:.1}%", summary.win_rate())?;
    writeln!(out, "Average turns: {:.1}", summary.average_turns)?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for record in &summary.records {
        let status = match record.ending {
            Some(Ending::Victory) => "🎉 WIN ".green(),
            Some(_) => "💀 LOSS".red(),
            None => "⏸ CAP ".yellow(),
        };
        writeln!(
            out,
            "{} seed {:<6} {:>4} turns  {}",
            status,
            record.seed,
            record.turns,
            ending_label(record.ending)
        )?;
        let gs = &record.final_state;
        writeln!(
            out,
            "   rep {} | kittens {} | singularity {}% | entities {} | patents {}",
            gs.reputation,
            gs.dead_kittens,
            gs.singularity_progress,
            gs.entities_helped,
            gs.patents_released
        )?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, summary: &BatchSummary) -> Result<()> {
    let json_output = serde_json::to_string_pretty(summary)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, summary: &BatchSummary) -> Result<()> {
    writeln!(out, "# Accelerando Autoplay Results\n")?;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Strategy**: {}", summary.strategy)?;
    writeln!(out, "- **Games**: {}", summary.games)?;
    writeln!(out, "- **Victories**: {}", summary.victories)?;
    writeln!(
        out,
        "- **Defeats**: {} reputation, {} kittens, {} bandwidth",
        summary.reputation_collapses, summary.kitten_catastrophes, summary.disconnections
    )?;
    writeln!(out, "- **Unfinished**: {}", summary.unfinished)?;
    writeln!(out, "- **Win rate**: {:.1}%", summary.win_rate())?;
    writeln!(out, "- **Average turns**: {:.1}\n", summary.average_turns)?;

    writeln!(out, "## Games\n")?;
    writeln!(
        out,
        "| Seed | Ending | Turns | Reputation | Dead Kittens | Singularity |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|")?;
    for record in &summary.records {
        let gs = &record.final_state;
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {}% |",
            record.seed,
            ending_label(record.ending),
            record.turns,
            gs.reputation,
            gs.dead_kittens,
            gs.singularity_progress
        )?;
    }
    Ok(())
}
