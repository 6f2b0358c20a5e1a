//! Console rendering of the winning route and JSON report output.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use stepwise_core::{flatten_steps, Instruction, Point, Route, ScoreBreakdown, Selection};

/// Persisted record of one evaluation run.
#[derive(Debug, Serialize)]
pub struct SelectionReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub origin: Point,
    pub destination: Point,
    pub selection: &'a Selection,
    pub routes: &'a [Route],
}

pub fn write_report(path: &Path, report: &SelectionReport<'_>) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

/// Print the winning route's instruction list.
pub fn print_route(route: &Route, breakdown: &ScoreBreakdown) {
    let mut leaves: Vec<&Instruction> = Vec::new();
    for leg in &route.legs {
        leaves.extend(flatten_steps(&leg.steps));
    }

    println!("================== Best Route Steps ==================");
    for (i, step) in leaves.iter().enumerate() {
        println!("Step {}: {}", i + 1, strip_markup(&step.text));
        println!("Distance: {:.0} m, Duration: {:.0} s", step.distance_m, step.duration_s);
        println!("-----------------------------------------------------");
    }
    println!(
        "Total: {:.2} km, {:.1} s, score {:.2}",
        route.distance_m / 1000.0,
        breakdown.duration_s,
        breakdown.score
    );
    println!("=====================================================");
}

/// Strip provider markup from instruction text. Bold tags become markdown
/// emphasis, inline divs become separators, and anything else in angle
/// brackets is dropped.
pub fn strip_markup(text: &str) -> String {
    let text = text
        .replace("<b>", "**")
        .replace("</b>", "**")
        .replace("<div style=\"font-size:0.9em\">", ", ")
        .replace("</div>", "");

    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
