//! `memoria edit-distance`.

use std::time::Instant;

use anyhow::Result;
use console::style;
use tracing::info;

use memoria_core::relations::EditDistance;

use super::Output;

pub fn edit_distance(a: &str, b: &str, output: Output) -> Result<bool> {
    let table = EditDistance::new(a, b);

    let started = Instant::now();
    let distance = table.distance()?;
    let elapsed = started.elapsed();

    let cells = (a.chars().count() + 1) * (b.chars().count() + 1);
    info!(distance, computed = table.invocations(), cells, "edit distance");

    if output == Output::Quiet {
        return Ok(true);
    }

    if output == Output::Json {
        let report = serde_json::json!({
            "a": a,
            "b": b,
            "distance": distance,
            "invocations": table.invocations(),
            "table_cells": cells,
            "elapsed_micros": elapsed.as_micros(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(true);
    }

    println!();
    println!(
        "  {} → {}: {}",
        style(a).cyan(),
        style(b).cyan(),
        style(distance).bold().green()
    );
    println!();
    println!(
        "  Computed {} of {} cells",
        style(table.invocations()).bold(),
        cells
    );
    println!();

    Ok(true)
}
