//! `memoria eval` and `memoria table`.

use std::time::Instant;

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use tracing::{debug, info};

use memoria_core::relations;
use memoria_types::Key;
use memoria_types::relation::Relation;
use memoria_types::report::{CacheEntry, Evaluation, Outcome};

use super::Output;

/// Evaluate one key. Returns `false` when the relation reported an error.
pub fn eval(relation: Relation, key: Key, output: Output) -> Result<bool> {
    let memo = relations::counted(relation);

    let started = Instant::now();
    let result = memo.get(key);
    let elapsed = started.elapsed();

    info!(%relation, key, invocations = memo.invocations(), "evaluated");

    let evaluation = Evaluation {
        relation: relation.to_string(),
        key,
        outcome: Outcome::from(result),
        invocations: memo.invocations(),
        cached_entries: memo.len(),
        elapsed_micros: elapsed.as_micros(),
    };
    let succeeded = !evaluation.outcome.is_error();

    match output {
        Output::Json => {
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
            return Ok(succeeded);
        }
        Output::Quiet => {
            if let Outcome::Error(err) = &evaluation.outcome {
                eprintln!("{err}");
            }
            return Ok(succeeded);
        }
        Output::Text => {}
    }

    println!();
    match &evaluation.outcome {
        Outcome::Value(value) => println!(
            "  {}({}) = {}",
            style(relation).cyan(),
            key,
            style(value).bold().green()
        ),
        Outcome::Error(err) => println!(
            "  {} {}",
            style("✗").red().bold(),
            style(err).red()
        ),
    }
    println!();
    println!("  {}", style("── Cache ──").dim());
    println!("  Computations: {}", style(evaluation.invocations).bold());
    println!("  Entries:      {}", evaluation.cached_entries);
    println!(
        "  Elapsed:      {}",
        style(format!("{}µs", evaluation.elapsed_micros)).dim()
    );
    println!();

    Ok(succeeded)
}

/// Evaluate a key, then print the whole cache table sorted by key.
pub fn table(relation: Relation, key: Key, output: Output) -> Result<bool> {
    let memo = relations::for_relation(relation);
    let result = memo.get(key);
    let succeeded = result.is_ok();

    let entries: Vec<CacheEntry> = memo
        .snapshot()
        .iter()
        .map(|(k, result)| CacheEntry::from_result(*k, result))
        .collect();
    debug!(%relation, key, entries = entries.len(), "dumping cache table");

    match output {
        Output::Json => {
            let dump = serde_json::json!({
                "relation": relation,
                "key": key,
                "entries": entries,
            });
            println!("{}", serde_json::to_string_pretty(&dump)?);
            return Ok(succeeded);
        }
        Output::Quiet => {
            if let Err(err) = &result {
                eprintln!("{err}");
            }
            return Ok(succeeded);
        }
        Output::Text => {}
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Key").fg(Color::White),
        Cell::new(relation.as_str()).fg(Color::White),
    ]);

    for entry in &entries {
        let result = if entry.is_error {
            Cell::new(&entry.result).fg(Color::Red)
        } else {
            Cell::new(&entry.result)
        };
        table.add_row(vec![Cell::new(entry.key), result]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} cached {}",
        style(entries.len()).bold(),
        if entries.len() == 1 { "entry" } else { "entries" }
    );
    println!();

    Ok(succeeded)
}
