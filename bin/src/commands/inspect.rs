//! Inspect command implementation.
//!
//! Shows what a snapshot contains (event count, span, capacity, category
//! histogram) without projecting anything.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use retenza_lib::prelude::*;
use retenza_lib::{format_bytes, format_span};

/// Print snapshot statistics.
pub(crate) fn inspect(input: &Path, host: &str) -> Result<()> {
    let host = HostId::new(host);
    let source = SnapshotSource::from_path(input)
        .with_context(|| format!("Cannot load snapshot from {}", input.display()))?;
    let events = source.fetch_events(&host)?;
    let capacity = source.fetch_log_capacity(&host)?;

    println!("Snapshot: {}", input.display());
    println!("Host:     {host}");
    println!("Events:   {}", events.len());

    match capacity.max_configured_bytes {
        Some(max) => println!("Max configured size: {}", format_bytes(max)),
        None => println!("Max configured size: unknown"),
    }
    match capacity.current_bytes {
        Some(current) => println!("Current size:        {}", format_bytes(current)),
        None => println!("Current size:        unknown"),
    }
    match effective_log_size(&capacity) {
        Ok(effective) => println!("Effective size:      {}", format_bytes(effective)),
        Err(err) => println!("Effective size:      unavailable ({err})"),
    }

    match time_span(&events) {
        Ok(span) => println!("Sample span:         {}", format_span(span)),
        Err(err) => println!("Sample span:         unavailable ({err})"),
    }

    let mut histogram: BTreeMap<&CategoryId, u64> = BTreeMap::new();
    for event in &events {
        *histogram.entry(&event.category).or_insert(0) += 1;
    }
    if !histogram.is_empty() {
        println!("\n{:<16} {:>8}", "CATEGORY", "EVENTS");
        println!("{}", "-".repeat(25));
        for (category, count) in &histogram {
            println!("{:<16} {count:>8}", category.to_string());
        }
    }

    Ok(())
}
