//! Animated bar-chart run on stdout.
//!
//! Usage: `cargo run -p sortviz-core --example animate -- [config.json]`
//! where the optional file holds a `RunConfig`, e.g.
//! `{ "algorithm": "heap", "order": "descending", "gui": true, "speed_ms": 60 }`.

use std::fs;

use anyhow::Context;
use sortviz_core::{BarChart, RunConfig, Sorter};

fn main() -> anyhow::Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => {
            let text =
                fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
            RunConfig::from_json(&text)?
        }
        None => RunConfig::default().animated(80),
    };

    let data: Vec<u32> = vec![12, 3, 17, 8, 1, 14, 6, 10, 4, 15, 9, 2];
    let mut sorter = Sorter::from_config(&cfg, BarChart::stdout().with_max_width(40));
    sorter.set_data(&data);
    let report = sorter.run(&cfg);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
