//! Build nested diamond graphs (or the powers of any matrix file) and
//! compare their sizes with the closed-form counts.
//!
//! Usage: `cargo run --example nested_diamonds -- [LEVELS] [MATRIX_FILE]`

use slash_graphs::graph::families;
use slash_graphs::io::{load_matrix_file, save_matrix_file};
use slash_graphs::prelude::*;
use slash_graphs::slash::slash_power_edge_count;
use slash_graphs::utils::timing::Timer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let levels: u32 = match args.next() {
        Some(arg) => arg.parse().map_err(|_| {
            SlashError::InvalidArgument(format!("LEVELS must be a positive integer, got {:?}", arg))
        })?,
        None => 4,
    };
    let base = match args.next() {
        Some(path) => load_matrix_file(path)?,
        None => families::diamond(),
    };

    println!("=== Slash Powers ===\n");
    println!("Base graph ({} vertices, {} edges):", base.num_vertices(), base.num_edges());
    print!("{}", base);

    let (v, e) = (base.num_vertices(), base.num_edges());
    let mut last = None;

    {
        let _timer = Timer::new("slash powers");
        for (idx, power) in SlashPowers::new(&base).take(levels as usize).enumerate() {
            let power = power?;
            let n = idx as u32 + 1;

            let predicted = if e == 1 {
                "n/a".to_string()
            } else {
                slash_power_vertex_count(v, e, n)?.to_string()
            };
            println!(
                "  power {}: {} vertices (formula: {}), {} edges (formula: {})",
                n,
                power.num_vertices(),
                predicted,
                power.num_edges(),
                slash_power_edge_count(e, n)?
            );
            last = Some((n, power));
        }
    }

    if let Some((n, graph)) = last {
        let path = std::env::temp_dir().join(format!("slash_power_{}.txt", n));
        save_matrix_file(&graph, &path)?;
        println!("\nSaved power {} to {}", n, path.display());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
