//! Example: one quantum coin toss session.
//! Generates a random single-qubit state, tosses it N times and shows
//! the counts, the reference curve and the Bloch-sphere orientation.
//!
//! Usage: cargo run --example coin_toss -- [tosses] [seed]

use qtoss::core::clamp_to_slider;
use qtoss::{CoinError, Simulator, SimulatorConfig, TextRenderer, render_result};

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str) -> Result<Option<T>, CoinError> {
    arg.map(|s| {
        s.parse::<T>()
            .map_err(|_| CoinError::invalid_config(name, format!("cannot parse '{}'", s)))
    })
    .transpose()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    // Same bounds as the interactive slider
    let tosses = clamp_to_slider(parse_arg::<u64>(args.next(), "tosses")?.unwrap_or(100));
    let seed = parse_arg::<u64>(args.next(), "seed")?;

    println!("--- qtoss Example: Quantum Coin Toss ({} tosses) ---", tosses);

    let simulator = Simulator::with_config(SimulatorConfig { seed, ..Default::default() })?;
    let result = match simulator.run(tosses) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("\n--- Simulation Failed ---");
            eprintln!("Error: {}", e);
            return Err(e.into());
        }
    };

    println!("\n{}", result);

    let (chart, sphere) = render_result(&TextRenderer::default(), &result)?;
    println!("Distribution:\n{}", chart);
    println!("Orientation:\n{}", sphere);

    println!("\nResult as JSON:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
