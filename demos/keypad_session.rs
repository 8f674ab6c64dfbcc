//! Keypad Session
//!
//! Feeds key glyphs from the command line into a calculator engine and
//! prints the display after every press, the way a front end would render it.
//!
//! Run with: cargo run --example keypad_session -- 3 + 4 × 2 =
//! Set RUST_LOG=abacus=trace to watch the engine's own events.

use abacus::{CalculatorEngine, Token};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let keys = if args.is_empty() {
        "1 2 + 3 0 ÷ 6 = +/- % AC . 5"
            .split_whitespace()
            .map(str::to_string)
            .collect()
    } else {
        args
    };

    let mut engine = CalculatorEngine::new();
    for key in &keys {
        match key.parse::<Token>() {
            Ok(token) => {
                engine.handle_input(token);
                println!("{:>4}  |{:>14}|", token.glyph(), engine.display_text());
            }
            Err(e) => eprintln!("skipping key: {e}"),
        }
    }

    let history = engine.history();
    println!();
    println!(
        "{} keys handled, {} ignored",
        engine.metadata().inputs_handled,
        engine.metadata().inputs_ignored
    );
    println!("display path: {}", history.display_path().join(" → "));

    match engine.checkpoint().to_json_pretty() {
        Ok(json) => println!("\ncheckpoint:\n{json}"),
        Err(e) => eprintln!("checkpoint failed: {e}"),
    }
}
