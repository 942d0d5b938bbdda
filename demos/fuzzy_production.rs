//! Fuzzy Production Planning Example
//!
//! Builds the sample production plan, sweeps the alpha level, and prints the
//! LP text at the default level. Pass a scenario JSON path to use your own
//! data instead:
//!
//! ```text
//! cargo run --example fuzzy_production -- plan.json
//! ```

use fuzzy_lp::prelude::*;

fn main() -> Result<()> {
    fuzzy_lp::logging::init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::load(path)?,
        None => Scenario::sample(),
    };
    scenario.validate()?;

    println!("=== Crisp prices by alpha level ===\n");
    let active = &scenario.products[..scenario.settings.num_products];
    for step in 0..=4 {
        let alpha = step as f64 / 4.0;
        let prices: Vec<String> = active
            .iter()
            .map(|p| format!("{:>8.2}", crisp(&p.price, alpha)))
            .collect();
        println!("  α = {:.2}: {}", alpha, prices.join(""));
    }

    println!("\n=== Model ===\n");
    print!("{}", scenario.synthesize());

    Ok(())
}
