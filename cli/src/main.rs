use clap::Parser;
use clap_verbosity_flag::Verbosity;

use gridseer_core::{
    CellMark, GRID_SIDE, MAX_MINE_COUNT, MIN_MINE_COUNT, PredictionRequest, generate_prediction,
    predict_with_safe_count,
};

#[derive(Parser)]
#[command(name = "gridseer", about = "Hash-based mines prediction grid generator")]
struct Cli {
    /// Server seed used as the HMAC key.
    #[arg(long)]
    server_seed: String,
    /// Nonce mixed into the hashed message.
    #[arg(long)]
    nonce: String,
    /// Mine count, 1 through 7.
    #[arg(long)]
    mines: u8,
    /// Skip the random draw and request exactly this many safe cells,
    /// making the output fully reproducible.
    #[arg(long)]
    safe_count: Option<u8>,
    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    if !(MIN_MINE_COUNT..=MAX_MINE_COUNT).contains(&cli.mines) {
        anyhow::bail!("mine count must be between {MIN_MINE_COUNT} and {MAX_MINE_COUNT}");
    }

    let request = PredictionRequest::new(cli.server_seed, cli.nonce, cli.mines);
    let prediction = match cli.safe_count {
        Some(count) => predict_with_safe_count(&request, count)?,
        None => generate_prediction(&request, &mut rand::rng())?,
    };

    for row in 0..GRID_SIDE {
        let line: Vec<&str> = (0..GRID_SIDE)
            .map(|col| match prediction.grid[(row, col)] {
                CellMark::Safe => "💎",
                CellMark::Unsafe => "🚫",
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
    println!("Server seed: {}", request.server_seed);
    println!("Nonce: {}", request.nonce);
    println!("Mine count: {}", request.mine_count);
    println!("Digest: {}", prediction.digest_hex);

    Ok(())
}
