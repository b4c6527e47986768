// Hamiltonian cycle 網格生成器
// hamilton N OUTPUT SEED

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use wallgrid::{hamilton, log_info, utils::logger, Config};

/// Generate a random Hamiltonian cycle on an N×N grid and save it as a grid file.
#[derive(Parser, Debug)]
#[command(name = "hamilton", version, about)]
struct Args {
    /// Grid size, even and positive
    n: usize,
    /// Output grid file
    output: PathBuf,
    /// RNG seed
    seed: u64,
}

fn run(args: &Args) -> wallgrid::Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let start = Instant::now();
    let grid = hamilton::generate(args.n, &mut rng)?;
    let elapsed = start.elapsed();

    grid.save(&args.output)?;
    println!("Save to {}", args.output.display());
    println!("N = {}, time = {:.2} ms", args.n, elapsed.as_secs_f64() * 1000.0);
    log_info!("hamilton", "seed {} wrote {} walls", args.seed, grid.wall_count());
    Ok(())
}

fn main() {
    let args = Args::parse();
    logger::init(Config::new().system.log_level);

    if let Err(e) = run(&args) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
