use std::time::Instant;

use anyhow::Context;
use blokie_search::{fitness_sample, performance_sample, FitnessSample, Planner};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "blokie", about = "Self-play and timing runs for the blokie planner")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Play full games with random hands and report their scores
    Selfplay {
        /// Number of games
        #[arg(long, default_value_t = 10)]
        games: u64,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Worker threads (default: one per core)
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Time a fixed number of planned hands
    Perf {
        /// Hands to plan
        #[arg(long, default_value_t = 1000)]
        moves: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.cmd {
        Cmd::Selfplay {
            games,
            seed,
            threads,
        } => run_selfplay(games, seed, threads),
        Cmd::Perf { moves, seed } => run_perf(moves, seed),
    }
}

fn base_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

fn run_selfplay(games: u64, seed: Option<u64>, threads: Option<usize>) -> anyhow::Result<()> {
    let seed = base_seed(seed);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or(0))
        .build()
        .context("failed to build selfplay thread pool")?;
    let planner = Planner::default();
    info!("selfplay: {games} games, seed {seed}");

    let samples: Vec<FitnessSample> = pool.install(|| {
        (0..games)
            .into_par_iter()
            .map(|i| {
                let game_seed = seed.wrapping_add(i);
                let mut rng = StdRng::seed_from_u64(game_seed);
                let sample = fitness_sample(&planner, &mut rng)
                    .with_context(|| format!("selfplay game {i} (seed {game_seed})"))?;
                info!(
                    "game {i}: score {} in {} moves",
                    sample.score, sample.num_moves
                );
                Ok(sample)
            })
            .collect::<anyhow::Result<_>>()
    })?;

    if samples.is_empty() {
        println!("no games played");
        return Ok(());
    }
    let n = samples.len() as f64;
    let mean_score = samples.iter().map(|s| s.score as f64).sum::<f64>() / n;
    let mean_moves = samples.iter().map(|s| s.num_moves as f64).sum::<f64>() / n;
    let max_score = samples.iter().map(|s| s.score).max().unwrap_or(0);
    println!(
        "{} games | mean score: {:.1} | max score: {} | mean moves: {:.1}",
        samples.len(),
        mean_score,
        max_score,
        mean_moves
    );
    Ok(())
}

fn run_perf(moves: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(base_seed(seed));
    let start = Instant::now();
    let games_over = performance_sample(&Planner::default(), &mut rng, moves)
        .context("performance sample failed")?;
    let elapsed = start.elapsed().as_secs_f64();
    info!("{games_over} games ended during the run");
    println!("{moves} moves in {elapsed:.2} seconds");
    Ok(())
}
