use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, Board, Hunter, Player, BOARD_SIZE};
use serde_json::json;

/// Let a fresh hunter sink a random fleet, returning the number of shots.
fn play_one(rng: &mut SmallRng) -> anyhow::Result<usize> {
    let mut board = Board::random(rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut hunter = Hunter::new();
    let mut guesses = 0;
    while !board.all_destroyed() {
        let target = hunter
            .select_target(rng)
            .ok_or_else(|| anyhow::anyhow!("hunter ran out of targets after {} guesses", guesses))?;
        if board.shots().has(target) {
            anyhow::bail!("hunter fired at {} twice", target);
        }
        let result = board.commit(target);
        hunter.handle_guess_result(target, result);
        guesses += 1;
    }
    Ok(guesses)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut counts = Vec::with_capacity(games as usize);
    for game in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(game));
        let guesses = play_one(&mut rng)?;
        log::debug!("game {} finished in {} guesses", game, guesses);
        counts.push(guesses);
    }

    let total: usize = counts.iter().sum();
    let mean = if counts.is_empty() {
        0.0
    } else {
        total as f64 / counts.len() as f64
    };
    let result = json!({
        "seed": seed,
        "games": games,
        "cells": BOARD_SIZE as usize * BOARD_SIZE as usize,
        "guesses": &counts,
        "min": counts.iter().min(),
        "max": counts.iter().max(),
        "mean": mean,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
