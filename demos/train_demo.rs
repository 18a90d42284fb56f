// Demonstration: train navigation agents headlessly and report statistics.
//
// Run from the repo root:
//   cargo run --example train_demo -- --ticks 20000 --agents 3 --seed 42

use std::env;

use qnav::{Environment, SimConfig, TrainingLoop};

fn main() {
    let args: Vec<String> = env::args().collect();
    let ticks: u64 = arg_value(&args, "--ticks")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20_000);
    let agents: usize = arg_value(&args, "--agents")
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let env = Environment::standard(SimConfig::default());
    let mut sim = TrainingLoop::new(env, seed);

    for _ in 1..agents {
        if let Err(err) = sim.add_agent() {
            eprintln!("{err}");
            break;
        }
    }

    if let Some(value) = arg_value(&args, "--epsilon").and_then(|s| s.parse().ok()) {
        if let Err(err) = sim.set_epsilon(value) {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
    if let Some(value) = arg_value(&args, "--alpha").and_then(|s| s.parse().ok()) {
        if let Err(err) = sim.set_learning_rate(value) {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }

    sim.start();
    let report_every = (ticks / 10).max(1);
    for t in 1..=ticks {
        sim.tick();
        if t % report_every == 0 {
            let stats = sim.stats();
            println!(
                "tick {:>8}: {} episodes, {:.1}% success",
                t,
                stats.episodes,
                stats.success_rate() * 100.0
            );
        }
    }

    println!("{}", sim.stats());
    for agent in sim.agents() {
        println!(
            "agent {}: {} learned entries, currently at {}",
            agent.id,
            agent.qtable().len(),
            agent.position
        );
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
