// Demonstration: train a single agent, then freeze learning and walk the
// greedy path to the target.
//
// Run from the repo root:
//   cargo run --example learned_path -- --train-ticks 50000 --seed 7

use std::env;

use qnav::{Environment, SimConfig, TrainingLoop};

fn main() {
    let args: Vec<String> = env::args().collect();
    let train_ticks: u64 = arg_value(&args, "--train-ticks")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50_000);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);

    let env = Environment::standard(SimConfig::default());
    let mut sim = TrainingLoop::new(env, seed);
    sim.start();
    for _ in 0..train_ticks {
        sim.tick();
    }
    println!("after training:\n{}\n", sim.stats());

    // freeze learning and exploration, then watch the greedy walk
    sim.set_epsilon(0.0).expect("0 is a valid epsilon");
    sim.set_learning_rate(0.0).expect("0 is a valid learning rate");
    sim.clear_trails();

    let successes_before = sim.stats().successes;
    let mut reached = false;
    for _ in 0..2_000 {
        sim.tick();
        if sim.stats().successes > successes_before {
            reached = true;
            break;
        }
    }

    if !reached {
        println!("greedy run did not reach the target; train longer");
        return;
    }

    let agent = &sim.agents()[0];
    println!("greedy path ({} points, oldest first):", agent.trail().len());
    for point in agent.trail().iter() {
        println!("  {point}");
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
