//! Breaks a ROT13-encrypted sentence by evolving substitution keys.
//!
//! Run with `RUST_LOG=info cargo run --example substitution_cipher`.
//! An optional first argument overrides the seed.

use log::info;
use u_genepool::cipher::{consensus_key, CipherProblem, SAMPLE_CIPHERTEXT};
use u_genepool::ga::{Evolution, EvolutionConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 42,
    };

    let problem = CipherProblem::new(SAMPLE_CIPHERTEXT)?;
    let config = EvolutionConfig::default()
        .with_n_genes(100)
        .with_n_iter(1000)
        .with_mutation_chance(0.1)
        .with_seed(seed);

    let mut engine = Evolution::new(problem, config)?.with_observer(|report| {
        if report.index % 100 == 0 {
            info!(
                "generation {:>4}: best key {} score {:.6}",
                report.index, report.best_gene, report.best_score
            );
        }
    });

    let reports = engine.run()?;
    if let Some(last) = reports.last() {
        println!("best key in final generation: {} ({:.6})", last.best_gene, last.best_score);
    }

    if let Some(key) = consensus_key(engine.population()) {
        println!("consensus key: {key}");
        println!("ciphertext:    {}", engine.problem().ciphertext());
        println!("decoded:       {}", engine.problem().decode(&key));
    }

    Ok(())
}
