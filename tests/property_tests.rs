//! Property-based tests for u-genepool
//!
//! Uses proptest to verify the engine and cipher invariants.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use u_genepool::cipher::{CipherKey, CipherProblem, SAMPLE_CIPHERTEXT};
use u_genepool::ga::{Evolution, EvolutionConfig, FnProblem, GeneProblem, RankTable};
use u_genepool::EvolutionError;

fn scalar_problem() -> impl GeneProblem<Gene = i32, Error = std::convert::Infallible> {
    FnProblem::new(
        |rng: &mut dyn RngCore| rng.random_range(-100..100i32),
        |a: &i32, b: &i32, _m: f64, rng: &mut dyn RngCore| {
            if rng.random::<bool>() {
                *a
            } else {
                *b
            }
        },
        |g: &i32| -f64::from(g.abs()),
    )
}

proptest! {
    // ==================== RankTable Properties ====================

    #[test]
    fn rank_table_strictly_increasing(n in 1usize..500) {
        let table = RankTable::new(n);
        prop_assert_eq!(table.len(), n);
        prop_assert!(table.cumulative().windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(table.total(), (n as u64) * (n as u64 + 1) / 2);
    }

    #[test]
    fn rank_table_samples_in_range(n in 1usize..200, seed in any::<u64>()) {
        let table = RankTable::new(n);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            prop_assert!(table.sample(&mut rng) < n);
        }
    }

    #[test]
    fn rank_for_is_smallest_exceeding(n in 1usize..100, frac in 0.0f64..1.0) {
        let table = RankTable::new(n);
        let r = frac * table.total() as f64;
        let i = table.rank_for(r);
        prop_assert!(table.cumulative()[i] as f64 > r);
        if i > 0 {
            prop_assert!(table.cumulative()[i - 1] as f64 <= r);
        }
    }

    // ==================== Engine Properties ====================

    #[test]
    fn construction_yields_n_genes(n in 2usize..64, seed in any::<u64>()) {
        let config = EvolutionConfig::default().with_n_genes(n).with_seed(seed);
        let engine = Evolution::new(scalar_problem(), config).unwrap();
        prop_assert_eq!(engine.population().len(), n);
    }

    #[test]
    fn construction_rejects_fewer_than_two(n in 0usize..2) {
        let config = EvolutionConfig::default().with_n_genes(n);
        let result = Evolution::new(scalar_problem(), config);
        prop_assert!(matches!(result, Err(EvolutionError::InvalidConfiguration(_))));
    }

    #[test]
    fn population_size_invariant(n in 2usize..40, steps in 1usize..15, seed in any::<u64>()) {
        let config = EvolutionConfig::default().with_n_genes(n).with_seed(seed);
        let mut engine = Evolution::new(scalar_problem(), config).unwrap();
        for _ in 0..steps {
            engine.step().unwrap();
            prop_assert_eq!(engine.population().len(), n);
        }
    }

    #[test]
    fn seeded_runs_are_deterministic(n in 2usize..30, seed in any::<u64>()) {
        let run = || {
            let config = EvolutionConfig::default()
                .with_n_genes(n)
                .with_n_iter(8)
                .with_seed(seed);
            Evolution::new(scalar_problem(), config).unwrap().run().unwrap()
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn report_score_is_population_maximum(n in 2usize..30, seed in any::<u64>()) {
        let config = EvolutionConfig::default().with_n_genes(n).with_seed(seed);
        let mut engine = Evolution::new(scalar_problem(), config).unwrap();
        let before = engine.population().to_vec();
        let report = engine.step().unwrap();
        let max = before.iter().map(|g| -f64::from(g.abs())).fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(report.best_score, max);
        prop_assert!(before.contains(&report.best_gene));
    }

    // ==================== Cipher Properties ====================

    #[test]
    fn cipher_generate_is_closed(seed in any::<u64>()) {
        let problem = CipherProblem::new(SAMPLE_CIPHERTEXT).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let key = problem.generate(&mut rng).unwrap();
        prop_assert_eq!(key.to_string().len(), 26);
        prop_assert!(key.symbols().iter().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn cipher_crossover_is_closed(seed in any::<u64>(), m in 0.0f64..=1.0) {
        let problem = CipherProblem::new(SAMPLE_CIPHERTEXT).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let a = problem.generate(&mut rng).unwrap();
        let b = problem.generate(&mut rng).unwrap();
        let child = problem.crossover(&a, &b, m, &mut rng).unwrap();
        let text = child.to_string();
        prop_assert_eq!(text.len(), 26);
        prop_assert!(text.parse::<CipherKey>().is_ok());
    }

    #[test]
    fn cipher_score_at_most_one(seed in any::<u64>()) {
        let problem = CipherProblem::new(SAMPLE_CIPHERTEXT).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let key = problem.generate(&mut rng).unwrap();
        prop_assert!(problem.evaluate(&key).unwrap() <= 1.0);
    }
}
