//! Property-based tests for the room-ordering GA using proptest

use proptest::prelude::*;
use u_roompath::ga::{Crossover, GaConfig, GaProblem, GaRunner, Mutation};
use u_roompath::random::create_rng;
use u_roompath::rooms::{
    Chromosome, CostMatrix, Gene, Room, RoomProblem, CHROMOSOME_LEN, INVALID_PENALTY,
};

fn problem(crossover: Crossover, mutation: Mutation) -> RoomProblem {
    RoomProblem::new(CostMatrix::classroom())
        .with_crossover(crossover)
        .with_mutation(mutation)
}

fn crossover_strategy() -> impl Strategy<Value = Crossover> {
    prop::sample::select(Crossover::ALL.to_vec())
}

fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop::sample::select(Mutation::ALL.to_vec())
}

/// Any eight genes, valid or not. Index 8 stands for an omitted room.
fn any_genes_strategy() -> impl Strategy<Value = [Gene; CHROMOSOME_LEN]> {
    prop::array::uniform8(0usize..9).prop_map(|idx| {
        idx.map(|i| match Room::from_index(i) {
            Some(room) => Gene::Room(room),
            None => Gene::Omitted,
        })
    })
}

fn sorted_labels(genes: &[Gene]) -> Vec<String> {
    let mut labels: Vec<String> = genes.iter().map(|g| g.to_string()).collect();
    labels.sort();
    labels
}

proptest! {
    #[test]
    fn test_populate_yields_valid_chromosomes(seed in any::<u64>(), size in 2usize..60) {
        let p = problem(Crossover::default(), Mutation::default());
        let mut rng = create_rng(seed);
        let pop = p.populate(size, &mut rng).unwrap();

        prop_assert_eq!(pop.len(), size);
        for c in &pop {
            prop_assert!(c.is_valid(), "invalid seed individual {}", c);
            prop_assert_eq!(c.genes().len(), CHROMOSOME_LEN);
            prop_assert_eq!(c.genes()[CHROMOSOME_LEN - 1], Gene::Room(Room::H));
        }
    }

    #[test]
    fn test_crossover_children_permute_donor_alphabet(
        seed in any::<u64>(),
        op in crossover_strategy(),
    ) {
        let p = problem(op, Mutation::default());
        let mut rng = create_rng(seed);
        let parents = p.populate(2, &mut rng).unwrap();
        let (c1, c2) = p.crossover(&parents[0], &parents[1], &mut rng).unwrap();

        prop_assert_eq!(sorted_labels(c1.prefix()), sorted_labels(parents[1].prefix()));
        prop_assert_eq!(sorted_labels(c2.prefix()), sorted_labels(parents[0].prefix()));
        prop_assert_eq!(c1.genes()[CHROMOSOME_LEN - 1], Gene::Room(Room::H));
        prop_assert_eq!(c2.genes()[CHROMOSOME_LEN - 1], Gene::Room(Room::H));
    }

    #[test]
    fn test_mutation_keeps_alphabet(seed in any::<u64>(), op in mutation_strategy()) {
        let p = problem(Crossover::default(), op);
        let mut rng = create_rng(seed);
        let original = Chromosome::random(&mut rng);
        let mut mutated = original.clone();
        p.mutate(&mut mutated, 1.0, &mut rng);

        prop_assert_eq!(sorted_labels(mutated.genes()), sorted_labels(original.genes()));
        prop_assert_eq!(mutated.genes()[CHROMOSOME_LEN - 1], Gene::Room(Room::H));
    }

    #[test]
    fn test_closed_mutation_gate_is_identity(seed in any::<u64>(), op in mutation_strategy()) {
        let p = problem(Crossover::default(), op);
        let mut rng = create_rng(seed);
        let original = Chromosome::random(&mut rng);
        let mut mutated = original.clone();
        p.mutate(&mut mutated, 0.0, &mut rng);

        prop_assert_eq!(mutated, original);
    }

    #[test]
    fn test_invalid_chromosomes_score_penalty(genes in any_genes_strategy()) {
        let c = Chromosome::new(genes);
        let p = problem(Crossover::default(), Mutation::default());
        if c.is_valid() {
            prop_assert!(p.evaluate(&c) < INVALID_PENALTY);
        } else {
            prop_assert_eq!(p.evaluate(&c), INVALID_PENALTY);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_seeded_runs_are_reproducible(
        seed in any::<u64>(),
        crossover in crossover_strategy(),
        mutation in mutation_strategy(),
    ) {
        let p = problem(crossover, mutation);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(20)
            .with_convergence(true)
            .with_seed(seed);

        let a = GaRunner::run(&p, &config).unwrap();
        let b = GaRunner::run(&p, &config).unwrap();
        prop_assert_eq!(a.population, b.population);
        prop_assert_eq!(a.convergence, b.convergence);
    }

    #[test]
    fn test_elitist_trace_never_worsens(seed in any::<u64>()) {
        let p = problem(Crossover::default(), Mutation::default());
        let config = GaConfig::default()
            .with_max_generations(30)
            .with_convergence(true)
            .with_seed(seed);

        let trace = GaRunner::run(&p, &config).unwrap().convergence.unwrap();
        prop_assert_eq!(trace.len(), 30);
        for w in trace.windows(2) {
            prop_assert!(w[1] <= w[0], "{} -> {}", w[0], w[1]);
        }
    }
}
