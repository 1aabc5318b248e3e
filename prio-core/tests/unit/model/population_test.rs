use super::*;
use crate::helpers::*;

fn is_sorted(candidates: &[Candidate]) -> bool {
    candidates.windows(2).all(|pair| pair[0].fitness() <= pair[1].fitness())
}

fn has_duplicates(candidate: &Candidate) -> bool {
    let tests = candidate.tests();
    (0..tests.len()).any(|i| (i + 1..tests.len()).any(|j| tests[i].as_ref() == tests[j].as_ref()))
}

#[test]
fn can_create_sorted_population() {
    let config = create_test_config();
    let environment = create_test_environment(3);

    let population = Population::new(&config, &create_test_pool(), environment.random.clone()).unwrap();

    assert_eq!(population.candidates.len(), config.population_size);
    assert!(is_sorted(&population.candidates));
    assert!(population.fittest().fitness() <= population.average_fitness());
}

#[test]
fn can_reject_empty_population() {
    let mut config = create_test_config();
    config.population_size = 0;
    let environment = create_test_environment(3);

    assert!(Population::new(&config, &create_test_pool(), environment.random.clone()).is_err());
}

#[test]
fn can_evolve_into_full_sorted_generation() {
    let config = create_test_config();
    let environment = create_test_environment(5);
    let mut population = Population::new(&config, &create_test_pool(), environment.random.clone()).unwrap();

    for _ in 0..5 {
        population.evolve().unwrap();

        assert_eq!(population.candidates.len(), config.population_size);
        assert!(is_sorted(&population.candidates));
        assert!(population.candidates.iter().all(|candidate| candidate.len() == config.set_size));
        assert!(!population.candidates.iter().any(has_duplicates));
    }
}

#[test]
fn can_evolve_odd_sized_population() {
    let mut config = create_test_config();
    config.population_size = 7;
    let environment = create_test_environment(7);
    let mut population = Population::new(&config, &create_test_pool(), environment.random.clone()).unwrap();

    population.evolve().unwrap();

    assert_eq!(population.candidates.len(), 7);
}

#[test]
fn can_evolve_population_of_one() {
    let mut config = create_test_config();
    config.population_size = 1;
    config.elitism_rate = 0.;
    let environment = create_test_environment(9);
    let mut population = Population::new(&config, &create_test_pool(), environment.random.clone()).unwrap();

    for _ in 0..3 {
        population.evolve().unwrap();
        assert_eq!(population.candidates.len(), 1);
    }
}

#[test]
fn can_select_parents_from_elite_slice() {
    let config = create_test_config();
    let environment = create_test_environment(11);
    let population = Population::new(&config, &create_test_pool(), environment.random.clone()).unwrap();

    for _ in 0..20 {
        let parent = population.select_parent(2);
        assert!(parent.fitness() <= population.candidates[1].fitness());
    }
}
