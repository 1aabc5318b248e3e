use super::*;
use crate::helpers::*;

#[test]
fn can_find_ordering_with_genetic_search() {
    let config = create_test_config();
    let search = GeneticSearch::new(create_test_environment(11));

    let result = search.search(&config, &create_test_pool()).unwrap();

    match result {
        SearchResult::Genetic { best, generations } => {
            assert_eq!(best.len(), config.set_size);
            assert!(best.fitness() > 0.);
            assert!(generations >= 1);
        }
        _ => unreachable!(),
    }
}

#[test]
fn can_evolve_population_of_one() {
    let mut config = create_test_config();
    config.population_size = 1;
    config.elitism_rate = 0.;
    let search = GeneticSearch::new(create_test_environment(13));

    let result = search.search(&config, &create_test_pool()).unwrap();

    assert!(matches!(result, SearchResult::Genetic { .. }));
}

#[test]
fn can_stop_immediately_with_zero_stall_limit() {
    let mut config = create_test_config();
    config.stall_limit = 0;
    let search = GeneticSearch::new(create_test_environment(17));

    let result = search.search(&config, &create_test_pool()).unwrap();

    match result {
        SearchResult::Genetic { generations, .. } => assert_eq!(generations, 1),
        _ => unreachable!(),
    }
}

#[test]
fn can_reject_invalid_pool() {
    let config = create_test_config();
    let search = GeneticSearch::new(create_test_environment(19));

    assert!(search.search(&config, &[]).is_err());
    assert!(search.search(&config, &create_test_pool()[..2]).is_err());
}

#[test]
fn can_benchmark_independent_runs() {
    let config = create_test_config();
    let search = GeneticSearch::new(create_test_environment(23));

    let metrics = search.benchmark(&config, &create_test_pool()).unwrap();

    assert_eq!(metrics.runs, 2);
    assert!(metrics.mean_fitness > 0.);
    assert_eq!(metrics.mean_counters[0].0, "generations");
    assert!(metrics.mean_counters[0].1 >= 1.);
}

#[test]
fn can_reject_benchmark_without_runs() {
    let mut config = create_test_config();
    config.benchmark_runs = 0;
    let search = GeneticSearch::new(create_test_environment(29));

    assert!(search.benchmark(&config, &create_test_pool()).is_err());
}
