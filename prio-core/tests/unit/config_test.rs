use super::*;

fn create_valid_properties() -> HashMap<String, String> {
    [
        ("size", "10"),
        ("benchmark", "5"),
        ("random.limit", "100"),
        ("ga.population", "40"),
        ("ga.crossover", "0.9"),
        ("ga.elitism", "0.4"),
        ("ga.mutation", "0.05"),
        ("ga.tournament", "3"),
        ("ga.limit", "20"),
        ("stall", "15"),
    ]
    .iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

#[test]
fn can_parse_valid_properties() {
    let config = SearchConfig::parse(&create_valid_properties()).unwrap();

    assert_eq!(config.set_size, 10);
    assert_eq!(config.benchmark_runs, 5);
    assert_eq!(config.random_limit, 100);
    assert_eq!(config.population_size, 40);
    assert_eq!(config.crossover_rate, 0.9);
    assert_eq!(config.elitism_rate, 0.4);
    assert_eq!(config.mutation_rate, 0.05);
    assert_eq!(config.tournament_size, 3);
    assert_eq!(config.stall_limit, 20);
    assert_eq!(config.restart_limit, 15);
}

#[test]
fn can_collect_all_offending_keys() {
    let mut properties = create_valid_properties();
    properties.remove("size");
    properties.insert("ga.crossover".to_string(), "nope".to_string());
    properties.insert("ga.elitism".to_string(), "1.5".to_string());

    let error = SearchConfig::parse(&properties).unwrap_err();
    let keys: Vec<_> = error.errors().iter().map(|error| error.key).collect();

    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&"size"));
    assert!(keys.contains(&"ga.crossover"));
    assert!(keys.contains(&"ga.elitism"));
}

#[test]
fn can_reject_non_integer_counts() {
    for value in ["-1", "3.5", ""] {
        let mut properties = create_valid_properties();
        properties.insert("ga.population".to_string(), value.to_string());

        let error = SearchConfig::parse(&properties).unwrap_err();

        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.errors()[0].key, "ga.population");
    }
}

#[test]
fn can_report_missing_keys_in_one_message() {
    let error = SearchConfig::parse(&HashMap::new()).unwrap_err();

    assert_eq!(error.errors().len(), 10);
    assert!(error.to_string().starts_with("invalid configuration:"));
}
