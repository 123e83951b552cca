use crate::test_helpers::factory::Factory;

#[test]
fn test_selector_config_factory_defaults_are_valid() {
    let config = Factory::selector_config().create();

    assert_eq!(config.base, 5.0);
    assert_eq!(config.size_fixed_cost_to_add, 100);
    assert!(!config.enable_heuristic_to_align_parts);
    assert!(config.validate().is_ok());
}

#[test]
fn test_selector_config_factory_overrides() {
    let config = Factory::selector_config()
        .with("base", 8.0)
        .with("min_age_to_force_merge", 150.0)
        .with("enable_heuristic_to_remove_small_parts_at_right", true)
        .create();

    assert_eq!(config.base, 8.0);
    assert_eq!(config.min_age_to_force_merge, 150.0);
    assert!(config.enable_heuristic_to_remove_small_parts_at_right);
}
