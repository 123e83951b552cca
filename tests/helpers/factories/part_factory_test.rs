use crate::test_helpers::factories::part_factory::reference_now;
use crate::test_helpers::factory::Factory;

#[test]
fn test_part_factory() {
    let part = Factory::part()
        .with("id", 7)
        .with("size", 4096)
        .with("age_secs", 30.0)
        .create();

    assert_eq!(part.id.0, 7);
    assert_eq!(part.size, 4096);
    assert_eq!(part.age_secs(reference_now()), 30.0);
}

#[test]
fn test_part_factory_list() {
    let parts = Factory::part().create_list(&[(10, 0.0), (20, 5.0), (30, 2.5)]);

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1].id.0, 1);
    assert_eq!(parts[2].size, 30);
    assert_eq!(parts[2].age_secs(reference_now()), 2.5);
}
