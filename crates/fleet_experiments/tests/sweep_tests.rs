use fleet_core::scenario::{ScenarioParams, VehicleSpec};
use fleet_core::vehicle::VehicleKind;
use fleet_experiments::parameter_spaces::{minimal_space, trailer_space};
use fleet_experiments::runner::run_parallel_experiments_with_progress;
use fleet_experiments::{
    export_to_csv, find_furthest_parameters, load_scenario, run_single_simulation, save_scenario,
    ParameterSet, ParameterSpace,
};
use tempfile::NamedTempFile;

#[test]
fn minimal_sweep_runs_reference_fleet_twice_as_long() {
    let sets = minimal_space().generate();
    let results = run_parallel_experiments_with_progress(sets.clone(), Some(2), false).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].total_distance, 28_239);
    // The towing sedan's 7-tick period does not divide 24: 18 moves instead of 20.
    assert_eq!(results[1].total_distance, 2 * 28_239 - 2 * 480);
    assert_eq!(results[1].furthest_odometer, 12_800);

    let best = find_furthest_parameters(&results, &sets).unwrap();
    assert_eq!(best.ticks(), 24);
}

#[test]
fn heavier_trailers_slow_the_towing_sedan() {
    let sets = trailer_space().ticks(vec![12]).generate();
    let results = run_parallel_experiments_with_progress(sets, None, false).unwrap();

    // No trailer, 50, 200 and 600: the sedan drops from 480 to 400 and then 300.
    let totals: Vec<u64> = results.iter().map(|r| r.total_distance).collect();
    assert_eq!(totals, vec![28_239, 28_239, 28_239 - 800, 28_239 - 1800]);
}

#[test]
fn same_seed_same_result_with_random_passengers() {
    let sets = ParameterSpace::grid()
        .ticks(vec![30])
        .random_passengers(vec![3])
        .generate();
    let again = ParameterSet::new(
        sets[0].params.clone(),
        "again".to_string(),
        0,
        sets[0].seed,
    );

    let a = run_single_simulation(&sets[0]).unwrap();
    let b = run_single_simulation(&again).unwrap();
    assert_eq!(a.total_distance, b.total_distance);
    assert_eq!(a.furthest_index, b.furthest_index);
    assert!(a.passengers_carried > 0);
}

#[test]
fn saved_scenario_drives_a_sweep_and_exports() {
    let params = ScenarioParams::default()
        .with_vehicles([
            VehicleSpec::new(VehicleKind::Boat),
            VehicleSpec::new(VehicleKind::Motorcycle),
        ])
        .with_end_tick(6);
    let scenario_file = NamedTempFile::new().unwrap();
    save_scenario(&params, scenario_file.path()).unwrap();

    let base = load_scenario(scenario_file.path()).unwrap();
    let sets = ParameterSpace::grid().with_base(base).generate();
    let results = run_parallel_experiments_with_progress(sets.clone(), Some(1), false).unwrap();

    // Boat: 4 of 6 ticks at 800. Motorcycle: 5 of 6 at 400.
    assert_eq!(results[0].total_distance, 3200 + 2000);
    assert_eq!(results[0].furthest_index, Some(0));

    let csv_file = NamedTempFile::new().unwrap();
    export_to_csv(&results, &sets, csv_file.path()).unwrap();
    let contents = std::fs::read_to_string(csv_file.path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
}
