mod common;

use common::temp_repo;
use dsfdb::db::Repository;
use dsfdb::types::{position_from_index, DsfError};

#[test]
fn wells_are_listed_per_experiment_and_per_sample() {
    let (_dir, repo) = temp_repo();

    let experiment_id = repo
        .insert_experiment(Some("plate 7"), None, Some("SN-0007"), "plate7.eds")
        .unwrap();
    let sample_id = repo
        .insert_sample("compound-17", Some("screening hit"))
        .unwrap();

    for index in 0..4 {
        let sample = if index % 2 == 0 { Some(sample_id) } else { None };
        repo.insert_well(
            experiment_id,
            sample,
            &position_from_index(index),
            Some("SYBR"),
            Some("Unknown"),
            Some(49.1 + index as f64),
        )
        .unwrap();
    }

    let by_experiment = repo.list_wells_for_experiment(experiment_id).unwrap();
    assert_eq!(by_experiment.len(), 4);
    assert_eq!(by_experiment[0].well_position, "A01");
    assert_eq!(by_experiment[3].well_position, "A04");

    let by_sample = repo.list_wells_for_sample(sample_id).unwrap();
    assert_eq!(by_sample.len(), 2);
    assert!(by_sample.iter().all(|w| w.sample_id == Some(sample_id)));

    let sample = repo.load_sample_by_name("compound-17").unwrap().unwrap();
    assert_eq!(sample.sample_id, sample_id);
    assert_eq!(sample.description.as_deref(), Some("screening hit"));
}

#[test]
fn melt_curve_roundtrip_keeps_arrays_aligned() {
    let (_dir, repo) = temp_repo();

    let experiment_id = repo.insert_experiment(None, None, None, "run9.eds").unwrap();
    let well_id = repo
        .insert_well(experiment_id, None, "D07", Some("SYPRO"), None, None)
        .unwrap();

    let temperatures: Vec<f64> = (0..200).map(|i| 25.0 + 0.25 * i as f64).collect();
    let fluorescences: Vec<f64> = (0..200).map(|i| (i as f64 / 200.0).powi(2)).collect();
    repo.insert_melt_curve(experiment_id, well_id, &temperatures, &fluorescences)
        .unwrap();

    let curve = repo.load_melt_curve_for_well(well_id).unwrap().unwrap();
    assert_eq!(curve.well_id, well_id);
    assert_eq!(curve.experiment_id, experiment_id);
    assert_eq!(curve.len(), 200);
    assert_eq!(curve.temperature_data, temperatures);
    assert_eq!(curve.fluorescence_data, fluorescences);

    let for_experiment = repo.list_melt_curves_for_experiment(experiment_id).unwrap();
    assert_eq!(for_experiment.len(), 1);
    assert_eq!(for_experiment[0], curve);
}

// The worked example: one experiment, one well at A01 with dye SYPRO, one
// 50-point curve; a second curve for the same well is a uniqueness violation.
#[test]
fn example_ingest_sequence() {
    let (_dir, repo) = temp_repo();

    let experiment_id = repo
        .insert_experiment(Some("run1"), None, None, "run1.csv")
        .unwrap();
    let well_id = repo
        .insert_well(experiment_id, None, "A01", Some("SYPRO"), None, None)
        .unwrap();

    let temperatures: Vec<f64> = (0..50).map(|i| 25.0 + i as f64).collect();
    let fluorescences: Vec<f64> = (0..50).map(|i| 0.1 * i as f64).collect();
    repo.insert_melt_curve(experiment_id, well_id, &temperatures, &fluorescences)
        .unwrap();

    let err = repo
        .insert_melt_curve(experiment_id, well_id, &temperatures, &fluorescences)
        .expect_err("second curve for the well must fail");
    assert!(matches!(err, DsfError::UniqueViolation(_)), "got {err}");

    let experiments = repo.list_experiments().unwrap();
    assert_eq!(experiments.len(), 1);
    assert_eq!(experiments[0].file_name, "run1.csv");
    assert_eq!(repo.counts().unwrap().melt_curves, 1);
}
