mod common;

use common::temp_repo;
use dsfdb::db::Repository;

#[test]
fn deleting_experiment_cascades_to_wells_and_curves() {
    let (_dir, repo) = temp_repo();

    let experiment_id = repo.insert_experiment(None, None, None, "run1.eds").unwrap();
    let keeper_id = repo.insert_experiment(None, None, None, "run2.eds").unwrap();

    let well_a = repo
        .insert_well(experiment_id, None, "A01", Some("SYPRO"), None, Some(54.2))
        .unwrap();
    let well_b = repo
        .insert_well(experiment_id, None, "A02", Some("SYPRO"), None, None)
        .unwrap();
    let keeper_well = repo
        .insert_well(keeper_id, None, "A01", Some("SYPRO"), None, None)
        .unwrap();

    repo.insert_melt_curve(experiment_id, well_a, &[25.0, 26.0], &[1.0, 1.1])
        .unwrap();
    repo.insert_melt_curve(keeper_id, keeper_well, &[25.0, 26.0], &[3.0, 3.1])
        .unwrap();

    let deleted = repo.delete_experiment(experiment_id).unwrap();
    assert_eq!(deleted, 1);

    assert!(repo.load_well(well_a).unwrap().is_none());
    assert!(repo.load_well(well_b).unwrap().is_none());
    assert!(repo.load_melt_curve_for_well(well_a).unwrap().is_none());

    // The other experiment is untouched.
    assert!(repo.load_well(keeper_well).unwrap().is_some());
    assert!(repo
        .load_melt_curve_for_well(keeper_well)
        .unwrap()
        .is_some());

    let counts = repo.counts().unwrap();
    assert_eq!(counts.experiments, 1);
    assert_eq!(counts.wells, 1);
    assert_eq!(counts.melt_curves, 1);
}

#[test]
fn deleting_well_cascades_to_its_curve() {
    let (_dir, repo) = temp_repo();

    let experiment_id = repo.insert_experiment(None, None, None, "run1.eds").unwrap();
    let well_id = repo
        .insert_well(experiment_id, None, "B03", Some("SYPRO"), None, None)
        .unwrap();
    repo.insert_melt_curve(experiment_id, well_id, &[25.0, 26.0], &[1.0, 1.1])
        .unwrap();

    let deleted = repo.delete_well(well_id).unwrap();
    assert_eq!(deleted, 1);

    assert!(repo.load_melt_curve_for_well(well_id).unwrap().is_none());
    assert_eq!(repo.counts().unwrap().melt_curves, 0);
}

#[test]
fn deleting_sample_nulls_well_reference_but_keeps_well() {
    let (_dir, repo) = temp_repo();

    let experiment_id = repo.insert_experiment(None, None, None, "run1.eds").unwrap();
    let sample_id = repo.insert_sample("lysozyme", None).unwrap();
    let well_id = repo
        .insert_well(
            experiment_id,
            Some(sample_id),
            "C05",
            Some("SYPRO"),
            Some("Unknown"),
            Some(61.3),
        )
        .unwrap();

    let deleted = repo.delete_sample(sample_id).unwrap();
    assert_eq!(deleted, 1);

    let well = repo.load_well(well_id).unwrap().expect("well must survive");
    assert_eq!(well.sample_id, None);
    assert_eq!(well.well_position, "C05");
    assert_eq!(well.tm_value, Some(61.3));
    assert!(repo.list_wells_for_sample(sample_id).unwrap().is_empty());
}
