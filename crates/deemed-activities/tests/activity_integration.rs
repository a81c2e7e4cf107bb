//! Integration tests for deemed-activities.
//!
//! These tests load parameters from `tests/fixtures` and run each activity
//! calculation over a small batch of buildings.

use std::path::PathBuf;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use deemed_activities::prelude::*;
use deemed_config::{ConfigError, ParameterStore, TableLayout};
use ndarray::array;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn constants() -> SchemeConstants {
    SchemeConstants::load(fixture("constants.toml")).unwrap()
}

fn store() -> ParameterStore {
    ParameterStore::builder()
        .load(
            motors::BASELINE_EFFICIENCY_TABLE,
            NaiveDate::from_ymd_opt(2021, 7, 1).unwrap(),
            fixture("motors_baseline_efficiency.csv"),
            &TableLayout::with_boundary_key(motors::RATED_OUTPUT_COLUMN),
        )
        .unwrap()
        .build()
        .unwrap()
}

// =============================================================================
// MOTORS
// =============================================================================

#[test]
fn test_motor_efficiency_from_store() {
    let store = store();
    let table = store
        .table_at(
            motors::BASELINE_EFFICIENCY_TABLE,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .unwrap();

    let rated_output = array![1.1, 2.0, 2.6, 0.5];
    let poles = [
        MotorPoles::Poles2,
        MotorPoles::Poles8,
        MotorPoles::Poles4,
        MotorPoles::Poles6,
    ];
    let baseline =
        motors::baseline_motor_efficiency(&table, rated_output.view(), &poles).unwrap();

    assert_relative_eq!(baseline[0], 75.0);
    assert_relative_eq!(baseline[1], 68.1 + 4.1 / 0.7 * 0.5, epsilon = 1e-10);
    assert_relative_eq!(baseline[2], 79.7 + 1.8 / 0.8 * 0.4, epsilon = 1e-10);
    // Below the first boundary the first segment is extended.
    assert_relative_eq!(baseline[3], 70.0 - 2.9 / 0.37 * 0.23, epsilon = 1e-10);

    let existing = motors::existing_motor_efficiency(
        array![90.5, -999.0, 0.0, 85.0].view(),
        baseline.view(),
    )
    .unwrap();
    assert_eq!(existing[0], 90.5);
    assert_eq!(existing[1], baseline[1]);
    assert_eq!(existing[2], baseline[2]);
    assert_eq!(existing[3], 85.0);
}

// =============================================================================
// AIR CONDITIONERS
// =============================================================================

#[test]
fn test_air_conditioner_peak_demand_savings() {
    let table = BaselinePowerTable::load(fixture("baseline_power.yaml")).unwrap();

    let capacity = array![3.5, 7.1, 65.0, 120.0];
    let baseline = table
        .baseline_power_input(
            capacity.view(),
            &[AcType::Type6, AcType::Type7, AcType::Type6, AcType::Type6],
            &[
                InstallationType::New,
                InstallationType::New,
                InstallationType::Replacement,
                InstallationType::New,
            ],
        )
        .unwrap();

    assert_relative_eq!(baseline[0], 0.295 * 3.5, epsilon = 1e-12);
    assert_relative_eq!(baseline[1], 0.34 * 7.1, epsilon = 1e-12);
    assert_relative_eq!(baseline[2], 0.42 * 65.0, epsilon = 1e-12);
    assert_relative_eq!(baseline[3], 0.39 * 120.0, epsilon = 1e-12);

    let power_input = array![0.9, 2.2, 25.0, 44.0];
    let firmness = array![1.0, 1.0, 0.9, 1.0];
    let savings =
        air_conditioner::peak_demand_savings(baseline.view(), power_input.view(), firmness.view(), &constants())
            .unwrap();

    for i in 0..4 {
        let expected = (baseline[i] - power_input[i]) * 6.0 * firmness[i] * 10.0;
        assert_relative_eq!(savings[i], expected, epsilon = 1e-9);
    }
}

#[test]
fn test_capacity_of_exactly_65_kw_is_banded() {
    let bands = air_conditioner::capacity_band(array![64.999, 65.0, 65.001].view()).unwrap();
    assert_eq!(
        bands,
        vec![
            CapacityBand::Between39And65,
            CapacityBand::MoreThan65,
            CapacityBand::MoreThan65,
        ]
    );
}

// =============================================================================
// APPLIANCE REMOVAL
// =============================================================================

#[test]
fn test_rooa_peak_demand_savings() {
    let savings = rooa::peak_demand_savings(array![1.0, 0.85].view(), &constants()).unwrap();
    assert_relative_eq!(savings[0], 4.2, epsilon = 1e-12);
    assert_relative_eq!(savings[1], 0.85 * 4.2, epsilon = 1e-12);
}

// =============================================================================
// REFERENCE ENERGY USE
// =============================================================================

#[test]
fn test_reference_energy_use() {
    let tables = ReferenceEnergyTables::load(fixture("reference_energy.yaml")).unwrap();
    let capacity = array![2.5, 8.0, 12.0];
    let zones = [ClimateZone::Hot, ClimateZone::Average, ClimateZone::Cold];
    let types = [AcType::Type6; 3];
    let installs = [InstallationType::New; 3];

    let cooling = tables
        .reference_cooling_energy_use(capacity.view(), &zones, &types, &installs)
        .unwrap();
    assert_relative_eq!(cooling[0], 2.5 * 1200.0 * 0.25, epsilon = 1e-9);
    assert_relative_eq!(cooling[1], 8.0 * 600.0 * 0.28, epsilon = 1e-9);
    assert_relative_eq!(cooling[2], 12.0 * 200.0 * 0.3, epsilon = 1e-9);

    let heating = tables
        .reference_heating_energy_use(capacity.view(), &zones, &types, &installs)
        .unwrap();
    assert_relative_eq!(heating[0], 2.5 * 100.0 * 0.22, epsilon = 1e-9);
    assert_relative_eq!(heating[2], 12.0 * 1100.0 * 0.27, epsilon = 1e-9);
}

#[test]
fn test_reference_energy_missing_band() {
    let tables = ReferenceEnergyTables::load(fixture("reference_energy.yaml")).unwrap();
    let err = tables
        .reference_cooling_energy_use(
            array![70.0].view(),
            &[ClimateZone::Hot],
            &[AcType::Type6],
            &[InstallationType::New],
        )
        .unwrap_err();
    assert!(err.to_string().contains("new/type_6/more_than_65"));
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_missing_parameter_files_report_path() {
    let missing = fixture("absent.yaml");
    let errors = [
        SchemeConstants::load(&missing).map(|_| ()).unwrap_err(),
        BaselinePowerTable::load(&missing).map(|_| ()).unwrap_err(),
        ReferenceEnergyTables::load(&missing).map(|_| ()).unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(err, ConfigError::Io { ref path, .. } if *path == missing));
    }
}
