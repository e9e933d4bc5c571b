//! End-to-end exercise of the scoring layer: split an interaction,
//! record the secondaries at a scoring plane, replay the stream as a
//! source, and bin the replayed histories' deposits into a voxel grid.

use std::sync::Arc;

use kerma::prelude::*;
use kerma_test_utils::FixedYieldModel;

#[test]
fn split_record_replay_score() {
    // 1. Split a bremsstrahlung interaction 10 ways.
    let state = Arc::new(SplittingState::new());
    let mut splitting = BremSplitting::builder(FixedYieldModel::new(1), Arc::clone(&state))
        .build()
        .unwrap();

    let electron = Track::new(
        Vec3::new(0.0, 0.0, -250.0),
        Vec3::new(0.0, 0.0, -6.0),
        6.0,
        1.0,
        ParticleKind::Electron,
    );
    let change = splitting.post_step(&electron, &Step::new(electron, 0.0));
    assert_eq!(change.secondaries.len(), 10);
    assert_eq!(state.secondaries_produced(), 10);

    // 2. Record every split photon crossing the plane; kill at plane.
    let mut plane = ScoringPlane::new("target-exit", Vec::new(), 50.0, true).unwrap();
    for secondary in &change.secondaries {
        let mut step = Step::new(*secondary, 0.0);
        assert!(plane.process_step(&mut step).unwrap());
        assert_eq!(step.track.status, TrackStatus::StopAndKill);
    }
    plane.close().unwrap();
    assert_eq!(plane.records_written(), 10);

    // 3. Replay the stream with recycling; weights survive unchanged.
    let stream = plane.into_inner();
    let run = Arc::new(RunControl::new());
    let mut source = PhasespaceSource::builder(stream.as_slice())
        .recycling_number(1)
        .redistribute(true)
        .seed(11)
        .run_control(Arc::clone(&run))
        .build()
        .unwrap();

    // 4. Deposit each replayed primary's energy at its vertex.
    let geometry = GridGeometry::new(
        [20, 20, 20],
        Vec3::new(-100.0, -100.0, -300.0),
        Vec3::new(100.0, 100.0, -100.0),
    )
    .unwrap();
    let mut grid = DoseGrid::new(geometry, ScoringMode::EnergyDeposit);

    let mut replayed = 0u64;
    loop {
        match source.generate().unwrap() {
            SourceOutcome::Generated(primary) => {
                assert_eq!(primary.weight, 0.1);
                grid.deposit(primary.position, primary.kinetic_energy, primary.weight, 1.0);
                replayed += 1;
            }
            SourceOutcome::Exhausted { consumed } => {
                assert_eq!(consumed, replayed);
                break;
            }
        }
    }

    // Each of the 10 records seeds recycling_number + 1 histories.
    assert_eq!(replayed, 20);
    assert!(run.is_aborted());
    assert_eq!(grid.deposits(), 20);

    // Total scored energy matches what was replayed.
    let total: f64 = grid.energy().iter().map(|&v| f64::from(v)).sum();
    let expected: f64 = 2.0 * (1..=10).map(|i| 0.1 * i as f64).sum::<f64>();
    assert!((total - expected).abs() < 1e-3);
}

#[test]
fn density_ramp_feeds_material_resolution() {
    let ramp = DensityRamp::build(
        &[
            Setpoint::new(-1050, "G4_AIR", 0.001),
            Setpoint::new(-950, "G4_AIR", 0.044),
            Setpoint::new(-700, "G4_LUNG_ICRP", 0.302),
            Setpoint::new(125, "G4_TISSUE_SOFT_ICRP", 1.101),
            Setpoint::new(2500, "G4_BONE_CORTICAL_ICRP", 2.088),
        ],
        25,
    )
    .unwrap();

    // Water-like tissue around intensity 0.
    let tissue = ramp.material_for(0).unwrap();
    assert_eq!(tissue.base(), "G4_LUNG_ICRP");
    assert!(tissue.density() > 0.3 && tissue.density() < 1.101);

    // The calibration endpoints are preserved exactly.
    assert_eq!(ramp.get(-1050).unwrap().density(), 0.001);
    assert_eq!(ramp.get(2500).unwrap().density(), 2.088);
}
