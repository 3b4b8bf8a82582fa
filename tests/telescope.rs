use approx::{assert_abs_diff_eq, assert_relative_eq};
use quasi_optics::prelude::*;

const CENTER_GHZ: Scalar = 250.0;

fn telescope() -> System {
    let sweep = FrequencySweep::centered(CENTER_GHZ, 100.0, 101, "GHz").unwrap();
    let horn = Horn::new(sweep, 22.64, 3.6, 0.59, &ElementOptions::new().comment("Tx")).unwrap();
    let mm = ElementOptions::new();
    let z = horn.z_offset_at(CENTER_GHZ, "GHz", "mm").unwrap();
    let air_red = Element::free_space(160.0 - z, &mm).unwrap();
    let air = Element::free_space(160.0, &mm).unwrap();
    let mirror = Element::mirror(16.0, &mm.clone().units("cm")).unwrap();
    let elements = vec![
        air_red.clone(),
        mirror.clone(),
        air.clone(),
        air,
        mirror,
        air_red,
    ];
    System::new(horn, elements, None, &SystemOptions::default()).unwrap()
}

#[test]
fn symmetric_telescope_peaks_at_design_frequency() {
    let system = telescope();
    let center = system.sweep().index_of(CENTER_GHZ, "GHz").unwrap();
    assert_eq!(center, system.sweep().center_index());
    for (i, &c) in system.coupling().iter().enumerate() {
        assert!((0.0..=1.0).contains(&c), "coupling {c} at sample {i}");
        if i == center {
            assert_abs_diff_eq!(c, 1.0, epsilon = 1e-9);
        } else {
            assert!(c < 1.0, "coupling at sample {i} is {c}");
        }
    }
    assert_relative_eq!(system.best_coupling_frequency(), 250.0e9, max_relative = 1e-12);
}

#[test]
fn coupling_falls_off_away_from_design_frequency() {
    let system = telescope();
    let coupling = system.coupling();
    // Moving away from the design frequency only loses coupling.
    for i in 1..50 {
        assert!(coupling[50 - i] < coupling[50 - i + 1]);
        assert!(coupling[50 + i] < coupling[50 + i - 1]);
    }
}

#[test]
fn sweeps_from_equivalent_configs_build_the_same_system() {
    let by_range = SweepConfig::default().start_stop(200.0, 300.0, 101);
    let by_center = SweepConfig::default().center_span(250.0, 100.0, 101);
    let a = FrequencySweep::from_config(&by_range).unwrap();
    let b = FrequencySweep::from_config(&by_center).unwrap();
    assert_eq!(a, b);

    let tx = Horn::new(a, 22.64, 3.6, 0.59, &ElementOptions::new()).unwrap();
    let rx = Horn::new(b, 22.64, 3.6, 0.59, &ElementOptions::new().comment("Rx")).unwrap();
    let system = System::new(tx, Vec::new(), Some(rx), &SystemOptions::default()).unwrap();
    assert_eq!(system.receive_horn().comment(), "Rx");
}

#[test]
fn mismatched_horns_are_rejected() {
    let tx_sweep = FrequencySweep::single(250.0, "GHz").unwrap();
    let rx_sweep = FrequencySweep::single(251.0, "GHz").unwrap();
    let tx = Horn::new(tx_sweep, 22.64, 3.6, 0.59, &ElementOptions::new()).unwrap();
    let rx = Horn::new(rx_sweep, 22.64, 3.6, 0.59, &ElementOptions::new()).unwrap();
    let err = System::new(tx, Vec::new(), Some(rx), &SystemOptions::default()).unwrap_err();
    assert!(matches!(err, OpticsError::FrequencyMismatch { transmit: 1, receive: 1 }));
}
