//! Integration tests for the two-stage outlier screen

use composite_core::{Band, DiagnosticRecord, Observation, Series};
use composite_screen::{OutlierScreen, ScreenThreshold};

fn observation(date: i32, green: f32, nir: f32) -> Observation {
    Observation::new(date, [210.0, green, 260.0, nir])
}

fn apply(screen: &OutlierScreen, input: &Series) -> (Series, DiagnosticRecord) {
    let mut stage = Series::new();
    let mut out = Series::new();
    let mut mask = Vec::new();
    let mut record = DiagnosticRecord::new();
    screen
        .apply(input, &mut stage, &mut out, &mut mask, Some(&mut record))
        .unwrap();
    (out, record)
}

/// Five observations where the last one spikes far above the green trend:
/// the spike is flagged, but removing it starves the stage, so the full
/// set must be restored.
#[test]
fn starved_green_stage_restores_full_input() {
    let input: Series = [
        observation(110, 300.0, 2800.0),
        observation(120, 301.0, 2801.0),
        observation(130, 302.0, 2803.0),
        observation(140, 303.0, 2804.0),
        observation(150, 500.0, 2805.0),
    ]
    .into_iter()
    .collect();

    let (out, record) = apply(&OutlierScreen::default(), &input);

    let green = record.green.unwrap();
    assert!(!green.accepted);
    assert_eq!(green.rejected.as_slice(), &[150]);
    // The restore is the *entire* pre-stage set, not a truncated one.
    assert_eq!(out.len(), input.len());
    assert_eq!(out.dates(), input.dates());
    assert_eq!(out.band(Band::Green), input.band(Band::Green));
}

/// Same shape on the NIR side: a lone dark observation in a five-point
/// window is flagged, stage two starves, and the stage-one output comes
/// back whole.
#[test]
fn starved_nir_stage_restores_stage_one_output() {
    let input: Series = [
        observation(110, 300.0, 2800.0),
        observation(120, 301.0, 2801.0),
        observation(130, 302.0, 2802.0),
        observation(140, 303.0, 2803.0),
        observation(150, 304.0, 2500.0),
    ]
    .into_iter()
    .collect();

    let (out, record) = apply(&OutlierScreen::default(), &input);

    assert!(record.green.unwrap().accepted);
    let nir = record.nir.unwrap();
    assert!(!nir.accepted);
    assert_eq!(nir.rejected.as_slice(), &[150]);
    assert_eq!(out.len(), input.len());
    assert_eq!(out.band(Band::Nir), input.band(Band::Nir));
}

/// With a six-point window the same green spike is simply removed and both
/// stages succeed.
#[test]
fn spike_removed_when_enough_observations_remain() {
    let input: Series = [
        observation(110, 300.0, 2800.0),
        observation(120, 301.0, 2801.0),
        observation(130, 302.0, 2802.0),
        observation(140, 303.0, 2803.0),
        observation(150, 500.0, 2804.0),
        observation(160, 305.0, 2805.0),
    ]
    .into_iter()
    .collect();

    let (out, record) = apply(&OutlierScreen::default(), &input);

    let green = record.green.unwrap();
    assert!(green.accepted);
    assert_eq!(green.rejected.as_slice(), &[150]);
    assert_eq!(out.len(), 5);
    assert!(!out.dates().contains(&150));
    assert!(record.nir.unwrap().accepted);
}

/// A looser threshold keeps the spike; a tighter one rejects it.
#[test]
fn threshold_controls_sensitivity() {
    let input: Series = [
        observation(110, 300.0, 2800.0),
        observation(120, 304.0, 2801.0),
        observation(130, 297.0, 2802.0),
        observation(140, 303.0, 2803.0),
        observation(150, 330.0, 2804.0),
        observation(160, 301.0, 2805.0),
    ]
    .into_iter()
    .collect();

    let tight = OutlierScreen::new(ScreenThreshold::new(2.32).unwrap(), 5);
    let (_, record) = apply(&tight, &input);
    assert_eq!(record.green.unwrap().rejected.as_slice(), &[150]);

    let loose = OutlierScreen::new(ScreenThreshold::new(10.0).unwrap(), 5);
    let (out, record) = apply(&loose, &input);
    assert!(record.green.unwrap().rejected.is_empty());
    assert_eq!(out.len(), 6);
}
