use water_hammer_estimator::conversion::{convert, ConversionError};
use water_hammer_estimator::quantity::QuantityKind;

#[test]
fn form_units_convert_to_si() {
    let d = convert(QuantityKind::Length, 4.0, "in", "m").unwrap();
    assert!((d - 0.1016).abs() < 1e-12);
    let l = convert(QuantityKind::Length, 100.0, "ft", "m").unwrap();
    assert!((l - 30.48).abs() < 1e-9);
    let q = convert(QuantityKind::VolumeFlow, 100.0, "gpm", "m3/s").unwrap();
    assert!((q - 0.006309).abs() < 1e-12);
    let t = convert(QuantityKind::Time, 250.0, "ms", "s").unwrap();
    assert!((t - 0.25).abs() < 1e-12);
}

#[test]
fn psi_uses_joukowsky_display_factor() {
    let pa = convert(QuantityKind::Pressure, 1.0, "psi", "Pa").unwrap();
    assert!((pa - 6894.76).abs() < 1e-9);
    let bar = convert(QuantityKind::Pressure, 154.373, "PSI", "bar").unwrap();
    assert!((bar - 10.6436).abs() < 1e-3, "bar={bar}");
}

#[test]
fn unit_strings_are_case_insensitive_and_accept_superscript() {
    let h = convert(QuantityKind::VolumeFlow, 3600.0, "M³/H", "L/s").unwrap();
    assert!((h - 1000.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_reported() {
    let err = convert(QuantityKind::Length, 1.0, "furlong", "m").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("furlong".into()));
}
