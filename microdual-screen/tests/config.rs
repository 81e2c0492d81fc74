use approx::assert_relative_eq;
use microdual_screen::{IndexBox, ScreeningConfig, ScreeningError};

#[test]
fn defaults() {
    let cfg = ScreeningConfig::default();
    assert_eq!(cfg.dens_min, 10.0);
    assert_eq!(cfg.dens_max, 5e9);
    assert_eq!(cfg.temp_min, 1e6);
    assert_eq!(cfg.temp_max, 1e10);
    assert_eq!(cfg.metalicity_max, 0.1);
    assert_eq!(cfg.n_cell, 16);
    cfg.validate().unwrap();
}

#[test]
fn partial_document_fills_defaults() {
    let cfg = ScreeningConfig::from_json_str(r#"{ "n_cell": 8, "temp_max": 1e9 }"#).unwrap();
    assert_eq!(cfg.n_cell, 8);
    assert_eq!(cfg.temp_max, 1e9);
    assert_eq!(cfg.dens_min, 10.0);
}

#[test]
fn json_round_trip() {
    let cfg = ScreeningConfig {
        dens_min: 1e2,
        n_cell: 3,
        ..ScreeningConfig::default()
    };
    let text = cfg.to_json_string().unwrap();
    assert_eq!(ScreeningConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn spacing_and_box() {
    let cfg = ScreeningConfig {
        dens_min: 1e2,
        dens_max: 1e8,
        temp_min: 1e6,
        temp_max: 1e9,
        metalicity_max: 0.06,
        n_cell: 4,
    };
    assert_eq!(cfg.index_box(), IndexBox::new([0, 0, 0], [3, 3, 3]));
    let d = cfg.spacing();
    assert_relative_eq!(d.dlogrho, 2.0, max_relative = 1e-15);
    assert_relative_eq!(d.dlogt, 1.0, max_relative = 1e-15);
    assert_relative_eq!(d.dmetal, 0.02, max_relative = 1e-15);
}

#[test]
fn single_cell_has_zero_spacing() {
    let cfg = ScreeningConfig {
        n_cell: 1,
        ..ScreeningConfig::default()
    };
    let d = cfg.spacing();
    assert_eq!((d.dlogrho, d.dlogt, d.dmetal), (0.0, 0.0, 0.0));
    assert_eq!(cfg.index_box().num_cells(), 1);
}

#[test]
fn rejects_invalid_ranges() {
    for doc in [
        r#"{ "dens_min": -1.0 }"#,
        r#"{ "temp_min": 1e9, "temp_max": 1e8 }"#,
        r#"{ "dens_min": 1e6, "dens_max": 1e3 }"#,
        r#"{ "metalicity_max": 1.5 }"#,
        r#"{ "n_cell": 0 }"#,
    ] {
        match ScreeningConfig::from_json_str(doc) {
            Err(ScreeningError::Config(_)) => {}
            other => panic!("{doc}: expected a config error, got {other:?}"),
        }
    }
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(
        ScreeningConfig::from_json_str("{ n_cell: "),
        Err(ScreeningError::Config(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ScreeningConfig::from_json_file("/nonexistent/screening.json").unwrap_err();
    assert!(matches!(err, ScreeningError::Io(_)));
}
