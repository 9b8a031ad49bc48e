use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = OverlayConfig::default();
    assert_eq!(cfg.size, CanvasSize::new(1024, 1024).unwrap());
    assert_eq!(cfg.aspect_ratio, 1.5);
    assert_eq!(cfg.scale, 0.5);
    assert_eq!(cfg.color, Color::WHITE);
    assert!(!cfg.centerpoint && !cfg.symmetrygrid && !cfg.label);
    assert_eq!(cfg.fit_mode, FitMode::Height);
    assert_eq!(cfg.inset, EndpointInset::Mixed);
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_non_positive_values() {
    let bad_ratio = OverlayConfig {
        aspect_ratio: 0.0,
        ..OverlayConfig::default()
    };
    assert!(bad_ratio.validate().is_err());

    let bad_scale = OverlayConfig {
        scale: f64::NAN,
        ..OverlayConfig::default()
    };
    assert!(bad_scale.validate().is_err());
}

#[test]
fn parse_color_accepts_whitespace() {
    assert_eq!(
        parse_color("1.0, 0.5 ,0").unwrap(),
        Color::new(1.0, 0.5, 0.0)
    );
}

#[test]
fn parse_color_reports_raw_string() {
    let err = parse_color("1.0,red,0").unwrap_err();
    assert_eq!(err.to_string(), "could not parse color from string: 1.0,red,0");
    assert!(parse_color("1,1").is_err());
    assert!(parse_color("1,1,1,1").is_err());
}

#[test]
fn parse_size_requires_two_positive_ints() {
    assert_eq!(
        parse_size("800,600").unwrap(),
        CanvasSize::new(800, 600).unwrap()
    );
    assert!(parse_size("800x600").is_err());
    assert!(parse_size("800,-1").is_err());
    assert!(parse_size("0,600").is_err());
}

#[test]
fn parse_f64_names_the_value() {
    assert_eq!(parse_f64("scale", " 0.25 ").unwrap(), 0.25);
    let err = parse_f64("aspect ratio", "wide").unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not parse aspect ratio from string: wide"
    );
}
