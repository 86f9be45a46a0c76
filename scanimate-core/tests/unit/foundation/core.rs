use super::*;

#[test]
fn strip_width_rejects_non_positive() {
    assert!(matches!(
        StripWidth::new(0),
        Err(ScanError::InvalidStripWidth(0))
    ));
    assert!(matches!(
        StripWidth::new(-3),
        Err(ScanError::InvalidStripWidth(-3))
    ));
    assert_eq!(StripWidth::new(4).unwrap().get(), 4);
}

#[test]
fn strip_width_saturates_huge_values() {
    let w = StripWidth::new(i64::MAX).unwrap();
    assert_eq!(w.get(), u32::MAX);
    assert_eq!(w.source_index(1_000_000, 3), 0);
}

#[test]
fn source_index_cycles_by_band() {
    let w = StripWidth::new(2).unwrap();
    let got: Vec<usize> = (0..10).map(|x| w.source_index(x, 3)).collect();
    assert_eq!(got, vec![0, 0, 1, 1, 2, 2, 0, 0, 1, 1]);
}

#[test]
fn strip_width_serde_validates() {
    let w: StripWidth = serde_json::from_str("3").unwrap();
    assert_eq!(w.get(), 3);
    assert!(serde_json::from_str::<StripWidth>("0").is_err());
    assert!(serde_json::from_str::<StripWidth>("-1").is_err());
    assert_eq!(serde_json::to_string(&w).unwrap(), "3");
}

#[test]
fn direction_parses_case_insensitively() {
    assert_eq!("Vertical".parse::<Direction>().unwrap(), Direction::Vertical);
    assert_eq!(
        " horizontal ".parse::<Direction>().unwrap(),
        Direction::Horizontal
    );
    assert!("diagonal".parse::<Direction>().is_err());
}

#[test]
fn size_display_and_extent() {
    let s = Size::new(640, 480);
    assert_eq!(s.to_string(), "640x480");
    assert_eq!(s.extent_along(Direction::Vertical), 640);
    assert_eq!(s.extent_along(Direction::Horizontal), 480);
    assert!(Size::new(0, 4).is_empty());
}
