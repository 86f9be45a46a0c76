use super::*;

fn strip(px: i64) -> StripWidth {
    StripWidth::new(px).unwrap()
}

#[test]
fn alternating_bands_start_with_slit() {
    let g = make_grille(8, 3, strip(2)).unwrap();
    assert_eq!(g.dimensions(), (8, 3));
    let expected = [
        GRILLE_SLIT,
        GRILLE_SLIT,
        GRILLE_OPAQUE,
        GRILLE_OPAQUE,
        GRILLE_SLIT,
        GRILLE_SLIT,
        GRILLE_OPAQUE,
        GRILLE_OPAQUE,
    ];
    for y in 0..3 {
        for (x, want) in expected.iter().enumerate() {
            assert_eq!(g.get_pixel(x as u32, y), want, "x={x} y={y}");
        }
    }
}

#[test]
fn periodic_grille_opens_one_slit_per_cycle() {
    let g = make_periodic_grille(Size::new(12, 1), strip(2), 3, Direction::Vertical).unwrap();
    let slits: Vec<u32> = (0..12)
        .filter(|&x| *g.get_pixel(x, 0) == GRILLE_SLIT)
        .collect();
    assert_eq!(slits, vec![0, 1, 6, 7]);
    assert_eq!(grille_period(strip(2), 3), 6);
}

#[test]
fn horizontal_grille_bands_rows() {
    let g = make_periodic_grille(Size::new(2, 5), strip(1), 2, Direction::Horizontal).unwrap();
    for y in 0..5 {
        let want = if y % 2 == 0 { GRILLE_SLIT } else { GRILLE_OPAQUE };
        assert_eq!(*g.get_pixel(0, y), want);
        assert_eq!(*g.get_pixel(1, y), want);
    }
}

#[test]
fn partial_last_band_is_truncated() {
    let g = make_grille(5, 1, strip(2)).unwrap();
    assert_eq!(*g.get_pixel(4, 0), GRILLE_SLIT);
}

#[test]
fn empty_size_is_rejected() {
    assert!(matches!(
        make_grille(0, 4, strip(1)),
        Err(ScanError::Validation(_))
    ));
}

#[test]
fn grille_is_deterministic() {
    let a = make_grille(31, 7, strip(3)).unwrap();
    let b = make_grille(31, 7, strip(3)).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}
