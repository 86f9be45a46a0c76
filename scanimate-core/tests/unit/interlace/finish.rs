use super::*;
use image::Rgba;

#[test]
fn white_background_fills_transparency() {
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
    img.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

    let out = composite_on_white(&img);
    assert_eq!(*out.get_pixel(0, 0), Rgb([255, 255, 255]));
    assert_eq!(*out.get_pixel(1, 0), Rgb([10, 20, 30]));
    let half = ((255u32 * 127 + 127) / 255) as u8;
    assert_eq!(*out.get_pixel(2, 0), Rgb([half, half, half]));
}

#[test]
fn finish_picks_color_type() {
    let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
    assert!(matches!(
        finish(img.clone(), OutputMode::Rgba),
        DynamicImage::ImageRgba8(_)
    ));

    let rgb = finish(img.clone(), OutputMode::Rgb);
    let DynamicImage::ImageRgb8(rgb) = rgb else {
        panic!("expected rgb8");
    };
    assert_eq!(*rgb.get_pixel(0, 0), Rgb([1, 2, 3]));

    assert!(matches!(
        finish(img, OutputMode::WhiteBackground),
        DynamicImage::ImageRgb8(_)
    ));
}

#[test]
fn white_bg_flag_wins() {
    assert_eq!(OutputMode::from_flags(true, true), OutputMode::WhiteBackground);
    assert_eq!(OutputMode::from_flags(true, false), OutputMode::Rgb);
    assert_eq!(OutputMode::from_flags(false, false), OutputMode::Rgba);
}

#[test]
fn mode_names_parse() {
    assert_eq!(
        "white-bg".parse::<OutputMode>().unwrap(),
        OutputMode::WhiteBackground
    );
    assert_eq!("RGB".parse::<OutputMode>().unwrap(), OutputMode::Rgb);
    assert!("cmyk".parse::<OutputMode>().is_err());
}

#[test]
fn serde_and_from_str_agree() {
    for mode in [
        OutputMode::Rgba,
        OutputMode::Rgb,
        OutputMode::WhiteBackground,
    ] {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", mode.as_str()));
        assert_eq!(mode.as_str().parse::<OutputMode>().unwrap(), mode);
        assert_eq!(serde_json::from_str::<OutputMode>(&json).unwrap(), mode);
    }
    assert_eq!(
        serde_json::from_str::<OutputMode>("\"white-background\"").unwrap(),
        OutputMode::WhiteBackground
    );
}
