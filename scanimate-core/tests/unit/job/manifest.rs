use super::*;

#[test]
fn defaults_fill_missing_fields() {
    let m = JobManifest::from_reader(r#"{ "jobs": [ {} ] }"#.as_bytes()).unwrap();
    assert_eq!(m.jobs, vec![ScanJob::default()]);
    assert_eq!(m.jobs[0].strip_width.get(), 1);
    assert_eq!(m.jobs[0].out_base, PathBuf::from(DEFAULT_BASE_OUTPUT));
    assert!(!m.jobs[0].generate_grille());
}

#[test]
fn full_job_parses() {
    let json = r#"{
      "jobs": [{
        "frame_dir": "frames",
        "recursive": true,
        "extensions": ["png"],
        "strip_width": 3,
        "direction": "horizontal",
        "resize": "min",
        "output_mode": "white-bg",
        "out_base": "out/base.png",
        "out_mask": "out/mask.png"
      }]
    }"#;
    let job = &JobManifest::from_reader(json.as_bytes()).unwrap().jobs[0];
    assert_eq!(job.strip_width.get(), 3);
    assert_eq!(job.direction, Direction::Horizontal);
    assert_eq!(job.resize, ResizeStrategy::Min);
    assert_eq!(job.output_mode, OutputMode::WhiteBackground);
    assert!(job.generate_grille());
}

#[test]
fn invalid_strip_width_is_rejected() {
    let err = JobManifest::from_reader(r#"{ "jobs": [ { "strip_width": 0 } ] }"#.as_bytes())
        .unwrap_err();
    assert!(err.to_string().contains("strip width"));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(JobManifest::from_reader(r#"{ "jobs": [ { "slice": 2 } ] }"#.as_bytes()).is_err());
}

#[test]
fn relative_paths_resolve_against_base() {
    let job = ScanJob {
        out_mask: Some(PathBuf::from("mask.png")),
        ..ScanJob::default()
    }
    .resolve_relative_to(Path::new("/data/run"));
    assert_eq!(job.frame_dir, PathBuf::from("/data/run/."));
    assert_eq!(job.out_base, PathBuf::from("/data/run/scanimation_base.png"));
    assert_eq!(job.out_mask, Some(PathBuf::from("/data/run/mask.png")));
}

#[test]
fn same_base_and_mask_path_fails_validation() {
    let job = ScanJob {
        out_mask: Some(PathBuf::from(DEFAULT_BASE_OUTPUT)),
        ..ScanJob::default()
    };
    assert!(matches!(job.validate(), Err(ScanError::Validation(_))));
}

#[test]
fn same_file_spelled_differently_fails_validation() {
    let job = ScanJob {
        out_base: PathBuf::from("out/base.png"),
        out_mask: Some(PathBuf::from("./out/../out/base.png")),
        ..ScanJob::default()
    };
    assert!(matches!(job.validate(), Err(ScanError::Validation(_))));
}

#[test]
fn white_bg_name_matches_from_str() {
    let json = r#"{ "jobs": [ { "output_mode": "white-bg" } ] }"#;
    let m = JobManifest::from_reader(json.as_bytes()).unwrap();
    assert_eq!(m.jobs[0].output_mode, OutputMode::WhiteBackground);
    assert_eq!(
        "white-bg".parse::<OutputMode>().unwrap(),
        m.jobs[0].output_mode
    );

    let back = serde_json::to_value(&m.jobs[0]).unwrap();
    assert_eq!(back["output_mode"], "white-bg");
    assert_eq!(back["direction"], "vertical");
    assert_eq!(back["resize"], "strict");
}
