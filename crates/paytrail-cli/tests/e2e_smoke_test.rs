use std::{fs, path::PathBuf};

use tempfile::tempdir;

use paytrail_cli::{Args, run};

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn schedules_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schedules")
}

fn args_for(input: Option<String>, output: &std::path::Path) -> Args {
    Args {
        input,
        output: output.to_string_lossy().to_string(),
        log_level: "off".to_string(),
        ..Args::default()
    }
}

#[test]
fn e2e_smoke_test_valid_schedules() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let schedules = collect_toml_files(schedules_dir());

    assert!(!schedules.is_empty(), "No schedules found in schedules/");

    let mut failed = Vec::new();

    for schedule in &schedules {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            schedule.file_stem().unwrap().to_string_lossy()
        ));
        let args = args_for(Some(schedule.to_string_lossy().to_string()), &output_path);

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("output written");
                assert!(svg.contains("</svg>"), "{} is incomplete", output_path.display());
            }
            Err(e) => failed.push((schedule.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nSchedules that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} schedule(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_schedules() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let schedules = collect_toml_files(schedules_dir().join("errors"));

    assert!(
        !schedules.is_empty(),
        "No error schedules found in schedules/errors/"
    );

    let unexpectedly_succeeded: Vec<_> = schedules
        .iter()
        .filter(|schedule| {
            let output_path = temp_dir.path().join(format!(
                "error_{}.svg",
                schedule.file_stem().unwrap().to_string_lossy()
            ));
            run(&args_for(Some(schedule.to_string_lossy().to_string()), &output_path)).is_ok()
        })
        .collect();

    assert!(
        unexpectedly_succeeded.is_empty(),
        "Error schedules succeeded unexpectedly: {unexpectedly_succeeded:?}"
    );
}

#[test]
fn e2e_sample_schedule_with_overrides_and_taps() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("sample.svg");

    let args = Args {
        lang: Some("en".to_string()),
        width: Some(640.0),
        taps: vec!["60".to_string(), "90".to_string()],
        ..args_for(None, &output_path)
    };
    run(&args).expect("sample schedule renders");

    let svg = fs::read_to_string(&output_path).expect("output written");
    assert!(svg.contains("viewBox=\"0 0 640 280\""));
    assert!(svg.contains("Premium Payment Finished"));
    assert!(svg.contains("data-layer=\"tooltip\""));
}

#[test]
fn e2e_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.svg");

    let args = Args {
        config: Some("does/not/exist.toml".to_string()),
        ..args_for(None, &output_path)
    };

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}
