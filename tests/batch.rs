use std::fs;
use std::path::PathBuf;

use bgforge::{themes, CanvasSize, Error, GeneratorConfig, Style};

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bgforge_batch_{tag}_{}", std::process::id()))
}

fn small_config(out_dir: PathBuf) -> GeneratorConfig {
    GeneratorConfig {
        out_dir,
        size: CanvasSize { width: 20, height: 32 },
        ..Default::default()
    }
}

#[test]
fn motif_batch_emits_every_theme_in_both_modes() {
    let dir = scratch_dir("motifs");
    let _ = fs::remove_dir_all(&dir);

    let cfg = GeneratorConfig {
        style: Style::Epic,
        ..small_config(dir.clone())
    };
    let report = bgforge::run_motifs(&cfg);

    assert_eq!(report.failed, 0);
    assert_eq!(report.generated, themes::REGISTRY.len() * 2);
    assert!(dir.join("matrix_dark_epic.png").exists());
    assert!(dir.join("starfield_cosmic_light_epic.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn standard_style_drops_the_file_suffix() {
    let dir = scratch_dir("standard");
    let _ = fs::remove_dir_all(&dir);

    let cfg = GeneratorConfig {
        style: Style::Standard,
        ..small_config(dir.clone())
    };
    let report = bgforge::run_motifs(&cfg);

    assert_eq!(report.failed, 0);
    assert!(dir.join("matrix_dark.png").exists());
    assert!(!dir.join("matrix_dark_epic.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn gradient_batch_skips_empty_palettes_but_continues() -> anyhow::Result<()> {
    let dir = scratch_dir("gradients");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir)?;

    let config_path = dir.join("theme_colors.json");
    fs::write(
        &config_path,
        r##"{
            "themes": {
                "blank": { "dark": [] },
                "ocean": {
                    "dark": ["#101820", "#30506a", "#7fb0d0"],
                    "light": { "colors": ["#f0f4f8", "#c0d0e0"] }
                }
            }
        }"##,
    )?;

    let cfg = GeneratorConfig {
        config_path: Some(config_path),
        ..small_config(dir.clone())
    };
    let report = bgforge::run_gradients(&cfg)?;

    // "blank" fails its dark mode; "ocean" emits radial + linear per mode.
    assert_eq!(report.failed, 1);
    assert_eq!(report.generated, 4);
    assert!(dir.join("ocean_dark_radial.png").exists());
    assert!(dir.join("ocean_light_linear.png").exists());
    assert!(!dir.join("blank_dark_radial.png").exists());

    let _ = fs::remove_dir_all(&dir);
    Ok(())
}

#[test]
fn missing_configuration_is_fatal_to_the_gradient_batch() {
    let dir = scratch_dir("noconfig");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let cfg = small_config(dir.clone());
    match bgforge::run_gradients(&cfg) {
        Err(Error::ConfigMissing(p)) => assert_eq!(p, dir),
        other => panic!("expected ConfigMissing, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn discovery_prefers_the_enhanced_export() {
    let dir = scratch_dir("discovery");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    // Enhanced doc carries one theme, basic doc another; only the enhanced
    // theme's files should be produced.
    fs::write(
        dir.join("enhanced_theme_data.json"),
        r##"{ "themes": { "enh": { "dark": { "colors": ["#112233", "#445566"] } } } }"##,
    )
    .unwrap();
    fs::write(
        dir.join("theme_colors.json"),
        r##"{ "themes": { "basic": { "dark": ["#000000"] } } }"##,
    )
    .unwrap();

    let cfg = small_config(dir.clone());
    let report = bgforge::run_gradients(&cfg).unwrap();
    assert_eq!(report.generated, 2);
    assert!(dir.join("enh_dark_radial.png").exists());
    assert!(!dir.join("basic_dark_radial.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn gallery_reflects_a_completed_batch() {
    let dir = scratch_dir("gallery");
    let _ = fs::remove_dir_all(&dir);

    let cfg = small_config(dir.clone());
    let report = bgforge::run_motifs(&cfg);
    let path = bgforge::emit::write_gallery(&dir, &report.files).unwrap();

    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains("matrix_dark_epic.png"));
    assert!(html.contains("unicorn_dream_light_epic.png"));

    let _ = fs::remove_dir_all(&dir);
}
