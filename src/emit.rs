//! Asset emitter: PNG serialization and the HTML review gallery.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::Result;

/// Serialize a canvas to a PNG file, creating intermediate directories.
pub fn write_png(canvas: Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    canvas.into_rgb_image().save(path)?;
    Ok(())
}

/// Name of the emitted gallery document.
pub const GALLERY_FILE: &str = "preview.html";

/// Write a static HTML gallery of the produced files, grouped by theme.
///
/// `files` holds (theme, file name) pairs as reported by the batch drivers.
/// Only files that actually exist in `dir` are listed, so a partially
/// failed batch still yields a usable review page.
pub fn write_gallery(dir: &Path, files: &[(String, String)]) -> Result<PathBuf> {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Background Preview</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
         margin: 0; padding: 20px; background: #f5f5f5; }
  .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
          gap: 20px; max-width: 1200px; margin: 0 auto; }
  .card { background: white; border-radius: 12px; padding: 16px;
          box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
  .name { font-weight: 600; color: #333; margin-bottom: 12px; text-transform: capitalize; }
  .variants { display: grid; grid-template-columns: 1fr 1fr; gap: 8px; }
  .variants img { width: 100%; height: 140px; object-fit: cover;
                  border-radius: 8px; border: 1px solid #ddd; }
  .label { font-size: 11px; color: #666; text-align: center;
           text-transform: uppercase; letter-spacing: 0.5px; }
</style>
</head>
<body>
<h1 style="text-align:center;color:#333">Background Preview</h1>
<div class="grid">
"#,
    );

    let mut listed = 0usize;
    let mut current_theme: Option<&str> = None;
    for (theme, file) in files {
        if !dir.join(file).exists() {
            continue;
        }
        if current_theme != Some(theme.as_str()) {
            if current_theme.is_some() {
                html.push_str("</div></div>\n");
            }
            let display = theme.replace('_', " ");
            let _ = write!(html, "<div class=\"card\"><div class=\"name\">{display}</div><div class=\"variants\">\n");
            current_theme = Some(theme);
        }
        let label = file.trim_end_matches(".png").replace('_', " ");
        let _ = write!(
            html,
            "<div><img src=\"{file}\" alt=\"{label}\"><div class=\"label\">{label}</div></div>\n"
        );
        listed += 1;
    }
    if current_theme.is_some() {
        html.push_str("</div></div>\n");
    }

    let _ = write!(
        html,
        "</div>\n<p style=\"text-align:center;color:#666\">{listed} files</p>\n</body>\n</html>\n"
    );

    fs::create_dir_all(dir)?;
    let path = dir.join(GALLERY_FILE);
    fs::write(&path, html)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bgforge_{tag}_{}", std::process::id()))
    }

    #[test]
    fn gallery_only_lists_existing_files() {
        let dir = scratch_dir("gallery");
        let _ = fs::remove_dir_all(&dir);
        write_png(Canvas::filled(4, 4, Rgb::new(1, 2, 3)), &dir.join("real_dark.png")).unwrap();

        let files = vec![
            ("real".to_string(), "real_dark.png".to_string()),
            ("ghost".to_string(), "ghost_dark.png".to_string()),
        ];
        let path = write_gallery(&dir, &files).unwrap();
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("real_dark.png"));
        assert!(!html.contains("ghost_dark.png"));
        let _ = fs::remove_dir_all(&dir);
    }
}
