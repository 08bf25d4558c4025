//! Export driver: runs the fixed asset sequence and writes the PNGs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use tracing::info;

use crate::compose::{create_foreground_logo, create_main_logo, create_splash_logo};

/// Main logo and adaptive-icon foreground resolution.
pub const LOGO_SIZE: u32 = 1024;
/// Splash-screen pictogram resolution.
pub const SPLASH_SIZE: u32 = 512;
/// Extra launcher/store sizes derived from the main logo.
pub const DERIVED_SIZES: [u32; 2] = [192, 512];

/// Generate every Healtiefy asset into `out_dir`, creating it if absent.
///
/// The sequence is fixed: main logo, adaptive-icon foreground, splash
/// pictogram, then the derived resizes of the main logo. Any filesystem or
/// encoding failure aborts the run.
pub fn export_all(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    info!("creating main logo ({0}x{0})", LOGO_SIZE);
    let logo = create_main_logo(LOGO_SIZE);
    save(&logo, out_dir, "logo.png")?;

    info!("creating adaptive icon foreground ({0}x{0})", LOGO_SIZE);
    save(&create_foreground_logo(LOGO_SIZE), out_dir, "logo_foreground.png")?;

    info!("creating splash logo ({0}x{0})", SPLASH_SIZE);
    save(&create_splash_logo(SPLASH_SIZE), out_dir, "splash_logo.png")?;

    for size in DERIVED_SIZES {
        info!("creating logo_{size}.png");
        let resized = imageops::resize(&logo, size, size, FilterType::Lanczos3);
        save(&resized, out_dir, &format!("logo_{size}.png"))?;
    }

    info!("all logo assets written to {}", out_dir.display());
    Ok(())
}

fn save(img: &image::RgbaImage, out_dir: &Path, name: &str) -> Result<()> {
    let path = out_dir.join(name);
    img.save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "healtiefy-assets-{tag}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&path);
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn export_writes_all_five_assets_at_documented_sizes() {
        let dir = TempDir::new("export");
        export_all(&dir.0).unwrap();

        let expected = [
            ("logo.png", 1024),
            ("logo_foreground.png", 1024),
            ("splash_logo.png", 512),
            ("logo_192.png", 192),
            ("logo_512.png", 512),
        ];
        for (name, size) in expected {
            let img = image::open(dir.0.join(name)).unwrap();
            assert_eq!(img.width(), size, "{name} width");
            assert_eq!(img.height(), size, "{name} height");
        }

        let png_count = fs::read_dir(&dir.0)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
            .count();
        assert_eq!(png_count, 5);
    }

    #[test]
    fn export_is_idempotent() {
        let dir = TempDir::new("idempotent");
        export_all(&dir.0).unwrap();
        let first = fs::read(dir.0.join("splash_logo.png")).unwrap();
        export_all(&dir.0).unwrap();
        let second = fs::read(dir.0.join("splash_logo.png")).unwrap();
        assert_eq!(first, second);
    }
}
