use std::{
    fs::{self, Permissions},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, RgbaImage};
use tempfile::NamedTempFile;

// sources without alpha come out fully opaque
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Writes `img` as PNG to `dest` by way of a temporary file in the same
/// directory, so a failure never leaves a truncated file behind.
pub fn save_png(img: &RgbaImage, dest: &Path) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create a temporary file in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        PngEncoder::new(&mut writer)
            .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
            .with_context(|| format!("Failed to encode PNG for {}", dest.display()))?;
        writer.flush()?;
    }

    // the temporary file is created owner-only
    if let Some(perms) = output_permissions(dest) {
        tmp.as_file()
            .set_permissions(perms)
            .with_context(|| format!("Failed to set permissions for {}", dest.display()))?;
    }

    tmp.persist(dest)
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    Ok(())
}

fn output_permissions(dest: &Path) -> Option<Permissions> {
    match fs::metadata(dest) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
