//! Output path conventions and format selection.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{QrGenError, Result};

/// Directory used when the output path names a bare file.
pub const DEFAULT_DIR: &str = "generated_png";

pub const DEFAULT_EXTENSION: &str = "png";

/// How the rendered symbol is written to disk.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Svg,
    Raster(ImageFormat),
}

impl OutputFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let unsupported = || QrGenError::UnsupportedFormat(path.display().to_string());

        let ext = extension_of(path).ok_or_else(unsupported)?;

        if ext.eq_ignore_ascii_case("svg") {
            return Ok(OutputFormat::Svg);
        }

        match ImageFormat::from_extension(ext) {
            Some(format) if format.writing_enabled() => Ok(OutputFormat::Raster(format)),
            _ => Err(unsupported()),
        }
    }
}

/// The file extension, also for a bare dotfile name: `out/.png` is a PNG.
fn extension_of(path: &Path) -> Option<&str> {
    if let Some(ext) = path.extension() {
        return ext.to_str();
    }
    path.file_name()?
        .to_str()?
        .strip_prefix('.')
        .filter(|ext| !ext.is_empty())
}

/// Appends `.{default_ext}` when the file name has no extension.
///
/// `qrcode` becomes `qrcode.png`; `qrcode.jpg` and `out/qr.png` are left alone.
pub fn ensure_extension(path: &str, default_ext: &str) -> PathBuf {
    if Path::new(path).extension().is_some() {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{}.{}", path, default_ext))
    }
}

/// Applies the extension and default-directory conventions.
pub fn resolve_output_path(path: &str) -> PathBuf {
    let output = ensure_extension(path, DEFAULT_EXTENSION);
    let has_dir = output
        .parent()
        .map(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(false);

    if has_dir {
        output
    } else {
        Path::new(DEFAULT_DIR).join(output)
    }
}
