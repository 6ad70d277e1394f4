use thiserror::Error;

/// Everything that can stop a QR code from reaching disk.
#[derive(Error, Debug)]
pub enum QrGenError {
    #[error("No data provided")]
    EmptyInput,

    #[error("Invalid color '{0}': expected a color name or #rgb / #rrggbb")]
    InvalidColor(String),

    #[error("Invalid error correction level '{0}': expected L, M, Q or H")]
    InvalidErrorCorrection(String),

    #[error("Invalid box size {0}: must be at least 1")]
    InvalidBoxSize(u32),

    #[error("Image too large: border {border} with box size {box_size} exceeds the size limit")]
    ImageTooLarge { border: u32, box_size: u32 },

    #[error("Unsupported output format for '{0}'")]
    UnsupportedFormat(String),

    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QrGenError>;
