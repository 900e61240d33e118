use std::fmt;
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    UnsupportedType,
    TooLarge(usize),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedType => {
                write!(f, "Please upload a valid image file (JPEG, PNG, or GIF)")
            }
            ImageError::TooLarge(_) => write!(f, "Image size should be less than 5MB"),
        }
    }
}

impl std::error::Error for ImageError {}

/// Checks raw image bytes, returning the sniffed mime type.
fn check_image(file: &[u8]) -> Result<&'static str, ImageError> {
    // Sniff the content; the client-declared type is not trusted.
    let file_type = infer::get(file).ok_or(ImageError::UnsupportedType)?;
    let mime = ALLOWED_IMAGE_TYPES
        .iter()
        .copied()
        .find(|allowed| *allowed == file_type.mime_type())
        .ok_or(ImageError::UnsupportedType)?;

    if file.len() > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge(file.len()));
    }

    Ok(mime)
}

/// Checks an uploaded profile image and encodes it as a data URI.
pub fn encode_profile_image(file: &[u8]) -> Result<String, ImageError> {
    let mime = check_image(file)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(file)))
}

/// Re-checks a `data:<mime>;base64,<payload>` URI sent back by a client.
pub fn check_profile_image_uri(uri: &str) -> Result<(), ImageError> {
    let (mime, payload) = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .ok_or(ImageError::UnsupportedType)?;
    if !ALLOWED_IMAGE_TYPES.iter().any(|allowed| *allowed == mime) {
        return Err(ImageError::UnsupportedType);
    }

    let file = STANDARD.decode(payload).map_err(|_| ImageError::UnsupportedType)?;
    if check_image(&file)? != mime {
        return Err(ImageError::UnsupportedType);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
