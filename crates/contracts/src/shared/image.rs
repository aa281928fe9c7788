//! Изображение актива, встроенное в JSON как data URL

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// MIME-тип для значений, сохранённых как голый base64
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("El archivo seleccionado no es una imagen ({0})")]
    NotAnImage(String),
    #[error("El archivo seleccionado está vacío")]
    Empty,
}

/// Закодировать содержимое файла в `data:<mime>;base64,<payload>`
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> Result<String, ImageError> {
    let mime = mime.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") {
        return Err(ImageError::NotAnImage(if mime.is_empty() {
            "desconocido".to_string()
        } else {
            mime
        }));
    }
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Адрес для `<img src>`: data URL как есть, голый base64 с типом по умолчанию
pub fn display_src(stored: &str) -> Option<String> {
    let stored = stored.trim();
    if stored.is_empty() {
        None
    } else if stored.starts_with("data:") {
        Some(stored.to_string())
    } else {
        Some(format!("data:{};base64,{}", DEFAULT_IMAGE_MIME, stored))
    }
}
