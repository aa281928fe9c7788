use thiserror::Error;

/// Ошибка обращения к REST API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Сервер недоступен или запрос не удалось отправить
    #[error("Error de conexión: {0}")]
    Transport(String),
    /// Сервер ответил кодом вне 2xx; `message` берётся из тела ответа, если есть
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("No se pudo preparar la solicitud: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Сессия недействительна (401/403)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
