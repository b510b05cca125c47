use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum ServerError {
  BadRequest { message: String },
  NotFound { message: String },
}

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    match self {
      Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message).into_response(),
      Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
    }
  }
}

impl From<MultipartError> for ServerError {
  fn from(err: MultipartError) -> Self {
    Self::BadRequest {
      message: err.body_text(),
    }
  }
}
