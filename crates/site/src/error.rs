use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("failed to parse page address `{address}`"))]
  Address { address: String, source: UrlError },
  #[snafu(display("invalid comment limit"))]
  CommentLimit { source: model::Error },
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    url: Url,
    source: serde_json::Error,
  },
  DocumentMissing,
  #[snafu(display("element `#{id}` missing"))]
  ElementMissing { id: String },
  #[snafu(display("element `#{id}` is not an input"))]
  ElementNotInput { id: String },
  #[snafu(display("{operation} failed: {message}"))]
  Js {
    operation: &'static str,
    message: String,
  },
  #[snafu(display("map has not been created"))]
  MapMissing,
  #[snafu(display("unknown page"))]
  Page { source: model::Error },
  #[snafu(display("request to {url} failed"))]
  Request {
    url: Url,
    source: reqwest::Error,
  },
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status {
    url: Url,
    status: StatusCode,
  },
  #[snafu(display("failed to join `{path}` to {base}"))]
  UrlJoin {
    base: Url,
    path: &'static str,
    source: UrlError,
  },
  #[snafu(display("response from {url} is not UTF-8"))]
  Utf8 {
    url: Url,
    source: FromUtf8Error,
  },
  WindowMissing,
}

impl Error {
  /// Whether a fresh attempt at the same request might succeed.
  pub(crate) fn is_transient(&self) -> bool {
    match self {
      Self::Request { .. } => true,
      Self::Status { status, .. } => status.is_server_error(),
      _ => false,
    }
  }
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
