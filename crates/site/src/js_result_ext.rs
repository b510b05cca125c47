use super::*;

pub(crate) trait JsResultExt<T> {
  fn js_context(self, operation: &'static str) -> Result<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
  fn js_context(self, operation: &'static str) -> Result<T> {
    self.map_err(|value| Error::Js {
      operation,
      message: value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}")),
    })
  }
}
