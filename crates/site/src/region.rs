use super::*;

/// Attribute recording the state of a render region.
pub(crate) const STATE: &str = "data-state";

/// Render regions without a `data-state` attribute have not been loaded.
#[derive(Clone, Copy, Debug, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum RegionState {
  Loading,
  Loaded,
  Failed,
}

impl RegionState {
  fn mark(self, dom: &impl Dom, region: &str) -> Result {
    dom.set_attribute(region, STATE, self.into())
  }
}

/// Marks `region` as loading while `content` resolves, then as loaded or
/// failed. Failures are logged.
pub(crate) async fn load<T>(
  dom: &impl Dom,
  region: &str,
  content: impl Future<Output = Result<T>>,
) -> Result<T> {
  RegionState::Loading.mark(dom, region)?;

  match content.await {
    Ok(content) => {
      RegionState::Loaded.mark(dom, region)?;
      Ok(content)
    }
    Err(err) => {
      log::error!("error loading #{region}: {err}");
      RegionState::Failed.mark(dom, region)?;
      Err(err)
    }
  }
}

/// Like `load`, but replaces the contents of `region` with the rendered
/// content, or with an error message on failure.
pub(crate) async fn render<T: Display>(
  dom: &impl Dom,
  region: &str,
  content: impl Future<Output = Result<T>>,
) -> Result {
  match load(dom, region, content).await {
    Ok(content) => dom.set_html(region, &content.to_string()),
    Err(err) => {
      dom.set_html(
        region,
        &FailedHtml {
          message: err.to_string(),
        }
        .to_string(),
      )?;
      Err(err)
    }
  }
}
