use super::*;

#[derive(Boilerplate)]
pub(crate) struct CommentsHtml {
  pub(crate) comments: Vec<String>,
}

#[derive(Boilerplate)]
pub(crate) struct FailedHtml {
  pub(crate) message: String,
}

#[derive(Boilerplate)]
pub(crate) struct ImagesHtml {
  pub(crate) urls: Vec<String>,
}

#[derive(Boilerplate)]
pub(crate) struct PopupHtml<'a> {
  pub(crate) location: &'a Location,
}
