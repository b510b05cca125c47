use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "page.html")]
pub(crate) struct PageHtml {
  pub(crate) page: Page,
}
