use super::*;

/// Backend resources fetched by the site, relative to the page's base URL.
#[derive(Clone, Copy, Debug, EnumIter, Eq, IntoStaticStr, PartialEq)]
pub enum Endpoint {
  #[strum(serialize = "comments")]
  Comments,
  #[strum(serialize = "delete-data")]
  DeleteData,
  #[strum(serialize = "file-handler")]
  FileHandler,
  #[strum(serialize = "footer.html")]
  Footer,
  #[strum(serialize = "header.html")]
  Header,
  #[strum(serialize = "location-data")]
  LocationData,
  #[strum(serialize = "upload-url")]
  UploadUrl,
}

impl Endpoint {
  pub fn path(self) -> &'static str {
    self.into()
  }

  pub fn route(self) -> String {
    format!("/{}", self.path())
  }
}

impl Display for Endpoint {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.path())
  }
}
