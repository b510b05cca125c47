use super::*;

/// The pages of the site. Each composes a different set of render regions.
#[derive(Clone, Copy, Debug, Deserialize, EnumIter, Eq, IntoStaticStr, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Page {
  Index,
  Blog,
  About,
}

impl Page {
  pub fn name(self) -> &'static str {
    self.into()
  }

  pub fn path(self) -> &'static str {
    match self {
      Self::Index => "/",
      Self::Blog => "/blog.html",
      Self::About => "/about.html",
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Self::Index => "Portfolio",
      Self::Blog => "Blog",
      Self::About => "About Me",
    }
  }
}

impl Display for Page {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Page {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::iter()
      .find(|page| page.name() == s)
      .context(error::UnknownPage { name: s })
  }
}
