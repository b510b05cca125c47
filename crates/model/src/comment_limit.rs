use super::*;

/// Upper bound on the number of comments the backend returns.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CommentLimit(u32);

impl CommentLimit {
  /// Query parameter mirrored into the page address so a reload keeps the limit.
  pub const ADDRESS_KEY: &'static str = "comments";

  /// Query parameter sent to the comments endpoint.
  pub const PARAMETER: &'static str = "max-comments";

  pub fn new(limit: u32) -> Self {
    Self(limit)
  }

  pub fn get(self) -> usize {
    self.0 as usize
  }
}

impl Display for CommentLimit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for CommentLimit {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(
      s.trim()
        .parse()
        .context(error::CommentLimit { value: s })?,
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse() {
    assert_eq!("5".parse::<CommentLimit>().unwrap(), CommentLimit::new(5));
    assert_eq!("42".parse::<CommentLimit>().unwrap(), CommentLimit::new(42));
    assert_eq!(" 7 ".parse::<CommentLimit>().unwrap(), CommentLimit::new(7));
  }

  #[test]
  fn parse_error() {
    for value in ["", "-1", "4x", "five"] {
      assert!(
        matches!(
          value.parse::<CommentLimit>().unwrap_err(),
          Error::CommentLimit { value: ref actual, .. } if actual == value,
        ),
        "{value}",
      );
    }
  }

  #[test]
  fn display() {
    assert_eq!(CommentLimit::new(100).to_string(), "100");
  }
}
