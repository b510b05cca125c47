use {
  serde::{Deserialize, Serialize},
  snafu::{OptionExt, ResultExt, Snafu},
  std::{
    fmt::{self, Display, Formatter},
    num::{ParseFloatError, ParseIntError},
    str::FromStr,
  },
  strum::{EnumIter, IntoEnumIterator, IntoStaticStr},
};

pub use {
  comment_limit::CommentLimit, coordinate::Coordinate, endpoint::Endpoint, error::Error,
  location::Location, page::Page,
};

mod comment_limit;
mod coordinate;
pub mod element;
mod endpoint;
mod error;
mod location;
mod page;
