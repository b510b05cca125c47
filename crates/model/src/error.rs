use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("invalid comment limit `{value}`"))]
  CommentLimit {
    value: String,
    source: ParseIntError,
  },
  #[snafu(display("invalid {field} `{value}` in location record `{record}`"))]
  LocationCoordinate {
    field: &'static str,
    record: String,
    source: ParseFloatError,
    value: String,
  },
  #[snafu(display("location record `{record}` is missing {field}"))]
  LocationField { field: &'static str, record: String },
  #[snafu(display("unknown page `{name}`"))]
  UnknownPage { name: String },
}
