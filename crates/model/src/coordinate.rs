use super::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinate {
  pub lat: f64,
  pub lng: f64,
}

impl Display for Coordinate {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.lat, self.lng)
  }
}
