use super::*;

/// A named point of interest shown on the map.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Location {
  pub lat: f64,
  pub lng: f64,
  pub name: String,
  pub description: String,
}

impl Location {
  pub fn coordinate(&self) -> Coordinate {
    Coordinate {
      lat: self.lat,
      lng: self.lng,
    }
  }
}

/// Parses a `lat,lng,name,description` CSV record. Commas after the third
/// belong to the description.
impl FromStr for Location {
  type Err = Error;

  fn from_str(record: &str) -> Result<Self, Self::Err> {
    let mut fields = record.splitn(4, ',').map(str::trim);

    let mut field = |field: &'static str| {
      fields
        .next()
        .filter(|value| !value.is_empty())
        .context(error::LocationField { field, record })
    };

    let lat = field("latitude")?;
    let lng = field("longitude")?;
    let name = field("name")?;
    let description = field("description")?;

    let coordinate = |field: &'static str, value: &str| {
      value.parse::<f64>().context(error::LocationCoordinate {
        field,
        record,
        value,
      })
    };

    Ok(Self {
      lat: coordinate("latitude", lat)?,
      lng: coordinate("longitude", lng)?,
      name: name.into(),
      description: description.into(),
    })
  }
}
