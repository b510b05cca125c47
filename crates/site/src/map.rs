use super::*;

/// The map is centered on Ithaca, where the locations are.
pub const CENTER: Coordinate = Coordinate {
  lat: 42.444,
  lng: -76.5019,
};

pub const ZOOM: u8 = 13;

/// An interactive map. Clicking a marker opens its popup.
pub trait MapWidget {
  fn create(&self, element: &str, center: Coordinate, zoom: u8) -> Result;

  fn add_marker(&self, position: Coordinate, title: &str, popup: &str) -> Result;
}

/// Creates the map and places one marker per location. The popup markup is
/// built from escaped location text.
pub async fn render_map(backend: &impl Backend, dom: &impl Dom, widget: &impl MapWidget) -> Result {
  let locations = region::load(dom, element::MAP, backend.locations()).await?;

  widget.create(element::MAP, CENTER, ZOOM)?;

  for location in &locations {
    widget.add_marker(
      location.coordinate(),
      &location.name,
      &PopupHtml { location }.to_string(),
    )?;
  }

  log::info!("placed {} markers", locations.len());

  Ok(())
}
