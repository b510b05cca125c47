use super::*;

#[wasm_bindgen(module = "/js/leaflet.js")]
extern "C" {
  #[wasm_bindgen(catch, js_name = createMap)]
  fn create_map(element: &str, lat: f64, lng: f64, zoom: u8) -> Result<JsValue, JsValue>;

  #[wasm_bindgen(catch, js_name = addMarker)]
  fn add_marker(
    map: &JsValue,
    lat: f64,
    lng: f64,
    title: &str,
    popup: &str,
  ) -> Result<(), JsValue>;
}

/// Map widget backed by the page's Leaflet global.
#[derive(Default)]
pub struct Leaflet {
  map: RefCell<Option<JsValue>>,
}

impl MapWidget for Leaflet {
  fn create(&self, element: &str, center: Coordinate, zoom: u8) -> Result {
    let map = create_map(element, center.lat, center.lng, zoom).js_context("creating map")?;
    *self.map.borrow_mut() = Some(map);
    Ok(())
  }

  fn add_marker(&self, position: Coordinate, title: &str, popup: &str) -> Result {
    let map = self.map.borrow();
    let map = map.as_ref().context(error::MapMissing)?;
    add_marker(map, position.lat, position.lng, title, popup).js_context("adding marker")
  }
}
