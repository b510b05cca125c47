use {super::*, std::collections::BTreeMap};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FakeElement {
  pub(crate) attributes: BTreeMap<String, String>,
  pub(crate) html: String,
  pub(crate) text: String,
  pub(crate) value: String,
}

impl FakeElement {
  pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(String::as_str)
  }

  /// Text of each `<tag>…</tag>` in the element's markup.
  pub(crate) fn texts(&self, tag: &str) -> Vec<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let mut texts = Vec::new();
    let mut rest = self.html.as_str();

    while let Some(start) = rest.find(&open) {
      rest = &rest[start + open.len()..];
      let end = rest.find(&close).unwrap();
      texts.push(rest[..end].to_string());
      rest = &rest[end + close.len()..];
    }

    texts
  }

  /// Value of attribute `name` of each `<tag …>` in the element's markup.
  pub(crate) fn attributes(&self, tag: &str, name: &str) -> Vec<String> {
    let open = format!("<{tag} ");
    let key = format!("{name}=\"");

    let mut values = Vec::new();
    let mut rest = self.html.as_str();

    while let Some(start) = rest.find(&open) {
      rest = &rest[start + open.len()..];
      let inside = &rest[..rest.find('>').unwrap()];
      if let Some(start) = inside.find(&key) {
        let value = &inside[start + key.len()..];
        values.push(value[..value.find('"').unwrap()].to_string());
      }
    }

    values
  }
}

pub(crate) struct FakeDom {
  address: RefCell<Url>,
  elements: RefCell<BTreeMap<String, FakeElement>>,
  listeners: RefCell<Vec<(String, &'static str, Box<dyn FnMut()>)>>,
}

impl FakeDom {
  pub(crate) fn new(ids: &[&str]) -> Self {
    Self {
      address: RefCell::new("http://localhost/".parse().unwrap()),
      elements: RefCell::new(
        ids
          .iter()
          .map(|id| (id.to_string(), FakeElement::default()))
          .collect(),
      ),
      listeners: RefCell::default(),
    }
  }

  pub(crate) fn element(&self, id: &str) -> FakeElement {
    self.elements.borrow()[id].clone()
  }

  pub(crate) fn navigate(&self, address: &str) {
    *self.address.borrow_mut() = address.parse().unwrap();
  }

  /// The `(id, event_type)` of every listener, in the order they were added.
  pub(crate) fn listeners(&self) -> Vec<(String, &'static str)> {
    self
      .listeners
      .borrow()
      .iter()
      .map(|(id, event_type, _handler)| (id.clone(), *event_type))
      .collect()
  }

  /// Fires `event_type` on element `id`. Returns the number of handlers called.
  pub(crate) fn fire(&self, id: &str, event_type: &str) -> usize {
    let mut called = 0;

    for (target, listening, handler) in self.listeners.borrow_mut().iter_mut() {
      if target == id && *listening == event_type {
        handler();
        called += 1;
      }
    }

    called
  }

  fn update(&self, id: &str, f: impl FnOnce(&mut FakeElement)) -> Result {
    let mut elements = self.elements.borrow_mut();
    let element = elements
      .get_mut(id)
      .context(error::ElementMissing { id })?;
    f(element);
    Ok(())
  }
}

impl Dom for FakeDom {
  fn set_html(&self, id: &str, html: &str) -> Result {
    self.update(id, |element| element.html = html.into())
  }

  fn set_text(&self, id: &str, text: &str) -> Result {
    self.update(id, |element| element.text = text.into())
  }

  fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result {
    self.update(id, |element| {
      element.attributes.insert(name.into(), value.into());
    })
  }

  fn input_value(&self, id: &str) -> Result<String> {
    Ok(
      self
        .elements
        .borrow()
        .get(id)
        .context(error::ElementMissing { id })?
        .value
        .clone(),
    )
  }

  fn set_input_value(&self, id: &str, value: &str) -> Result {
    self.update(id, |element| element.value = value.into())
  }

  fn address(&self) -> Result<Url> {
    Ok(self.address.borrow().clone())
  }

  fn replace_address(&self, address: &Url) -> Result {
    *self.address.borrow_mut() = address.clone();
    Ok(())
  }

  fn listen(&self, id: &str, event_type: &'static str, handler: Box<dyn FnMut()>) -> Result {
    ensure!(
      self.elements.borrow().contains_key(id),
      error::ElementMissing { id }
    );

    self
      .listeners
      .borrow_mut()
      .push((id.into(), event_type, handler));

    Ok(())
  }
}

#[derive(Default)]
pub(crate) struct FakeBackend {
  comment_requests: RefCell<Vec<Option<CommentLimit>>>,
  comments: RefCell<Vec<String>>,
  failing: RefCell<Vec<Endpoint>>,
  images: RefCell<Vec<String>>,
  locations: RefCell<Vec<Location>>,
}

impl FakeBackend {
  pub(crate) fn with_comments(comments: &[&str]) -> Self {
    let backend = Self::default();
    backend.set_comments(comments);
    backend
  }

  pub(crate) fn set_comments(&self, comments: &[&str]) {
    *self.comments.borrow_mut() = comments.iter().map(|comment| comment.to_string()).collect();
  }

  pub(crate) fn set_images(&self, urls: &[&str]) {
    *self.images.borrow_mut() = urls.iter().map(|url| url.to_string()).collect();
  }

  pub(crate) fn set_locations(&self, locations: Vec<Location>) {
    *self.locations.borrow_mut() = locations;
  }

  /// Makes every request to `endpoint` fail with a server error.
  pub(crate) fn fail(&self, endpoint: Endpoint) {
    self.failing.borrow_mut().push(endpoint);
  }

  pub(crate) fn comment_requests(&self) -> Vec<Option<CommentLimit>> {
    self.comment_requests.borrow().clone()
  }

  fn check(&self, endpoint: Endpoint) -> Result {
    ensure!(
      !self.failing.borrow().contains(&endpoint),
      error::Status {
        url: format!("http://localhost{}", endpoint.route())
          .parse::<Url>()
          .unwrap(),
        status: StatusCode::INTERNAL_SERVER_ERROR,
      }
    );
    Ok(())
  }
}

impl Backend for FakeBackend {
  async fn fragment(&self, endpoint: Endpoint) -> Result<String> {
    self.check(endpoint)?;
    Ok(match endpoint {
      Endpoint::Header => "<nav>header</nav>".into(),
      Endpoint::Footer => "<p>footer</p>".into(),
      _ => panic!("{endpoint} is not a fragment"),
    })
  }

  async fn comments(&self, limit: Option<CommentLimit>) -> Result<Vec<String>> {
    self.check(Endpoint::Comments)?;
    self.comment_requests.borrow_mut().push(limit);
    let comments = self.comments.borrow();
    let limit = limit.map_or(comments.len(), CommentLimit::get);
    Ok(comments.iter().take(limit).cloned().collect())
  }

  async fn delete_comments(&self) -> Result {
    self.check(Endpoint::DeleteData)?;
    self.comments.borrow_mut().clear();
    Ok(())
  }

  async fn upload_url(&self) -> Result<String> {
    self.check(Endpoint::UploadUrl)?;
    Ok("/upload/0123abcd".into())
  }

  async fn images(&self) -> Result<Vec<String>> {
    self.check(Endpoint::FileHandler)?;
    Ok(self.images.borrow().clone())
  }

  async fn locations(&self) -> Result<Vec<Location>> {
    self.check(Endpoint::LocationData)?;
    Ok(self.locations.borrow().clone())
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FakeMarker {
  pub(crate) popup: String,
  pub(crate) position: Coordinate,
  pub(crate) title: String,
}

#[derive(Default)]
pub(crate) struct FakeMap {
  markers: RefCell<Vec<FakeMarker>>,
  open: RefCell<Option<usize>>,
  view: RefCell<Option<(String, Coordinate, u8)>>,
}

impl FakeMap {
  pub(crate) fn markers(&self) -> Vec<FakeMarker> {
    self.markers.borrow().clone()
  }

  pub(crate) fn view(&self) -> Option<(String, Coordinate, u8)> {
    self.view.borrow().clone()
  }

  pub(crate) fn open_popup(&self) -> Option<usize> {
    *self.open.borrow()
  }

  /// Clicks marker `index`, opening its popup. Returns the popup's content.
  pub(crate) fn click(&self, index: usize) -> Option<String> {
    let popup = self.markers.borrow().get(index)?.popup.clone();
    *self.open.borrow_mut() = Some(index);
    Some(popup)
  }
}

impl MapWidget for FakeMap {
  fn create(&self, element: &str, center: Coordinate, zoom: u8) -> Result {
    *self.view.borrow_mut() = Some((element.into(), center, zoom));
    Ok(())
  }

  fn add_marker(&self, position: Coordinate, title: &str, popup: &str) -> Result {
    ensure!(self.view.borrow().is_some(), error::MapMissing);
    self.markers.borrow_mut().push(FakeMarker {
      popup: popup.into(),
      position,
      title: title.into(),
    });
    Ok(())
  }
}
