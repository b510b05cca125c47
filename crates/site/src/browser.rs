use super::*;

pub struct Browser {
  document: web_sys::Document,
  window: web_sys::Window,
}

impl Browser {
  pub fn new() -> Result<Self> {
    let window = web_sys::window().context(error::WindowMissing)?;
    let document = window.document().context(error::DocumentMissing)?;
    Ok(Self { document, window })
  }

  fn element(&self, id: &str) -> Result<web_sys::Element> {
    self
      .document
      .get_element_by_id(id)
      .context(error::ElementMissing { id })
  }

  fn input(&self, id: &str) -> Result<HtmlInputElement> {
    self
      .element(id)?
      .dyn_into::<HtmlInputElement>()
      .ok()
      .context(error::ElementNotInput { id })
  }
}

impl Dom for Browser {
  fn set_html(&self, id: &str, html: &str) -> Result {
    self.element(id)?.set_inner_html(html);
    Ok(())
  }

  fn set_text(&self, id: &str, text: &str) -> Result {
    self.element(id)?.set_text_content(Some(text));
    Ok(())
  }

  fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result {
    self
      .element(id)?
      .set_attribute(name, value)
      .js_context("setting attribute")
  }

  fn input_value(&self, id: &str) -> Result<String> {
    Ok(self.input(id)?.value())
  }

  fn set_input_value(&self, id: &str, value: &str) -> Result {
    self.input(id)?.set_value(value);
    Ok(())
  }

  fn address(&self) -> Result<Url> {
    let address = self
      .window
      .location()
      .href()
      .js_context("reading location")?;

    address
      .parse()
      .context(error::Address { address: &address })
  }

  fn replace_address(&self, address: &Url) -> Result {
    self
      .window
      .history()
      .js_context("reading history")?
      .replace_state_with_url(&JsValue::NULL, "", Some(address.as_str()))
      .js_context("replacing history state")
  }

  fn listen(&self, id: &str, event_type: &'static str, mut handler: Box<dyn FnMut()>) -> Result {
    self.element(id)?.on(event_type, move |event| {
      event.prevent_default();
      handler();
    })
  }
}
