use super::*;

/// The page elements the site renders into, addressed by id.
pub trait Dom {
  fn set_html(&self, id: &str, html: &str) -> Result;

  fn set_text(&self, id: &str, text: &str) -> Result;

  fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result;

  fn input_value(&self, id: &str) -> Result<String>;

  fn set_input_value(&self, id: &str, value: &str) -> Result;

  /// The address shown in the address bar.
  fn address(&self) -> Result<Url>;

  /// Replaces the address without navigating or adding a history entry.
  fn replace_address(&self, address: &Url) -> Result;

  /// Calls `handler` each time `event_type` fires on element `id`, in place of
  /// the event's default action.
  fn listen(&self, id: &str, event_type: &'static str, handler: Box<dyn FnMut()>) -> Result;
}
