use super::*;

pub(crate) trait EventTargetExt {
  fn on(&self, event_type: &str, callback: impl FnMut(Event) + 'static) -> Result;
}

impl<T: AsRef<EventTarget>> EventTargetExt for T {
  fn on(&self, event_type: &str, callback: impl FnMut(Event) + 'static) -> Result {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    self
      .as_ref()
      .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
      .js_context("adding event listener")?;
    closure.forget();
    Ok(())
  }
}
