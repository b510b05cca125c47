#![allow(async_fn_in_trait)]

use {
  self::{
    error::Error,
    event_target_ext::EventTargetExt,
    js_result_ext::JsResultExt,
    retry::Retry,
    templates::{CommentsHtml, FailedHtml, ImagesHtml, PopupHtml},
  },
  boilerplate::Boilerplate,
  futures_util::{
    future::{join_all, LocalBoxFuture},
    FutureExt,
  },
  model::{element, CommentLimit, Coordinate, Endpoint, Location, Page},
  rand::Rng,
  reqwest::{Method, StatusCode, Url},
  serde::de::DeserializeOwned,
  snafu::{ensure, OptionExt, ResultExt, Snafu},
  std::{
    cell::RefCell,
    fmt::Display,
    future::Future,
    rc::Rc,
    str::FromStr,
    string::FromUtf8Error,
    time::Duration,
  },
  strum::IntoStaticStr,
  wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsError, JsValue},
  web_sys::{Event, EventTarget, HtmlInputElement},
};

pub use {
  self::{api::Api, backend::Backend, browser::Browser, dom::Dom, leaflet::Leaflet, map::MapWidget},
  model,
};

pub mod bootstrap;
pub mod comments;
pub mod fact;
pub mod fragments;
pub mod images;
pub mod map;

mod api;
mod backend;
mod browser;
mod dom;
mod error;
mod event_target_ext;
mod js_result_ext;
mod leaflet;
mod region;
mod retry;
mod templates;

#[cfg(test)]
mod fake;

type Result<T = (), E = Error> = std::result::Result<T, E>;

type UrlError = <Url as FromStr>::Err;

pub fn initialize_console(level: log::Level) -> Result {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

/// Binds the controls and renders every region of `page`. Called once by the hosting page after the
/// wasm module is instantiated.
#[wasm_bindgen]
pub async fn bootstrap(page: String) -> Result<(), JsValue> {
  initialize_console(log::Level::Info)?;

  let page = page.parse::<Page>().context(error::Page)?;

  let browser = Rc::new(Browser::new()?);
  let api = Rc::new(Api::new(&browser.address()?));

  let mut failures = bootstrap::bind(page, api.clone(), browser.clone());

  failures.extend(
    bootstrap::render_page(
      page,
      &*api,
      &*browser,
      &Leaflet::default(),
      &mut rand::thread_rng(),
    )
    .await,
  );

  if !failures.is_empty() {
    log::warn!("{} failures while starting the {page} page", failures.len());
  }

  Ok(())
}
