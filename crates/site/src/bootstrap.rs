use super::*;

fn spawn<F: Future<Output = Result> + 'static>(region: &'static str, future: F) {
  wasm_bindgen_futures::spawn_local(async move {
    if let Err(err) = future.await {
      log::error!("error updating #{region}: {err}");
    }
  });
}

/// Wires the page's buttons and forms to their regions. Bindings are
/// independent: an element that is missing is returned as a failure and the
/// remaining bindings are still made.
pub fn bind<B: Backend + 'static, D: Dom + 'static>(
  page: Page,
  backend: Rc<B>,
  dom: Rc<D>,
) -> Vec<Error> {
  let mut bindings = Vec::new();

  match page {
    Page::Index => {
      let target = dom.clone();
      bindings.push(dom.listen(
        element::FACT_BUTTON,
        "click",
        Box::new(move || {
          if let Err(err) = fact::display_fact(&*target, &mut rand::thread_rng()) {
            log::error!("error displaying fact: {err}");
          }
        }),
      ));
    }
    Page::Blog => {
      let (source, target) = (backend.clone(), dom.clone());
      bindings.push(dom.listen(
        element::COMMENTS_FORM,
        "submit",
        Box::new(move || {
          let (backend, dom) = (source.clone(), target.clone());
          spawn(element::COMMENTS_CONTAINER, async move {
            comments::render_comments(&*backend, &*dom).await
          });
        }),
      ));

      let target = dom.clone();
      bindings.push(dom.listen(
        element::DELETE_COMMENTS,
        "click",
        Box::new(move || {
          let (backend, dom) = (backend.clone(), target.clone());
          spawn(element::COMMENTS_CONTAINER, async move {
            comments::delete_comments(&*backend, &*dom).await
          });
        }),
      ));
    }
    Page::About => {}
  }

  bindings
    .into_iter()
    .filter_map(Result::err)
    .inspect(|err| log::error!("error binding event handler: {err}"))
    .collect()
}

/// Renders the regions `page` is composed of, concurrently. Each region
/// settles on its own, so one failure does not stop the others. Returns the
/// failures.
pub async fn render_page(
  page: Page,
  backend: &impl Backend,
  dom: &impl Dom,
  widget: &impl MapWidget,
  rng: &mut impl Rng,
) -> Vec<Error> {
  let mut failures = Vec::new();

  let mut regions: Vec<LocalBoxFuture<'_, Result>> =
    vec![fragments::load_header_footer(backend, dom).boxed_local()];

  match page {
    Page::Index => {
      if let Err(err) = fact::display_fact(dom, rng) {
        log::error!("error displaying fact: {err}");
        failures.push(err);
      }
    }
    Page::Blog => regions.extend([
      comments::render_comments(backend, dom).boxed_local(),
      images::bind_upload_form(backend, dom).boxed_local(),
      images::render_images(backend, dom).boxed_local(),
    ]),
    Page::About => regions.push(map::render_map(backend, dom, widget).boxed_local()),
  }

  failures.extend(join_all(regions).await.into_iter().filter_map(Result::err));

  failures
}
