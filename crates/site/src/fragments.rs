use super::*;

async fn load(backend: &impl Backend, dom: &impl Dom, endpoint: Endpoint, id: &str) -> Result {
  match backend.fragment(endpoint).await {
    Ok(html) => dom.set_html(id, &html),
    Err(err) => {
      log::error!("error loading {endpoint}: {err}");
      Err(err)
    }
  }
}

/// Fills the header and footer placeholders with their fragments. The two
/// fetches are independent: a failure leaves only its own placeholder
/// untouched.
pub async fn load_header_footer(backend: &impl Backend, dom: &impl Dom) -> Result {
  let (header, footer) = futures_util::join!(
    load(backend, dom, Endpoint::Header, element::HEADER),
    load(backend, dom, Endpoint::Footer, element::FOOTER),
  );

  header.and(footer)
}
