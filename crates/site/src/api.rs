use super::*;

/// HTTP client for the endpoints served alongside the page.
pub struct Api {
  base: Url,
  client: reqwest::Client,
  retry: Retry,
}

impl Api {
  /// Endpoints are resolved relative to `address`, ignoring its query and
  /// fragment.
  pub fn new(address: &Url) -> Self {
    let mut base = address.clone();
    base.set_fragment(None);
    base.set_query(None);
    Self {
      base,
      client: reqwest::Client::new(),
      retry: Retry::default(),
    }
  }

  fn url(&self, endpoint: Endpoint) -> Result<Url> {
    let path = endpoint.path();
    self
      .base
      .join(path)
      .context(error::UrlJoin {
        base: self.base.clone(),
        path,
      })
  }

  pub(crate) fn comments_url(&self, limit: Option<CommentLimit>) -> Result<Url> {
    let mut url = self.url(Endpoint::Comments)?;

    if let Some(limit) = limit {
      url
        .query_pairs_mut()
        .append_pair(CommentLimit::PARAMETER, &limit.to_string());
    }

    Ok(url)
  }

  async fn send(&self, method: Method, url: &Url) -> Result<Vec<u8>> {
    self
      .retry
      .run(|| self.attempt(method.clone(), url))
      .await
  }

  async fn attempt(&self, method: Method, url: &Url) -> Result<Vec<u8>> {
    let response = self
      .client
      .request(method, url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    Ok(body.to_vec())
  }

  async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
    let body = self.send(Method::GET, &url).await?;
    serde_json::from_slice(&body).context(error::Deserialize { url })
  }

  async fn get_text(&self, url: Url) -> Result<String> {
    let body = self.send(Method::GET, &url).await?;
    String::from_utf8(body).context(error::Utf8 { url })
  }
}

impl Backend for Api {
  async fn fragment(&self, endpoint: Endpoint) -> Result<String> {
    self.get_text(self.url(endpoint)?).await
  }

  async fn comments(&self, limit: Option<CommentLimit>) -> Result<Vec<String>> {
    self.get_json(self.comments_url(limit)?).await
  }

  async fn delete_comments(&self) -> Result {
    self
      .send(Method::POST, &self.url(Endpoint::DeleteData)?)
      .await?;
    Ok(())
  }

  async fn upload_url(&self) -> Result<String> {
    Ok(
      self
        .get_text(self.url(Endpoint::UploadUrl)?)
        .await?
        .trim()
        .into(),
    )
  }

  async fn images(&self) -> Result<Vec<String>> {
    self.get_json(self.url(Endpoint::FileHandler)?).await
  }

  async fn locations(&self) -> Result<Vec<Location>> {
    self.get_json(self.url(Endpoint::LocationData)?).await
  }
}
