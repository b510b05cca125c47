use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Image {
  pub(crate) content: Vec<u8>,
  pub(crate) content_type: Mime,
}

/// In-memory state of the site. Nothing survives a restart.
#[derive(Default)]
pub(crate) struct Store {
  comments: Mutex<Vec<String>>,
  images: Mutex<Vec<Image>>,
  locations: Vec<Location>,
  upload_tokens: Mutex<HashMap<String, Instant>>,
}

impl Store {
  /// Most comments returned by a single request.
  pub(crate) const MAX_COMMENTS: usize = 100;

  /// Most upload tokens outstanding at once. Issuing past this evicts the
  /// oldest.
  pub(crate) const MAX_UPLOAD_TOKENS: usize = 1024;

  /// How long an upload token stays redeemable.
  pub(crate) const UPLOAD_TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

  pub(crate) fn new(locations: Vec<Location>) -> Self {
    Self {
      locations,
      ..Self::default()
    }
  }

  pub(crate) fn add_comment(&self, comment: String) {
    self.comments.lock().unwrap().push(comment);
  }

  /// The newest `limit` comments, oldest first.
  pub(crate) fn comments(&self, limit: Option<CommentLimit>) -> Vec<String> {
    let comments = self.comments.lock().unwrap();

    let limit = limit
      .map_or(Self::MAX_COMMENTS, CommentLimit::get)
      .min(Self::MAX_COMMENTS);

    comments[comments.len().saturating_sub(limit)..].to_vec()
  }

  pub(crate) fn delete_comments(&self) {
    self.comments.lock().unwrap().clear();
  }

  pub(crate) fn issue_upload_token(&self) -> String {
    self.issue_upload_token_at(Instant::now())
  }

  fn issue_upload_token_at(&self, now: Instant) -> String {
    let mut tokens = self.upload_tokens.lock().unwrap();

    Self::expire_upload_tokens(&mut tokens, now);

    if tokens.len() >= Self::MAX_UPLOAD_TOKENS {
      let oldest = tokens
        .iter()
        .min_by_key(|(_token, issued)| **issued)
        .map(|(token, _issued)| token.clone());

      if let Some(oldest) = oldest {
        tokens.remove(&oldest);
      }
    }

    let token = format!("{:032x}", rand::thread_rng().gen::<u128>());
    tokens.insert(token.clone(), now);
    token
  }

  /// Consumes `token`. Returns false if it was never issued, already used, or
  /// expired.
  pub(crate) fn redeem_upload_token(&self, token: &str) -> bool {
    self.redeem_upload_token_at(token, Instant::now())
  }

  fn redeem_upload_token_at(&self, token: &str, now: Instant) -> bool {
    let mut tokens = self.upload_tokens.lock().unwrap();
    Self::expire_upload_tokens(&mut tokens, now);
    tokens.remove(token).is_some()
  }

  fn expire_upload_tokens(tokens: &mut HashMap<String, Instant>, now: Instant) {
    tokens.retain(|_token, issued| {
      now.saturating_duration_since(*issued) < Self::UPLOAD_TOKEN_LIFETIME
    });
  }

  pub(crate) fn add_image(&self, image: Image) -> usize {
    let mut images = self.images.lock().unwrap();
    images.push(image);
    images.len() - 1
  }

  pub(crate) fn image(&self, index: usize) -> Option<Image> {
    self.images.lock().unwrap().get(index).cloned()
  }

  pub(crate) fn image_url(index: usize) -> String {
    format!("/images/{index}")
  }

  pub(crate) fn image_urls(&self) -> Vec<String> {
    (0..self.images.lock().unwrap().len())
      .map(Self::image_url)
      .collect()
  }

  pub(crate) fn locations(&self) -> &[Location] {
    &self.locations
  }
}
