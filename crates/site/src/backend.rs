use super::*;

/// The server resources the render regions are built from.
pub trait Backend {
  /// Raw markup of a header or footer fragment.
  async fn fragment(&self, endpoint: Endpoint) -> Result<String>;

  /// Comments in server order, at most `limit` of them.
  async fn comments(&self, limit: Option<CommentLimit>) -> Result<Vec<String>>;

  async fn delete_comments(&self) -> Result;

  /// A single-use URL that accepts an image upload form.
  async fn upload_url(&self) -> Result<String>;

  async fn images(&self) -> Result<Vec<String>>;

  async fn locations(&self) -> Result<Vec<Location>>;
}
