use super::*;

/// Reads the comment limit from the `comments` parameter of `address`.
pub fn address_limit(address: &Url) -> Result<Option<CommentLimit>> {
  address
    .query_pairs()
    .find(|(key, _value)| key == CommentLimit::ADDRESS_KEY)
    .map(|(_key, value)| value.parse::<CommentLimit>())
    .transpose()
    .context(error::CommentLimit)
}

/// Returns `address` with its `comments` parameter set to `limit`. Other
/// parameters are kept in order.
pub fn with_address_limit(address: &Url, limit: CommentLimit) -> Url {
  let pairs = address
    .query_pairs()
    .filter(|(key, _value)| key != CommentLimit::ADDRESS_KEY)
    .map(|(key, value)| (key.into_owned(), value.into_owned()))
    .collect::<Vec<(String, String)>>();

  let mut address = address.clone();

  address
    .query_pairs_mut()
    .clear()
    .extend_pairs(pairs)
    .append_pair(CommentLimit::ADDRESS_KEY, &limit.to_string());

  address
}

/// The limit typed into the form wins over the one in the address. A chosen
/// limit is written back to both so that a reload restores it.
fn resolve_limit(dom: &impl Dom) -> Result<Option<CommentLimit>> {
  let input = dom.input_value(element::MAX_COMMENTS)?;

  let address = dom.address()?;

  let limit = if input.trim().is_empty() {
    address_limit(&address)?
  } else {
    Some(
      input
        .parse::<CommentLimit>()
        .context(error::CommentLimit)?,
    )
  };

  if let Some(limit) = limit {
    dom.set_input_value(element::MAX_COMMENTS, &limit.to_string())?;
    dom.replace_address(&with_address_limit(&address, limit))?;
  }

  Ok(limit)
}

/// Rebuilds the comment list from the backend.
pub async fn render_comments(backend: &impl Backend, dom: &impl Dom) -> Result {
  region::render(dom, element::COMMENTS_CONTAINER, async {
    let limit = resolve_limit(dom)?;
    Ok(CommentsHtml {
      comments: backend.comments(limit).await?,
    })
  })
  .await
}

/// Deletes every comment, then refreshes the list whether or not the
/// deletion succeeded.
pub async fn delete_comments(backend: &impl Backend, dom: &impl Dom) -> Result {
  if let Err(err) = backend.delete_comments().await {
    log::error!("error deleting comments: {err}");
  }

  render_comments(backend, dom).await
}
