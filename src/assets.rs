use {super::*, rust_embed::RustEmbed};

/// Fragments and stylesheet shared by every page.
#[derive(RustEmbed)]
#[folder = "static/"]
pub(crate) struct Assets;

impl Assets {
  pub(crate) fn load(path: &str) -> Option<(Mime, Vec<u8>)> {
    let file = Self::get(path)?;
    Some((
      mime_guess::from_path(path).first_or_octet_stream(),
      file.data.into_owned(),
    ))
  }
}
