use super::*;

/// Points the upload form at a fresh single-use upload URL. The form's own
/// submission posts the file there.
pub async fn bind_upload_form(backend: &impl Backend, dom: &impl Dom) -> Result {
  let url = region::load(dom, element::UPLOAD_FORM, backend.upload_url()).await?;
  dom.set_attribute(element::UPLOAD_FORM, "action", &url)
}

/// Rebuilds the image gallery, one image per uploaded URL.
pub async fn render_images(backend: &impl Backend, dom: &impl Dom) -> Result {
  region::render(dom, element::IMAGES_CONTAINER, async {
    Ok(ImagesHtml {
      urls: backend.images().await?,
    })
  })
  .await
}
