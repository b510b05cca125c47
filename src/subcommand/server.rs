use {
  self::{server_error::ServerError, templates::PageHtml},
  super::*,
  crate::store::Image,
  axum::{
    extract::{multipart::MultipartError, Extension, Multipart, Path, Query},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
  },
  boilerplate::Boilerplate,
  tokio::runtime::Runtime,
  tower_http::services::ServeDir,
};

mod server_error;
mod templates;

#[derive(Parser)]
pub struct Server {
  #[arg(long, help = "Listen on <ADDRESS> for incoming requests.")]
  address: SocketAddr,
  #[arg(
    long,
    help = "Serve the built site package in <ASSETS> under `/pkg/`.",
    value_name = "ASSETS"
  )]
  assets: Option<Utf8PathBuf>,
  #[arg(
    long,
    help = "Load map locations from CSV file <LOCATIONS>.",
    value_name = "LOCATIONS"
  )]
  locations: Option<Utf8PathBuf>,
  #[arg(long, help = "Open server in browser.")]
  open: bool,
}

#[derive(Debug)]
struct Resource {
  content_type: Mime,
  content: Vec<u8>,
}

impl Resource {
  fn new(content_type: Mime, content: Vec<u8>) -> Self {
    Self {
      content_type,
      content,
    }
  }
}

impl IntoResponse for Resource {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, self.content_type.to_string())],
      self.content,
    )
      .into_response()
  }
}

#[derive(Debug, Deserialize)]
struct CommentsQuery {
  #[serde(rename = "max-comments")]
  max_comments: Option<DeserializeFromStr<CommentLimit>>,
}

#[derive(Debug, Deserialize)]
struct NewComment {
  #[serde(rename = "user-comment")]
  user_comment: String,
}

type ServerResult<T = Resource> = std::result::Result<T, ServerError>;

impl Server {
  pub fn run(self) -> Result {
    let locations = match &self.locations {
      Some(path) => locations::load(path)?,
      None => Vec::new(),
    };

    log::info!("loaded {} locations", locations.len());

    let store = Arc::new(Store::new(locations));

    if self.open {
      let url = format!("http://{}/", self.address);
      open::that(&url).context(error::Open { url: &url })?;
    }

    Runtime::new().context(error::Runtime)?.block_on(async {
      log::info!("serving on http://{}", self.address);

      axum_server::Server::bind(self.address)
        .serve(self.router(store).into_make_service())
        .await
        .context(error::Serve {
          address: self.address,
        })
    })?;

    Ok(())
  }

  fn router(&self, store: Arc<Store>) -> Router {
    let mut router = Router::new()
      .route("/", get(|| Self::page(Page::Index)))
      .route("/index.html", get(|| Self::page(Page::Index)))
      .route(Page::Blog.path(), get(|| Self::page(Page::Blog)))
      .route(Page::About.path(), get(|| Self::page(Page::About)))
      .route(
        &Endpoint::Comments.route(),
        get(Self::comments).post(Self::add_comment),
      )
      .route(&Endpoint::DeleteData.route(), post(Self::delete_data))
      .route(&Endpoint::UploadUrl.route(), get(Self::upload_url))
      .route("/upload/:token", post(Self::upload))
      .route(&Endpoint::FileHandler.route(), get(Self::file_handler))
      .route("/images/:index", get(Self::image))
      .route(&Endpoint::LocationData.route(), get(Self::location_data))
      .fallback(Self::asset);

    if let Some(assets) = &self.assets {
      router = router.nest_service("/pkg", ServeDir::new(assets));
    }

    router.layer(Extension(store))
  }

  async fn page(page: Page) -> Html<String> {
    Html(PageHtml { page }.to_string())
  }

  async fn asset(uri: Uri) -> ServerResult {
    let path = uri.path().trim_start_matches('/');

    Assets::load(path)
      .map(|(content_type, content)| Resource::new(content_type, content))
      .ok_or_else(|| ServerError::NotFound {
        message: format!("{} not found", uri.path()),
      })
  }

  async fn comments(
    store: Extension<Arc<Store>>,
    Query(query): Query<CommentsQuery>,
  ) -> Json<Vec<String>> {
    Json(store.comments(query.max_comments.map(|limit| limit.0)))
  }

  async fn add_comment(store: Extension<Arc<Store>>, Form(comment): Form<NewComment>) -> Redirect {
    let comment = comment.user_comment.trim();

    if comment.is_empty() {
      log::warn!("ignoring empty comment");
    } else {
      store.add_comment(comment.into());
    }

    Redirect::to(Page::Blog.path())
  }

  async fn delete_data(store: Extension<Arc<Store>>) -> StatusCode {
    store.delete_comments();
    log::info!("deleted all comments");
    StatusCode::NO_CONTENT
  }

  async fn upload_url(store: Extension<Arc<Store>>) -> String {
    format!("/upload/{}", store.issue_upload_token())
  }

  /// Accepts a multipart form with an `image` file. Other fields are ignored.
  /// Empty files and files that are not images are discarded.
  async fn upload(
    store: Extension<Arc<Store>>,
    Path(token): Path<String>,
    mut multipart: Multipart,
  ) -> ServerResult<Redirect> {
    if !store.redeem_upload_token(&token) {
      return Err(ServerError::NotFound {
        message: format!("upload URL /upload/{token} not found"),
      });
    }

    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
      if field.name() == Some("image") {
        let content_type = field.content_type().map(str::to_owned);
        image = Some((content_type, field.bytes().await?));
      }
    }

    let Some((content_type, content)) = image else {
      return Err(ServerError::BadRequest {
        message: "upload is missing `image` field".into(),
      });
    };

    let content_type = content_type
      .and_then(|content_type| content_type.parse::<Mime>().ok())
      .filter(|content_type| content_type.type_() == mime::IMAGE);

    match content_type {
      Some(content_type) if !content.is_empty() => {
        let index = store.add_image(Image {
          content: content.to_vec(),
          content_type,
        });
        log::info!("stored image {index}");
      }
      _ => log::warn!("discarding upload that is empty or not an image"),
    }

    Ok(Redirect::to(Page::Blog.path()))
  }

  async fn file_handler(store: Extension<Arc<Store>>) -> Json<Vec<String>> {
    Json(store.image_urls())
  }

  async fn image(store: Extension<Arc<Store>>, Path(index): Path<usize>) -> ServerResult {
    store
      .image(index)
      .map(|image| Resource::new(image.content_type, image.content))
      .ok_or_else(|| ServerError::NotFound {
        message: format!("image {index} not found"),
      })
  }

  async fn location_data(store: Extension<Arc<Store>>) -> Json<Vec<Location>> {
    Json(store.locations().to_vec())
  }
}
