//! Ids of the page elements the site renders into.

pub const COMMENTS_CONTAINER: &str = "comments-container";
pub const COMMENTS_FORM: &str = "comments-form";
pub const DELETE_COMMENTS: &str = "delete-comments";
pub const FACT_BUTTON: &str = "fact-button";
pub const FACT_CONTAINER: &str = "fact-container";
pub const FOOTER: &str = "footer";
pub const HEADER: &str = "header";
pub const IMAGES_CONTAINER: &str = "images-container";
pub const MAP: &str = "map";
pub const MAX_COMMENTS: &str = "max-comments";
pub const UPLOAD_FORM: &str = "upload-form";
