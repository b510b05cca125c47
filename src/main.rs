#![allow(clippy::result_large_err)]

use {
  self::{
    assets::Assets, deserialize_from_str::DeserializeFromStr, error::Error, store::Store,
    subcommand::Subcommand,
  },
  axum::http::header,
  camino::{Utf8Path, Utf8PathBuf},
  clap::Parser,
  libc::EXIT_FAILURE,
  mime_guess::{mime, Mime},
  model::{CommentLimit, Endpoint, Location, Page},
  rand::Rng,
  serde::{Deserialize, Deserializer},
  snafu::{ErrorCompat, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    collections::HashMap,
    fmt::Display,
    fs, io,
    net::SocketAddr,
    ops::{Deref, DerefMut},
    process,
    str::FromStr,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
  },
};


#[cfg(test)]
use test::*;

mod assets;
mod deserialize_from_str;
mod error;
mod locations;
mod store;
mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
