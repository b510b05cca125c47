use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(display("I/O error at `{path}`"))]
  Io {
    backtrace: Option<Backtrace>,
    path: Utf8PathBuf,
    source: io::Error,
  },
  #[snafu(display("invalid location on line {line} of `{path}`"))]
  Location {
    backtrace: Option<Backtrace>,
    line: usize,
    path: Utf8PathBuf,
    source: model::Error,
  },
  #[snafu(display("failed to open `{url}`"))]
  Open {
    backtrace: Option<Backtrace>,
    source: io::Error,
    url: String,
  },
  #[snafu(display("I/O error initializing async runtime"))]
  Runtime {
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
  #[snafu(display("I/O error serving on {address}"))]
  Serve {
    address: SocketAddr,
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
}

impl Error {
  pub(crate) fn report(&self) {
    eprintln!("error: {self}");

    for (i, err) in self.iter_chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {err}");
    }

    if let Some(backtrace) = self.backtrace() {
      if backtrace.status() == BacktraceStatus::Captured {
        eprintln!();
        eprintln!("backtrace:");
        eprintln!("{backtrace}");
      }
    }
  }
}
