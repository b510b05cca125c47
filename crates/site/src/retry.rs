use super::*;

/// Retries transient failures with exponential backoff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Retry {
  pub(crate) attempts: u32,
  pub(crate) backoff: Duration,
}

impl Default for Retry {
  fn default() -> Self {
    Self {
      attempts: 3,
      backoff: Duration::from_millis(250),
    }
  }
}

impl Retry {
  pub(crate) async fn run<T, F, Fut>(self, mut attempt: F) -> Result<T>
  where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
  {
    let mut backoff = self.backoff;

    for _ in 1..self.attempts {
      match attempt().await {
        Err(err) if err.is_transient() => {
          log::warn!("{err}, retrying in {}ms", backoff.as_millis());
          sleep(backoff).await;
          backoff *= 2;
        }
        result => return result,
      }
    }

    attempt().await
  }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
  let promise = js_sys::Promise::new(&mut |resolve, _reject| {
    let scheduled = web_sys::window().and_then(|window| {
      window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
          &resolve,
          duration.as_millis().try_into().unwrap_or(i32::MAX),
        )
        .ok()
    });

    if scheduled.is_none() {
      resolve.call0(&JsValue::NULL).ok();
    }
  });

  wasm_bindgen_futures::JsFuture::from(promise).await.ok();
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
  tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
  use {super::*, std::cell::Cell};

  const RETRY: Retry = Retry {
    attempts: 3,
    backoff: Duration::from_millis(1),
  };

  fn server_error() -> Error {
    Error::Status {
      url: "http://localhost/comments".parse().unwrap(),
      status: StatusCode::BAD_GATEWAY,
    }
  }

  #[tokio::test]
  async fn first_success() {
    let calls = Cell::new(0);

    let result = RETRY
      .run(|| {
        calls.set(calls.get() + 1);
        async { Ok(1) }
      })
      .await;

    assert_eq!(result.unwrap(), 1);
    assert_eq!(calls.get(), 1);
  }

  #[tokio::test]
  async fn transient_failures_are_retried() {
    let calls = Cell::new(0);

    let result = RETRY
      .run(|| {
        calls.set(calls.get() + 1);
        let call = calls.get();
        async move {
          if call < 3 {
            Err(server_error())
          } else {
            Ok(call)
          }
        }
      })
      .await;

    assert_eq!(result.unwrap(), 3);
    assert_eq!(calls.get(), 3);
  }

  #[tokio::test]
  async fn gives_up_after_last_attempt() {
    let calls = Cell::new(0);

    let result = RETRY
      .run(|| {
        calls.set(calls.get() + 1);
        async { Err::<(), _>(server_error()) }
      })
      .await;

    assert!(matches!(result.unwrap_err(), Error::Status { .. }));
    assert_eq!(calls.get(), 3);
  }

  #[tokio::test]
  async fn permanent_failures_are_not_retried() {
    let calls = Cell::new(0);

    let result = RETRY
      .run(|| {
        calls.set(calls.get() + 1);
        async { Err::<(), _>(Error::MapMissing) }
      })
      .await;

    assert!(matches!(result.unwrap_err(), Error::MapMissing));
    assert_eq!(calls.get(), 1);
  }
}
