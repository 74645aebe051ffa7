use std::{any::Any, panic::AssertUnwindSafe};

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::errors::internal_server_error;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(catch_panic))
}

async fn catch_panic(request: Request, next: Next) -> Response {
    let route = request.uri().path().to_owned();
    AssertUnwindSafe(next.run(request))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| {
            internal_server_error(anyhow!(
                "handler for {route} panicked: {}",
                panic_message(&*payload)
            ))
        })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(&*payload), "static message");

        let payload: Box<dyn Any + Send> = Box::new(format!("formatted {}", 42));
        assert_eq!(panic_message(&*payload), "formatted 42");

        let payload: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(panic_message(&*payload), "<non-string payload>");
    }
}
