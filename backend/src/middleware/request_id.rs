//! Request identification and access logging.
//!
//! Every request gets a UUID that is echoed back in an `x-request-id`
//! response header and attached to the access log line, so a client-reported
//! failure can be matched to its server-side trace.

use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::info;
use uuid::Uuid;

/// Middleware factory; wrap the app with `.wrap(RequestId)`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::RequestId;
///
/// let app = App::new().wrap(RequestId);
/// ```
#[derive(Clone, Copy, Default)]
pub struct RequestId;

impl<S, B> Transform<S, ServiceRequest> for RequestId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestId`].
pub struct RequestIdMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = Uuid::new_v4();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;

            if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                res.response_mut()
                    .headers_mut()
                    .insert(HeaderName::from_static("x-request-id"), value);
            }

            let elapsed_ms =
                u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = res.status().as_u16(),
                elapsed_ms,
                "request completed"
            );
            Ok(res)
        })
    }
}
