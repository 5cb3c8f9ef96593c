use engine::{OracleError, RequestErrorKind, Service};
use log::trace;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// JSON POST transport shared by every oracle. Cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PostClient {
    client: Client,
}

impl PostClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    pub async fn post<Req, Res>(&self, service: Service, url: &str, body: &Req) -> Result<Res, OracleError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        trace!("POST {} ({})", url, service);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| request_error(service, url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);

            return Err(OracleError::ResponseStatus {
                service,
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Res>()
            .await
            .map_err(|e| request_error(service, url, e))
    }
}

pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Body of a non-2xx response, or the read error's text when the body itself failed.
fn error_body<E: Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| e.to_string())
}

fn request_error(service: Service, url: &str, err: reqwest::Error) -> OracleError {
    OracleError::Request {
        service,
        url: url.to_string(),
        kind: request_error_kind(&err),
        message: err.to_string(),
    }
}

fn request_error_kind(err: &reqwest::Error) -> RequestErrorKind {
    if err.is_timeout() {
        RequestErrorKind::Timeout
    } else if err.is_connect() {
        RequestErrorKind::Connect
    } else if err.is_redirect() {
        RequestErrorKind::Redirect
    } else if err.is_decode() {
        RequestErrorKind::Decode
    } else if err.is_body() {
        RequestErrorKind::Body
    } else if err.is_builder() {
        RequestErrorKind::Builder
    } else if err.is_request() {
        RequestErrorKind::Request
    } else {
        RequestErrorKind::Unknown
    }
}
