use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The remote call an error originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    FenStatus,
    NextFen,
    NextSan,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::FenStatus => "fen-status",
            Service::NextFen => "next-fen",
            Service::NextSan => "next-san",
        }
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestErrorKind {
    Timeout,
    Connect,
    Redirect,
    Body,
    Decode,
    Request,
    Builder,
    Unknown,
}

impl Display for RequestErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestErrorKind::Timeout => "Timeout",
            RequestErrorKind::Connect => "Connect Error",
            RequestErrorKind::Redirect => "Too Many Redirects",
            RequestErrorKind::Body => "Body Error",
            RequestErrorKind::Decode => "Decoding Error",
            RequestErrorKind::Request => "Request Error",
            RequestErrorKind::Builder => "Unsupported Protocol",
            RequestErrorKind::Unknown => "Unknown Error",
        })
    }
}

/// Failure of a single oracle round trip. Both kinds abort the production run that issued
/// the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OracleError {
    #[error("an error occurred while requesting {service} at {url}: {kind}: {message}")]
    Request {
        service: Service,
        url: String,
        kind: RequestErrorKind,
        message: String,
    },
    #[error("error response {status} while requesting {service} at {url}: {body}")]
    ResponseStatus {
        service: Service,
        url: String,
        status: u16,
        body: String,
    },
}

impl OracleError {
    pub fn service(&self) -> Service {
        match self {
            OracleError::Request { service, .. } => *service,
            OracleError::ResponseStatus { service, .. } => *service,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            OracleError::Request { url, .. } => url,
            OracleError::ResponseStatus { url, .. } => url,
        }
    }

    /// Reported when a response decodes but does not pair up with the request.
    pub fn mismatched(service: Service, url: &str, expected: usize, actual: usize) -> Self {
        OracleError::Request {
            service,
            url: url.to_string(),
            kind: RequestErrorKind::Decode,
            message: format!("expected {} entries in response, got {}", expected, actual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names() {
        assert_eq!(Service::FenStatus.to_string(), "fen-status");
        assert_eq!(Service::NextFen.to_string(), "next-fen");
        assert_eq!(Service::NextSan.to_string(), "next-san");
    }

    #[test]
    fn test_messages_carry_service_and_cause() {
        let err = OracleError::ResponseStatus {
            service: Service::NextSan,
            url: "http://agent/ai/next-san".to_string(),
            status: 503,
            body: "{}".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "error response 503 while requesting next-san at http://agent/ai/next-san: {}"
        );
        assert_eq!(err.service(), Service::NextSan);

        let err = OracleError::mismatched(Service::NextFen, "http://env/model/next-fen", 2, 1);

        assert_eq!(err.service(), Service::NextFen);
        assert!(matches!(
            err,
            OracleError::Request {
                kind: RequestErrorKind::Decode,
                ..
            }
        ));
    }
}
