use eyre::Report;
use std::time::Duration;
use ureq::Response;

#[derive(Debug, thiserror::Error)]
#[error("Notion API request failure")]
pub struct Error {
    kind: ErrorKind,
    source: Report,
}

#[derive(Debug)]
enum ErrorKind {
    Communication,
    RateLimit(Duration),
    Status { code: u16, body: String },
}

impl Error {
    pub fn is_authorization(&self) -> bool {
        matches!(self.kind, ErrorKind::Status { code: 401, .. })
    }

    pub fn is_bad_request(&self) -> bool {
        matches!(self.kind, ErrorKind::Status { code: 400, .. })
    }

    pub fn is_communication(&self) -> bool {
        matches!(self.kind, ErrorKind::Communication)
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self.kind, ErrorKind::RateLimit(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Status { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn response_body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self.kind {
            ErrorKind::RateLimit(duration) => Some(duration),
            _ => None,
        }
    }
}

// Integrations should accommodate variable rate limits by handling HTTP 429 responses
// and respecting the Retry-After response header value,
// which is set as an integer number of seconds (in decimal).
// See more for details https://developers.notion.com/reference/request-limits
impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Transport(transport) => Self {
                kind: ErrorKind::Communication,
                source: Report::new(transport),
            },
            ureq::Error::Status(429, response) => Self {
                kind: ErrorKind::RateLimit(rate_limit_duration(&response)),
                source: eyre::eyre!("Notion API request rate limited"),
            },
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();

                Self {
                    source: eyre::eyre!(
                        "Notion API responded with status code {}: {}",
                        code,
                        body
                    ),
                    kind: ErrorKind::Status { code, body },
                }
            }
        }
    }
}

fn rate_limit_duration(response: &Response) -> Duration {
    let retry_after = response.header("Retry-After").unwrap_or_else(|| {
        tracing::warn!("Notion API response returned 429 status code without Retry-After header");

        "1.0"
    });

    let seconds = retry_after.parse::<f64>().unwrap_or_else(|_value| {
        tracing::warn!(
            "Notion API response returned 429 status code with invalid Retry-After header: {}",
            retry_after
        );

        1.0
    });

    let duration = Duration::from_secs_f64(seconds);
    tracing::warn!("Notion API request rate limited for {:?}", duration);

    duration
}
