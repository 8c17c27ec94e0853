use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure or undecodable body. Both mean the cycle produced
    /// no usable data and share the same recovery path.
    #[error("endpoint unavailable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response code {code} from {url}")]
    UnexpectedStatusCode { code: u16, url: String },

    #[error("unknown review status '{0}'")]
    UnknownStatus(String),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fatal errors abort startup; everything else is caught at the poll
    /// loop boundary and the loop continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_config_errors_are_fatal() {
        assert!(Error::Config("bot.token is required".into()).is_fatal());
        assert!(!Error::UnknownStatus("draft".into()).is_fatal());
        assert!(!Error::UnexpectedStatusCode {
            code: 503,
            url: "http://localhost".into(),
        }
        .is_fatal());
        assert!(!Error::Validation("submission record has no name".into()).is_fatal());
    }

    #[test]
    fn unexpected_status_code_carries_code_and_url() {
        let err = Error::UnexpectedStatusCode {
            code: 503,
            url: "https://example.com/api".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected response code 503 from https://example.com/api"
        );
    }
}
