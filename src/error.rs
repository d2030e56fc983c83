use crate::models::ParseError;
use thiserror::Error;

/// Everything that can go wrong between a submit and a settled session.
/// The user sees a single readable message; the variant is kept so logs
/// can tell a dead network from a misbehaving service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),
    #[error("could not reach the analysis service: {0}")]
    Transport(String),
    #[error("analysis service returned status {0}")]
    Service(u16),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ClientError {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => "validation",
            ClientError::Transport(_) => "transport",
            ClientError::Service(_) => "service",
            ClientError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_carry_the_status() {
        let err = ClientError::Service(500);
        assert_eq!(err.kind(), "service");
        assert_eq!(err.to_string(), "analysis service returned status 500");
    }

    #[test]
    fn parse_errors_pass_their_message_through() {
        let err = ClientError::from(ParseError::MissingField("final_label"));
        assert_eq!(err.kind(), "parse");
        assert!(err.to_string().contains("final_label"));
    }
}
