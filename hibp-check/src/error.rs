#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read password: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("failed to check for password compromise: {0}")]
    Check(#[from] hibp_range_client::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::Prompt(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no password on stdin",
        ));
        assert_eq!(err.to_string(), "failed to read password: no password on stdin");

        let err = Error::from(hibp_range_client::Error::EmptyResponse { prefix: "5BAA6".to_string() });
        assert_eq!(
            err.to_string(),
            "failed to check for password compromise: no hashes in response for prefix 5BAA6"
        );
    }
}
