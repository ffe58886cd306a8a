use thiserror::Error;

/// Failure of a backend fetch. Both variants display the same generic
/// message; the status and transport detail are carried for the logs at the
/// fetch call sites, never for the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Something went wrong!")]
    Http { status: u16 },
    #[error("Something went wrong!")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_display_the_generic_message_only() {
        let http = FetchError::Http { status: 500 };
        assert_eq!(http.to_string(), "Something went wrong!");
        let network = FetchError::Network("connection refused".into());
        assert_eq!(network.to_string(), "Something went wrong!");
        assert!(!network.to_string().contains("connection refused"));
    }
}
