//! Stateless URL builder for the StorNext Web Services v2 API.
//!
//! # Design
//! `StorNextClient` holds only a `ClientConfig` and carries no mutable state
//! between calls. It turns an `Action` into an `HttpRequest`; the caller
//! executes the GET and hands the `HttpResponse` to `output::write_response`.
//! Responses are never interpreted, so there is no `parse_*` half.

use crate::action::Action;
use crate::config::ClientConfig;
use crate::http::HttpRequest;

/// Synchronous, stateless client for the Web Services API.
#[derive(Debug, Clone)]
pub struct StorNextClient {
    config: ClientConfig,
}

impl StorNextClient {
    pub fn new(mut config: ClientConfig) -> Self {
        let trimmed = config.base_url.trim_end_matches('/').len();
        config.base_url.truncate(trimmed);
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the GET for `action`: prefix, endpoint path, the action's own
    /// parameters, then `username`, `password` and `format`.
    pub fn build_request(&self, action: &Action) -> HttpRequest {
        let mut query: Vec<(&str, &str)> = action.query_params();
        query.push(("username", self.config.username.as_str()));
        query.push(("password", self.config.password.as_str()));
        query.push(("format", self.config.format.as_str()));

        let query = query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        tracing::debug!(action = action.name(), host = self.config.host(), "built request");

        HttpRequest {
            url: format!("{}{}?{query}", self.config.base_url, action.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StorNextClient {
        StorNextClient::new(ClientConfig::default())
    }

    const CREDS: &str = "username=webuser&password=password&format=json";

    #[test]
    fn build_system_info() {
        let req = client().build_request(&Action::SystemInfo);
        assert_eq!(req.url, format!("https://mdc01.badoot.local/sws/v2/system/info?{CREDS}"));
    }

    #[test]
    fn build_media_info_is_verbose() {
        let req = client().build_request(&Action::MediaInfo);
        assert_eq!(
            req.url,
            format!("https://mdc01.badoot.local/sws/v2/fsmedinfo?verbose=true&{CREDS}")
        );
    }

    #[test]
    fn build_file_actions() {
        let cases = [
            (Action::FileInfo("/snfs/a.mov".into()), "/file/fsfileinfo"),
            (Action::Store("/snfs/a.mov".into()), "/file/fsstore"),
            (Action::Retrieve("/snfs/a.mov".into()), "/file/fsretrieve"),
            (Action::RemoveDiskCopy("/snfs/a.mov".into()), "/file/fsrmdiskcopy"),
        ];
        for (action, path) in cases {
            let req = client().build_request(&action);
            assert_eq!(
                req.url,
                format!("https://mdc01.badoot.local/sws/v2{path}?file=/snfs/a.mov&{CREDS}"),
                "{action}"
            );
        }
    }

    #[test]
    fn filename_is_embedded_verbatim() {
        let req = client().build_request(&Action::Store("/snfs/a b&c=d?.txt".into()));
        assert_eq!(
            req.url,
            format!("https://mdc01.badoot.local/sws/v2/file/fsstore?file=/snfs/a b&c=d?.txt&{CREDS}")
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = StorNextClient::new(ClientConfig::with_base_url("http://localhost:8080/sws/v2//"));
        let req = client.build_request(&Action::SystemInfo);
        assert_eq!(req.url, format!("http://localhost:8080/sws/v2/system/info?{CREDS}"));
    }

    #[test]
    fn custom_credentials_and_format() {
        let config = ClientConfig {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
            format: "xml".to_string(),
            ..ClientConfig::default()
        };
        let req = StorNextClient::new(config).build_request(&Action::MediaInfo);
        assert!(
            req.url.ends_with("/fsmedinfo?verbose=true&username=admin&password=s3cret&format=xml"),
            "{}",
            req.url
        );
    }
}
