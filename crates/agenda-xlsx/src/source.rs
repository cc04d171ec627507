//! Where the workbook comes from and how its bytes are fetched.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::LoadError;

/// Request timeout for remote workbooks.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A workbook location: a local file or an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Treats `http://` and `https://` strings as URLs, anything else as a path.
    pub fn parse(s: &str) -> Self {
        let lower = s.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(s.trim().to_string())
        } else {
            Self::Path(PathBuf::from(s))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Fetches the raw workbook bytes. This is the only suspension point of a load.
pub async fn fetch(source: &Source) -> Result<Vec<u8>, LoadError> {
    match source {
        Source::Path(path) => tokio::fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        }),
        Source::Url(url) => {
            let client = reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .map_err(LoadError::ClientBuild)?;
            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            Ok(response.bytes().await?.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            Source::parse("https://example.org/schedule.xlsx"),
            Source::Url("https://example.org/schedule.xlsx".into())
        );
        assert_eq!(
            Source::parse("HTTP://example.org/a.xlsx"),
            Source::Url("HTTP://example.org/a.xlsx".into())
        );
        assert_eq!(
            Source::parse("data/schedule.xlsx"),
            Source::Path(PathBuf::from("data/schedule.xlsx"))
        );
    }

    #[test]
    fn display_shows_location() {
        assert_eq!(Source::parse("a/b.xlsx").to_string(), "a/b.xlsx");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::Path(dir.path().join("absent.xlsx"));
        let err = fetch(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("absent.xlsx"));
    }
}
