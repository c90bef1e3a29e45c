use crate::utils::error::{Result, ScheduleError};
use regex::Regex;
use std::io::Write;
use std::time::Duration;
use url::Url;

/// Default pattern for finding the schedule PDF on a season page.
pub const DEFAULT_LINK_PATTERN: &str = r#"href\s*=\s*["']([^"']+\.pdf)["']"#;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const CONVERT_TIMEOUT: Duration = Duration::from_secs(60);

pub fn http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()?)
}

pub async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    tracing::debug!("downloading {}", url);
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tracing::debug!("downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

/// Fetch an HTML page and return the first PDF link matching `pattern`.
/// Relative links are resolved against the page URL; the league site
/// moved the uploads directory between seasons, so absolute and relative
/// hrefs both occur.
pub async fn discover_pdf_link(
    client: &reqwest::Client,
    page_url: &str,
    pattern: &str,
) -> Result<String> {
    let link_re = Regex::new(pattern)?;
    let page = client
        .get(page_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let href = link_re
        .captures(&page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ScheduleError::NoPdfLinkError {
            url: page_url.to_string(),
            pattern: pattern.to_string(),
        })?;

    let base = Url::parse(page_url).map_err(|e| ScheduleError::InvalidConfigValueError {
        field: "url".to_string(),
        value: page_url.to_string(),
        reason: e.to_string(),
    })?;
    let resolved = base
        .join(&href)
        .map_err(|e| ScheduleError::InvalidConfigValueError {
            field: "url".to_string(),
            value: href.clone(),
            reason: e.to_string(),
        })?;

    tracing::info!("discovered schedule PDF: {}", resolved);
    Ok(resolved.into())
}

/// Shells out to the `pdftotext` tool (poppler-utils), the same
/// converter the schedule cache format is defined by.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopplerConverter;

impl crate::domain::ports::PdfConverter for PopplerConverter {
    async fn to_text(&self, pdf: &[u8]) -> Result<String> {
        pdf_to_text(pdf).await
    }
}

/// Convert PDF bytes to layout-preserving text via the external
/// `pdftotext` tool.
pub async fn pdf_to_text(pdf: &[u8]) -> Result<String> {
    convert_pdf("pdftotext", pdf).await
}

async fn convert_pdf(program: &str, pdf: &[u8]) -> Result<String> {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile()?;
    file.write_all(pdf)?;
    file.flush()?;

    let path = file.path().to_owned();
    let command = tokio::process::Command::new(program)
        .arg("-layout")
        .arg(&path)
        .arg("-")
        .output();

    let output = match tokio::time::timeout(CONVERT_TIMEOUT, command).await {
        Err(_) => {
            return Err(ScheduleError::PdfConvertError {
                message: format!("{} timed out after {}s", program, CONVERT_TIMEOUT.as_secs()),
            })
        }
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScheduleError::PdfConvertError {
                message: format!("{} not found on PATH", program),
            })
        }
        Ok(Err(e)) => return Err(ScheduleError::IoError(e)),
        Ok(Ok(output)) => output,
    };

    if !output.status.success() {
        return Err(ScheduleError::PdfConvertError {
            message: format!(
                "{} exited with {}: {}",
                program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| ScheduleError::PdfConvertError {
        message: format!("converter produced invalid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_download_returns_body_bytes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/schema.pdf");
            then.status(200).body("%PDF-1.4 fake");
        });

        let client = http_client().unwrap();
        let bytes = download(&client, &server.url("/schema.pdf")).await.unwrap();

        mock.assert();
        assert_eq!(bytes, b"%PDF-1.4 fake");
    }

    #[tokio::test]
    async fn test_download_http_error_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone.pdf");
            then.status(404);
        });

        let client = http_client().unwrap();
        let result = download(&client, &server.url("/gone.pdf")).await;

        assert!(matches!(result, Err(ScheduleError::FetchError(_))));
    }

    #[tokio::test]
    async fn test_discover_finds_first_matching_link() {
        let server = MockServer::start();
        let page = concat!(
            "<html><body>",
            "<a href=\"/uploads/archief-17-18.txt\">oud</a>",
            "<a href=\"/uploads/Speelschema-zv-18-19.pdf\">schema</a>",
            "<a href=\"/uploads/ander.pdf\">ander</a>",
            "</body></html>",
        );
        let mock = server.mock(|when, then| {
            when.method(GET).path("/wedstrijden");
            then.status(200).body(page);
        });

        let client = http_client().unwrap();
        let link = discover_pdf_link(&client, &server.url("/wedstrijden"), DEFAULT_LINK_PATTERN)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(link, server.url("/uploads/Speelschema-zv-18-19.pdf"));
    }

    #[tokio::test]
    async fn test_discover_resolves_relative_links_against_page_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/seizoen/wedstrijden");
            then.status(200)
                .body("<a href='schema.pdf'>download</a>");
        });

        let client = http_client().unwrap();
        let link = discover_pdf_link(
            &client,
            &server.url("/seizoen/wedstrijden"),
            DEFAULT_LINK_PATTERN,
        )
        .await
        .unwrap();

        assert_eq!(link, server.url("/seizoen/schema.pdf"));
    }

    #[tokio::test]
    async fn test_missing_converter_binary_names_the_tool() {
        let result = convert_pdf("pdftotext-ontbreekt", b"%PDF-1.4 fake").await;

        match result {
            Err(ScheduleError::PdfConvertError { message }) => {
                assert!(message.contains("pdftotext-ontbreekt"));
                assert!(message.contains("not found"));
            }
            other => panic!("expected PdfConvertError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_discover_without_match_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/leeg");
            then.status(200).body("<html><body>geen schema</body></html>");
        });

        let client = http_client().unwrap();
        let result =
            discover_pdf_link(&client, &server.url("/leeg"), DEFAULT_LINK_PATTERN).await;

        assert!(matches!(result, Err(ScheduleError::NoPdfLinkError { .. })));
    }
}
