//! reqwest client for `api.figma.com`.

use reqwest::{Client, RequestBuilder};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::document::{Document, FileResponse};
use super::{DesignSource, FigmaError, Node, SvgExports};
use crate::debug;

/// Header carrying a personal access token.
const TOKEN_HEADER: &str = "X-Figma-Token";

/// Figma REST API client.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    api_url: String,
    token: String,
}

/// `GET /v1/images/:key` response body.
#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    images: FxHashMap<String, Option<String>>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl FigmaClient {
    pub const DEFAULT_API_URL: &'static str = "https://api.figma.com/v1";

    pub fn new(api_url: &str, token: &str) -> Result<Self, FigmaError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        })
    }

    fn api(&self, path: &str) -> RequestBuilder {
        self.http
            .get(format!("{}/{path}", self.api_url))
            .header(TOKEN_HEADER, &self.token)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FigmaError> {
        let body = send_text(request).await?;
        serde_json::from_str(&body.text).map_err(|source| FigmaError::Decode {
            url: body.url,
            source,
        })
    }

    async fn download_one(&self, url: &str) -> Result<String, FigmaError> {
        // Export URLs are pre-signed; the API token is not sent along.
        Ok(send_text(self.http.get(url)).await?.text)
    }
}

struct Body {
    url: String,
    text: String,
}

/// Send a request, turning non-success statuses into [`FigmaError::Api`].
async fn send_text(request: RequestBuilder) -> Result<Body, FigmaError> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .ok()
            .and_then(|e| e.err.or(e.message))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_owned());
        return Err(FigmaError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(Body { url, text })
}

impl DesignSource for FigmaClient {
    async fn load(&self, file_key: &str) -> Result<Document, FigmaError> {
        let response: FileResponse = self.send_json(self.api(&format!("files/{file_key}"))).await?;
        Ok(Document::from_response(file_key, response))
    }

    async fn download(
        &self,
        document: &Document,
        components: &[&Node],
    ) -> Result<SvgExports, FigmaError> {
        let mut exports = SvgExports::default();
        if components.is_empty() {
            return Ok(exports);
        }

        let ids = components
            .iter()
            .map(|c| c.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let request = self.api(&format!("images/{}", document.key)).query(&[
            ("ids", ids.as_str()),
            ("format", "svg"),
            ("svg_include_id", "true"),
        ]);
        let response: ImagesResponse = self.send_json(request).await?;

        if let Some(err) = response.err {
            return Err(FigmaError::Api {
                status: 200,
                message: err,
            });
        }

        for component in components {
            if exports.contains_key(&component.name) {
                continue;
            }
            let Some(Some(url)) = response.images.get(&component.id) else {
                debug!("figma"; "no export rendered for '{}'", component.name);
                continue;
            };
            debug!("figma"; "downloading '{}'", component.name);
            let svg = self.download_one(url).await?;
            exports.insert(component.name.clone(), svg);
        }

        Ok(exports)
    }
}
