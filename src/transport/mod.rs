pub mod intercept;
pub mod page;

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode, Url};

use crate::config::PortalConfig;
use crate::errors::ClientError;
use self::intercept::{ACCEPTABLE_HEADER, CSRF_TOKEN_HEADER, Disposition, classify};
use self::page::PageHandle;

/// Outcome of a partial-page exchange, pre-classified for the binding layer.
#[derive(Debug)]
pub struct Exchange {
    pub status: StatusCode,
    pub disposition: Disposition,
    pub body: String,
}

/// Dispatch for every portal request - pipeline posts and partial-page
/// exchanges alike. All traffic funnels through one builder that attaches
/// the anti-forgery token, read fresh from the page at dispatch time so a
/// rotated token is honored immediately.
pub struct Transport {
    http: Client,
    base_url: Url,
    page: Arc<dyn PageHandle>,
}

impl Transport {
    pub fn new(config: &PortalConfig, page: Arc<dyn PageHandle>) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;

        Ok(Self {
            http: Client::new(),
            base_url,
            page,
        })
    }

    pub fn page(&self) -> &dyn PageHandle {
        self.page.as_ref()
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| ClientError::InvalidRequestPath(path.to_string()))?;

        let mut builder = self
            .http
            .request(method, url)
            .header(CSRF_TOKEN_HEADER, self.page.csrf_token());

        if !query.is_empty() {
            builder = builder.query(query);
        }

        Ok(builder)
    }

    /// POSTs a form-encoded body and hands back the bare status; the calling
    /// pipeline owns the classification.
    pub async fn post_form(
        &self,
        path: &str,
        query: &[(&str, &str)],
        fields: &[(&str, &str)],
    ) -> Result<StatusCode, ClientError> {
        let response = self
            .request(Method::POST, path, query)?
            .form(fields)
            .send()
            .await?;

        Ok(response.status())
    }

    /// Performs a declarative partial-page request. Error statuses the
    /// server marks acceptable still carry renderable content; the returned
    /// disposition tells the binding layer whether to swap the body in.
    pub async fn exchange(
        &self,
        method: Method,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<Exchange, ClientError> {
        let mut builder = self.request(method, path, &[])?;
        if !fields.is_empty() {
            builder = builder.form(fields);
        }

        let response = builder.send().await?;
        let status = response.status();
        let acceptable = response
            .headers()
            .get(ACCEPTABLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        Ok(Exchange {
            status,
            disposition: classify(status, acceptable.as_deref()),
            body,
        })
    }
}

#[cfg(test)]
pub(crate) async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
