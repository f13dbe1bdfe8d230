// ABOUTME: The main Client struct orchestrating fetch, parse, and extraction into a record.
// ABOUTME: Provides async scan() for URLs and sync scan_html() for local HTML strings.

use std::net::ToSocketAddrs;

use scraper::Html;

use crate::error::ScanError;
use crate::extractors::extract_record;
use crate::options::{ClientBuilder, Options};
use crate::record::StructuredRecord;
use crate::resource::{fetch, is_private_ip, FetchOptions};

/// The scan client: one HTTP client plus options, reusable across scans.
///
/// Each scan operates on its own freshly parsed tree and produces its own
/// record; the client holds no mutable state and needs no locking when shared.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            let allow_private = opts.allow_private_networks;
            // Deny redirects into private networks; DNS here must be sync
            // because the policy callback is not async.
            let redirect_policy = reqwest::redirect::Policy::custom(move |attempt| {
                if !allow_private {
                    let next = attempt.url().clone();
                    if let Some(host) = next.host_str() {
                        let port = next
                            .port()
                            .unwrap_or(if next.scheme() == "https" { 443 } else { 80 });
                        if let Ok(ip) = host.parse::<std::net::IpAddr>() {
                            if is_private_ip(&ip) {
                                return attempt.error("redirect to private IP blocked");
                            }
                        } else {
                            match format!("{}:{}", host, port).to_socket_addrs() {
                                Ok(addrs) => {
                                    for sa in addrs {
                                        if is_private_ip(&sa.ip()) {
                                            return attempt
                                                .error("redirect to private IP blocked");
                                        }
                                    }
                                }
                                Err(_) => {
                                    return attempt.error("DNS lookup failed during redirect");
                                }
                            }
                        }
                    }
                }
                attempt.follow()
            });

            reqwest::Client::builder()
                .redirect(redirect_policy)
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Scan a URL: fetch the page and extract its structured record.
    ///
    /// A fetch failure short-circuits before any extraction runs, so callers
    /// never see a partially populated record. The HTML parse itself is
    /// lenient and never fails; malformed markup degrades to a best-effort
    /// tree.
    pub async fn scan(&self, url: &str) -> Result<StructuredRecord, ScanError> {
        if url.is_empty() {
            return Err(ScanError::invalid_url(url, "Scan", None));
        }
        if url::Url::parse(url).is_err() {
            return Err(ScanError::invalid_url(
                url,
                "Scan",
                Some(anyhow::anyhow!("malformed URL")),
            ));
        }

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        };

        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        let raw_html = fetched.text_utf8();
        let doc = Html::parse_document(&raw_html);

        log::debug!("scanned {} ({} bytes)", url, fetched.body.len());

        Ok(extract_record(&doc, url, &fetched.date))
    }

    /// Extract a structured record from an HTML string without any network
    /// access, using `url` as the base for image resolution and metadata.
    ///
    /// There is no server response here, so `metadata.timestamp` is empty.
    pub fn scan_html(&self, html: &str, url: &str) -> Result<StructuredRecord, ScanError> {
        if url.is_empty() {
            return Err(ScanError::invalid_url(url, "ScanHTML", None));
        }
        if url::Url::parse(url).is_err() {
            return Err(ScanError::invalid_url(
                url,
                "ScanHTML",
                Some(anyhow::anyhow!("malformed URL")),
            ));
        }
        if html.trim().is_empty() {
            return Err(ScanError::parse(
                url,
                "ScanHTML",
                Some(anyhow::anyhow!("empty document")),
            ));
        }

        let doc = Html::parse_document(html);
        Ok(extract_record(&doc, url, ""))
    }
}
