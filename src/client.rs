use {super::*, anyhow::Context};

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  pub(crate) fn new(timeout: Option<Duration>) -> Result<Self> {
    let Some(timeout) = timeout else {
      return Ok(Self::default());
    };

    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .context("failed to build http client")?;

    Ok(Self { client })
  }
}

impl Fetch for Client {
  async fn fetch_page(&self, base_url: &str, page: u64) -> Result<String> {
    let url = page_url(base_url, page);

    let body = self
      .client
      .get(&url)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .with_context(|| format!("request to {url} failed"))?
      .text()
      .await
      .with_context(|| format!("failed to read body of {url}"))?;

    debug!(%url, bytes = body.len(), "fetched page");

    Ok(body)
  }
}
