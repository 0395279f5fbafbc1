use super::*;

/// Source of raw listing pages.
pub(crate) trait Fetch {
  async fn fetch_page(&self, base_url: &str, page: u64) -> Result<String>;
}

pub(crate) fn page_url(base_url: &str, page: u64) -> String {
  format!("{base_url}?p={page}")
}
