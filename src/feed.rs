use {super::*, anyhow::Context};

/// Scrapes consecutive listing pages and keeps the stories that meet the vote
/// threshold.
pub(crate) struct Feed<'a, F> {
  base_url: &'a str,
  fetcher: &'a F,
  limits: Limits,
}

impl<'a, F: Fetch> Feed<'a, F> {
  /// Collects qualifying stories from every page and sorts them by votes.
  pub(crate) async fn build(&self) -> Result<Vec<Story>> {
    Ok(sort_by_votes(self.collect().await?))
  }

  /// Qualifying stories in the order they were found: page by page, then
  /// top to bottom within a page.
  pub(crate) async fn collect(&self) -> Result<Vec<Story>> {
    let mut stories = Vec::new();

    for page in 1..=self.limits.pages {
      eprintln!("Fetching data from page {page}...");

      let html = self
        .fetcher
        .fetch_page(self.base_url, page)
        .await
        .with_context(|| format!("failed to fetch page {page}"))?;

      let found =
        Self::qualifying(&Page::parse(&html), self.limits.min_votes)
          .with_context(|| {
            format!("failed to extract stories from page {page}")
          })?;

      info!(page, kept = found.len(), "scraped page");

      stories.extend(found);
    }

    Ok(stories)
  }

  pub(crate) fn new(fetcher: &'a F, base_url: &'a str, limits: Limits) -> Self {
    Self {
      base_url,
      fetcher,
      limits,
    }
  }

  fn qualifying(page: &Page, min_votes: u64) -> Result<Vec<Story>> {
    let mut stories = Vec::new();

    for row in page.rows()? {
      let title = row.title();

      let Some(votes) = row
        .votes()
        .with_context(|| format!("could not read votes for `{title}`"))?
      else {
        debug!(%title, "skipping story without a score");
        continue;
      };

      if votes >= min_votes {
        stories.push(Story {
          link: row.link(),
          title,
          votes,
        });
      }
    }

    Ok(stories)
  }
}
