use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Fetch a custom Hacker News feed sorted by votes"
)]
pub(crate) struct Arguments {
  /// Listing URL to scrape, without the page query
  #[arg(long, default_value = BASE_URL, value_name = "URL")]
  pub(crate) base_url: String,

  /// Print the feed as pretty JSON instead of a debug dump
  #[arg(long)]
  pub(crate) json: bool,

  /// Number of pages to scrape
  #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
  pub(crate) pages: i64,

  /// Request timeout in seconds (no timeout when omitted)
  #[arg(long, value_name = "SECONDS")]
  pub(crate) timeout: Option<u64>,

  /// Minimum number of votes a story must have to appear in the feed
  #[arg(short, long, default_value_t = 100, allow_negative_numbers = true)]
  pub(crate) votes: i64,
}

impl Arguments {
  pub(crate) fn timeout(&self) -> Result<Option<Duration>> {
    match self.timeout {
      Some(0) => bail!("--timeout must be > 0"),
      timeout => Ok(timeout.map(Duration::from_secs)),
    }
  }

  pub(crate) fn validate(&self) -> Result<Limits> {
    let Some(pages) = u64::try_from(self.pages).ok().filter(|n| *n > 0) else {
      bail!("--pages must be > 0");
    };

    let Some(min_votes) = u64::try_from(self.votes).ok().filter(|n| *n > 0)
    else {
      bail!("--votes must be > 0");
    };

    Ok(Limits { min_votes, pages })
  }
}
