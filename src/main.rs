use {
  anyhow::{bail, ensure},
  arguments::Arguments,
  clap::Parser,
  client::Client,
  crossterm::style::Stylize,
  feed::Feed,
  fetch::{Fetch, page_url},
  limits::Limits,
  page::{ANCHOR, Page, SCORE},
  row::Row,
  scraper::{ElementRef, Html, Selector},
  serde::Serialize,
  sort::sort_by_votes,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal},
    process,
    sync::LazyLock,
    time::Duration,
  },
  story::Story,
  tracing::{debug, info},
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
  utils::{collapse_whitespace, parse_points},
};

#[cfg(test)]
use testing::{ListingRow, StaticPages, listing};

mod arguments;
mod client;
mod feed;
mod fetch;
mod limits;
mod page;
mod row;
mod sort;
mod story;
#[cfg(test)]
mod testing;
mod utils;

const BASE_URL: &str = "https://news.ycombinator.com/news";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn custom_feed<F: Fetch>(
  arguments: &Arguments,
  fetcher: &F,
) -> Result<Vec<Story>> {
  let limits = arguments.validate()?;

  Feed::new(fetcher, &arguments.base_url, limits).build().await
}

fn initialize_logging() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  initialize_logging();

  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}

fn render(stories: &[Story], json: bool) -> Result<String> {
  if json {
    Ok(serde_json::to_string_pretty(stories)?)
  } else {
    Ok(format!("{stories:#?}"))
  }
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let client = Client::new(arguments.timeout()?)?;

  let feed = custom_feed(&arguments, &client).await?;

  println!("{}", render(&feed, arguments.json)?);

  Ok(())
}
