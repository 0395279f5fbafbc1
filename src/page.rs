use super::*;

fn selector(css: &str) -> Selector {
  Selector::parse(css).unwrap_or_else(|error| {
    panic!("invalid built-in selector `{css}`: {error}")
  })
}

pub(crate) static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

pub(crate) static SCORE: LazyLock<Selector> =
  LazyLock::new(|| selector(".score"));

static SUBTEXT: LazyLock<Selector> = LazyLock::new(|| selector(".subtext"));

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".titleline"));

/// A parsed listing page.
pub(crate) struct Page {
  document: Html,
}

impl Page {
  pub(crate) fn parse(html: &str) -> Self {
    Self {
      document: Html::parse_document(html),
    }
  }

  /// Pairs each title with the subtext at the same position, failing when the
  /// markup does not line up.
  pub(crate) fn rows(&self) -> Result<Vec<Row<'_>>> {
    let titles = self.titles();
    let subtexts = self.subtexts();

    ensure!(
      titles.len() == subtexts.len(),
      "found {} story titles but {} subtexts",
      titles.len(),
      subtexts.len()
    );

    Ok(
      titles
        .into_iter()
        .zip(subtexts)
        .map(|(title, subtext)| Row { subtext, title })
        .collect(),
    )
  }

  pub(crate) fn subtexts(&self) -> Vec<ElementRef<'_>> {
    self.document.select(&SUBTEXT).collect()
  }

  pub(crate) fn titles(&self) -> Vec<ElementRef<'_>> {
    self.document.select(&TITLE).collect()
  }
}
