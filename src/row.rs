use super::*;

/// A story title element paired with the subtext beneath it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Row<'a> {
  pub(crate) subtext: ElementRef<'a>,
  pub(crate) title: ElementRef<'a>,
}

impl<'a> Row<'a> {
  fn anchor(&self) -> Option<ElementRef<'a>> {
    self.title.select(&ANCHOR).next()
  }

  /// The element's own `href`, falling back to its first anchor.
  pub(crate) fn link(&self) -> Option<String> {
    self
      .title
      .value()
      .attr("href")
      .or_else(|| {
        self
          .anchor()
          .and_then(|anchor| anchor.value().attr("href"))
      })
      .map(str::to_owned)
  }

  /// The anchor text, leaving out the trailing `(site.com)` label that the
  /// full element text carries. Falls back to the element text.
  pub(crate) fn title(&self) -> String {
    let element = self.anchor().unwrap_or(self.title);
    collapse_whitespace(&element.text().collect::<String>())
  }

  /// Vote count from the subtext, or `None` when no score is shown.
  pub(crate) fn votes(&self) -> Result<Option<u64>> {
    self
      .subtext
      .select(&SCORE)
      .next()
      .map(|score| parse_points(&score.text().collect::<String>()))
      .transpose()
  }
}
