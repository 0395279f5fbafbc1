use {
  super::*,
  anyhow::anyhow,
  std::{cell::Cell, collections::HashMap},
};

/// One story in a synthetic listing page.
pub(crate) struct ListingRow {
  pub(crate) title: &'static str,
  pub(crate) votes: Option<u64>,
}

impl ListingRow {
  pub(crate) fn scored(title: &'static str, votes: u64) -> Self {
    Self {
      title,
      votes: Some(votes),
    }
  }

  pub(crate) fn unscored(title: &'static str) -> Self {
    Self { title, votes: None }
  }
}

/// Renders rows with the same structure as the live listing markup.
pub(crate) fn listing(rows: &[ListingRow]) -> String {
  let mut html = String::from(
    "<html><body><center><table id=\"hnmain\"><tr><td><table>",
  );

  for (index, row) in rows.iter().enumerate() {
    let score = row.votes.map_or_else(String::new, |votes| {
      let unit = if votes == 1 { "point" } else { "points" };

      format!(
        "<span class=\"score\" id=\"score_{index}\">{votes} {unit}</span> \
         by <a class=\"hnuser\">pg</a> "
      )
    });

    html.push_str(&format!(
      "<tr class=\"athing submission\" id=\"{index}\">\
        <td class=\"title\"><span class=\"rank\">{rank}.</span></td>\
        <td class=\"title\"><span class=\"titleline\">\
          <a href=\"https://example.com/{index}\">{title}</a>\
          <span class=\"sitebit comhead\"> (<a href=\"from?site=example.com\">\
          <span class=\"sitestr\">example.com</span></a>)</span>\
        </span></td>\
      </tr>\
      <tr><td colspan=\"2\"></td><td class=\"subtext\"><span class=\"subline\">\
        {score}<span class=\"age\">1 hour ago</span>\
      </span></td></tr>\
      <tr class=\"spacer\"></tr>",
      rank = index + 1,
      title = row.title,
    ));
  }

  html.push_str("</table></td></tr></table></center></body></html>");

  html
}

/// In-memory fetcher serving canned pages and counting requests.
#[derive(Default)]
pub(crate) struct StaticPages {
  calls: Cell<usize>,
  pages: HashMap<u64, String>,
}

impl StaticPages {
  pub(crate) fn calls(&self) -> usize {
    self.calls.get()
  }

  pub(crate) fn with_html(mut self, page: u64, html: &str) -> Self {
    self.pages.insert(page, html.to_owned());
    self
  }

  pub(crate) fn with_page(mut self, page: u64, rows: &[ListingRow]) -> Self {
    self.pages.insert(page, listing(rows));
    self
  }
}

impl Fetch for StaticPages {
  async fn fetch_page(&self, base_url: &str, page: u64) -> Result<String> {
    self.calls.set(self.calls.get() + 1);

    self
      .pages
      .get(&page)
      .cloned()
      .ok_or_else(|| anyhow!("no page at {}", page_url(base_url, page)))
  }
}
