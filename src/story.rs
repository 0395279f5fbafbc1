use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Story {
  pub(crate) link: Option<String>,
  pub(crate) title: String,
  pub(crate) votes: u64,
}
