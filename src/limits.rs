/// Validated run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Limits {
  pub(crate) min_votes: u64,
  pub(crate) pages: u64,
}
