use {super::*, std::cmp::Reverse};

/// Orders stories by votes, highest first. Equal counts keep their input order.
pub(crate) fn sort_by_votes(mut stories: Vec<Story>) -> Vec<Story> {
  stories.sort_by_key(|story| Reverse(story.votes));
  stories
}
