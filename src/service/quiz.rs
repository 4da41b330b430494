//! Quiz next-question selection.

use crate::models::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Category id the front-end sends for "All".
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    pub fn from_category_id(id: i64) -> Self {
        if id == ALL_CATEGORIES {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

/// Uniformly pick one candidate whose id is not in `previous`. None when every candidate was shown.
pub fn pick_question<R>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();
    unseen.choose(rng).cloned()
}
