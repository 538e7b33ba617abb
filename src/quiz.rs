//! Next-question selection for quiz sessions.
//!
//! Candidates already asked in the session are removed first and the next
//! question is drawn uniformly from what remains, so a draw always finishes in
//! one pass over the pool.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use tokio::sync::Mutex;

use crate::db::Question;

/// Picks an unseen question from `pool`, or `None` when every question in
/// the pool has been asked (an empty pool counts as exhausted).
pub fn pick_next<'a, R>(
    pool: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: RngCore + ?Sized,
{
    let remaining: Vec<&Question> = pool
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    remaining.choose(rng).copied()
}

/// Owns the random source used by the quiz endpoint.
pub struct QuizSelector {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl QuizSelector {
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic sequence of picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub async fn pick<'a>(
        &self,
        pool: &'a [Question],
        previous: &HashSet<i64>,
    ) -> Option<&'a Question> {
        let mut rng = self.rng.lock().await;
        pick_next(pool, previous, &mut **rng)
    }
}
