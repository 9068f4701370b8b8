use rand::Rng;

/// Ids not drawn yet. Drawing removes the id so it cannot come up twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPool {
    ids: Vec<String>,
}

impl DrawPool {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Remove a uniformly chosen id from what is left.
    ///
    /// The index is drawn over the current length, then swap-removed in
    /// O(1). Every remaining id has the same chance regardless of where
    /// earlier removals moved it.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.ids.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.ids.len());
        Some(self.ids.swap_remove(idx))
    }

    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }
}

impl<S: Into<String>> FromIterator<S> for DrawPool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// How the winners were arrived at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// Nobody entered
    Empty,
    /// Pool no larger than the prize count, so everyone wins in pool order
    EveryoneWins,
    /// Random sampling without replacement
    Sampled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub kind: DrawKind,
    /// In the order drawn
    pub winners: Vec<String>,
}

/// Pick `min(pool.len(), count)` distinct winners.
///
/// The rng is not touched unless sampling is needed, so a small draw
/// leaves the generator state as it found it.
pub fn draw_winners<R: Rng + ?Sized>(mut pool: DrawPool, count: usize, rng: &mut R) -> DrawOutcome {
    if pool.is_empty() {
        return DrawOutcome {
            kind: DrawKind::Empty,
            winners: Vec::new(),
        };
    }

    if pool.len() <= count {
        return DrawOutcome {
            kind: DrawKind::EveryoneWins,
            winners: pool.into_ids(),
        };
    }

    let mut winners = Vec::with_capacity(count);
    while winners.len() < count {
        match pool.take_random(rng) {
            Some(id) => winners.push(id),
            None => break,
        }
    }

    DrawOutcome {
        kind: DrawKind::Sampled,
        winners,
    }
}
