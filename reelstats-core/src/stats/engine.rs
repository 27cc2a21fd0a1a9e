use std::collections::HashMap;
use std::hash::Hash;

use reelstats_model::{PersonId, Title, TitleKind};
use tracing::debug;

use super::caps::DisplayCaps;
use super::ranking::top_ranked;
use super::row::StatRow;
use super::{CategoryCounts, Statistics};

/// Key -> row table owned by a single aggregation pass.
///
/// Rows live in one vector in the order their key was first seen; the map
/// only holds indices into it.
#[derive(Debug)]
struct GroupTable<K> {
    slots: HashMap<K, usize>,
    rows: Vec<StatRow>,
}

impl<K> Default for GroupTable<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            rows: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> GroupTable<K> {
    fn row_mut(
        &mut self,
        key: &K,
        seed: impl FnOnce() -> StatRow,
    ) -> &mut StatRow {
        let index = match self.slots.get(key) {
            Some(&index) => index,
            None => {
                let index = self.rows.len();
                self.rows.push(seed());
                self.slots.insert(key.clone(), index);
                index
            }
        };
        &mut self.rows[index]
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn into_rows(self) -> Vec<StatRow> {
        self.rows
    }
}

/// Accumulator state for one call of [`compute_statistics_with`].
#[derive(Debug, Default)]
struct AggregationPass {
    counts: CategoryCounts,
    global: StatRow,
    actors: GroupTable<PersonId>,
    directors: GroupTable<PersonId>,
    genres: GroupTable<String>,
}

impl AggregationPass {
    fn add(&mut self, title: &Title) {
        match title.kind() {
            TitleKind::Movie => self.counts.movies += 1,
            TitleKind::Episode => self.counts.episodes += 1,
            TitleKind::Series => self.counts.series += 1,
        }

        self.global.add_title(title);

        for actor in title.primary_actors() {
            self.actors
                .row_mut(actor.id(), || StatRow::for_person(actor))
                .add_title(title);
        }

        for director in title.directors_or_creators() {
            self.directors
                .row_mut(director.id(), || StatRow::for_person(director))
                .add_title(title);
        }

        for genre in title.genres() {
            self.genres
                .row_mut(genre, || StatRow::named(genre.as_str()))
                .add_title(title);
        }
    }

    fn finish(self, titles: Vec<Title>, caps: &DisplayCaps) -> Statistics {
        debug!(
            titles = titles.len(),
            movies = self.counts.movies,
            episodes = self.counts.episodes,
            series = self.counts.series,
            actors = self.actors.len(),
            directors = self.directors.len(),
            genres = self.genres.len(),
            "aggregation pass complete"
        );

        Statistics {
            titles,
            global: self.global,
            actors: top_ranked(self.actors.into_rows(), caps.actors),
            directors: top_ranked(self.directors.into_rows(), caps.directors),
            genres: top_ranked(self.genres.into_rows(), caps.genres),
            counts: self.counts,
        }
    }
}

/// Aggregate `titles` using the default display caps.
pub fn compute_statistics(titles: Vec<Title>) -> Statistics {
    compute_statistics_with(titles, &DisplayCaps::default())
}

/// Aggregate `titles` in a single pass, in input order.
///
/// Every element is counted once; duplicates are not merged. Ranked lists
/// are cut to the sizes in `caps`.
pub fn compute_statistics_with(
    titles: Vec<Title>,
    caps: &DisplayCaps,
) -> Statistics {
    let mut pass = AggregationPass::default();
    for title in &titles {
        pass.add(title);
    }
    pass.finish(titles, caps)
}
