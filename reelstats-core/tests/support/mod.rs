//! Shared fixtures for core integration tests.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reelstats_model::{
    EpisodeInfo, Person, Title, TitleDetails, TitleId,
};

const GENRES: &[&str] = &[
    "Action", "Comedy", "Crime", "Drama", "Fantasy", "Horror", "Mystery",
    "Romance", "Sci-Fi", "Thriller", "War", "Western",
];

pub fn person(n: usize) -> Person {
    Person::new(format!("nm{n:07}"), format!("Person {n}"))
        .expect("fixture person is valid")
}

/// Deterministic pseudo-random catalogue of movies, episodes and series
/// with a fair share of absent ratings, runtimes and years.
pub fn catalogue(seed: u64, size: usize) -> Vec<Title> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..size)
        .map(|i| {
            let id = TitleId::new(format!("tt{i:07}")).expect("valid id");
            let year = rng
                .random_bool(0.8)
                .then(|| rng.random_range(1930..2025u16));

            let details = match rng.random_range(0..3) {
                0 => TitleDetails::Movie {
                    year_of_release: year,
                },
                1 => TitleDetails::Episode(EpisodeInfo {
                    series_id: None,
                    series_name: format!("Series {}", i % 7),
                    season_and_episode: "Season 1 | Episode 1".to_string(),
                    year_of_release: year,
                }),
                _ => TitleDetails::Series,
            };

            let rating = rng
                .random_bool(0.7)
                .then(|| f64::from(rng.random_range(10..=100u32)) / 10.0);
            let user_rating = rng
                .random_bool(0.3)
                .then(|| f64::from(rng.random_range(1..=10u32)));
            let runtime = rng
                .random_bool(0.75)
                .then(|| rng.random_range(20..200u32));

            let actor_count = rng.random_range(0..20);
            let actors: Vec<Person> = (0..actor_count)
                .map(|_| person(rng.random_range(0..120)))
                .collect();
            let directors: Vec<Person> = (0..rng.random_range(0..3))
                .map(|_| person(1_000 + rng.random_range(0..30)))
                .collect();
            let genres: Vec<&str> = (0..rng.random_range(0..4))
                .map(|_| GENRES[rng.random_range(0..GENRES.len())])
                .collect();

            Title::builder(id, format!("Title {i}"), details)
                .genres(genres)
                .rating(rating)
                .user_rating(user_rating)
                .runtime_minutes(runtime)
                .actors(actors)
                .directors(directors)
                .build()
                .expect("fixture title is valid")
        })
        .collect()
}
