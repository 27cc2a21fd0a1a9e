//! Tests for the aggregation pass

#[cfg(test)]
mod tests {
    use crate::stats::{
        DisplayCaps, Statistics, compute_statistics, compute_statistics_with,
    };
    use reelstats_model::{
        EpisodeInfo, Person, Title, TitleDetails, TitleId,
    };

    fn person(id: &str, name: &str) -> Person {
        Person::new(id, name).unwrap()
    }

    fn movie(id: &str, rating: Option<f64>, actors: &[&Person]) -> Title {
        Title::builder(
            TitleId::new(id).unwrap(),
            format!("Movie {id}"),
            TitleDetails::Movie {
                year_of_release: Some(2000),
            },
        )
        .rating(rating)
        .actors(actors.iter().map(|p| (*p).clone()))
        .build()
        .unwrap()
    }

    fn episode(id: &str) -> Title {
        Title::builder(
            TitleId::new(id).unwrap(),
            "Pilot",
            TitleDetails::Episode(EpisodeInfo {
                series_id: None,
                series_name: "Show".to_string(),
                season_and_episode: "Season 1 | Episode 1".to_string(),
                year_of_release: Some(2010),
            }),
        )
        .build()
        .unwrap()
    }

    fn series(id: &str) -> Title {
        Title::builder(TitleId::new(id).unwrap(), "Show", TitleDetails::Series)
            .build()
            .unwrap()
    }

    #[test]
    fn missing_ratings_do_not_drag_averages_down() {
        let a = person("nm0000001", "Actor A");
        let b = person("nm0000002", "Actor B");

        let stats = compute_statistics(vec![
            movie("tt0000001", Some(8.0), &[&a]),
            movie("tt0000002", None, &[&a]),
            movie("tt0000003", Some(6.0), &[&b]),
        ]);

        let top = &stats.actors()[0];
        assert_eq!(top.name(), Some("Actor A"));
        assert_eq!(top.occurrences(), 2);
        assert_eq!(top.average_rating(), Some(8.0));

        assert_eq!(stats.global().occurrences(), 3);
        assert_eq!(stats.global().average_rating(), Some(7.0));
    }

    #[test]
    fn empty_input_is_a_valid_result() {
        let stats = compute_statistics(Vec::new());

        assert_eq!(stats.counts().movies, 0);
        assert_eq!(stats.counts().episodes, 0);
        assert_eq!(stats.counts().series, 0);
        assert!(stats.actors().is_empty());
        assert!(stats.directors().is_empty());
        assert!(stats.genres().is_empty());
        assert_eq!(stats.global().occurrences(), 0);
        assert_eq!(stats.global().average_rating(), None);
    }

    #[test]
    fn counts_each_variant() {
        let stats = Statistics::compute(vec![
            movie("tt0000001", None, &[]),
            episode("tt0000002"),
            series("tt0000003"),
            episode("tt0000004"),
        ]);

        let counts = stats.counts();
        assert_eq!(counts.movies, 1);
        assert_eq!(counts.episodes, 2);
        assert_eq!(counts.series, 1);
        assert_eq!(counts.total(), stats.titles().len());
    }

    #[test]
    fn duplicates_are_counted_every_time() {
        let a = person("nm0000001", "Actor A");
        let title = movie("tt0000001", Some(7.0), &[&a]);

        let stats = compute_statistics(vec![title.clone(), title]);

        assert_eq!(stats.counts().movies, 2);
        assert_eq!(stats.actors()[0].occurrences(), 2);
    }

    #[test]
    fn acting_and_directing_accumulate_separately() {
        let auteur = person("nm0000001", "Auteur");
        let title = Title::builder(
            TitleId::new("tt0000001").unwrap(),
            "Vanity Project",
            TitleDetails::Movie {
                year_of_release: None,
            },
        )
        .actor(auteur.clone())
        .director(auteur.clone())
        .build()
        .unwrap();

        let stats = compute_statistics(vec![title]);

        assert_eq!(stats.actors().len(), 1);
        assert_eq!(stats.directors().len(), 1);
        assert_eq!(stats.actors()[0].occurrences(), 1);
        assert_eq!(stats.directors()[0].occurrences(), 1);
    }

    #[test]
    fn people_group_by_id_not_name() {
        let first = person("nm0000001", "Jane Doe");
        let renamed = person("nm0000001", "Jane D.");

        let stats = compute_statistics(vec![
            movie("tt0000001", None, &[&first]),
            movie("tt0000002", None, &[&renamed]),
        ]);

        assert_eq!(stats.actors().len(), 1);
        // The row keeps the name it was first seen with.
        assert_eq!(stats.actors()[0].name(), Some("Jane Doe"));
        assert_eq!(stats.actors()[0].occurrences(), 2);
    }

    #[test]
    fn genre_rows_have_no_url() {
        let title = Title::builder(
            TitleId::new("tt0000001").unwrap(),
            "Heat",
            TitleDetails::Movie {
                year_of_release: Some(1995),
            },
        )
        .genres(["Crime", "Drama", "Thriller"])
        .build()
        .unwrap();

        let stats = compute_statistics(vec![title]);

        assert_eq!(stats.genres().len(), 3);
        assert!(stats.genres().iter().all(|row| row.url().is_none()));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let people: Vec<Person> = (0..60)
            .map(|i| person(&format!("nm{i:07}"), &format!("Actor {i}")))
            .collect();
        let titles = people
            .iter()
            .enumerate()
            .map(|(i, p)| movie(&format!("tt{i:07}"), None, &[p]))
            .collect();

        let stats = compute_statistics(titles);

        assert_eq!(stats.actors().len(), 50);
        assert_eq!(stats.actors()[0].name(), Some("Actor 0"));
        assert_eq!(stats.actors()[49].name(), Some("Actor 49"));
    }

    #[test]
    fn custom_caps_are_honoured() {
        let a = person("nm0000001", "Actor A");
        let b = person("nm0000002", "Actor B");
        let caps = DisplayCaps {
            actors: 1,
            ..DisplayCaps::default()
        };

        let stats = compute_statistics_with(
            vec![
                movie("tt0000001", None, &[&a, &b]),
                movie("tt0000002", None, &[&b]),
            ],
            &caps,
        );

        assert_eq!(stats.actors().len(), 1);
        assert_eq!(stats.actors()[0].name(), Some("Actor B"));
    }

    #[test]
    fn report_mirrors_rows() {
        let a = person("nm0000001", "Actor A");
        let stats =
            compute_statistics(vec![movie("tt0000001", Some(9.0), &[&a])]);
        let report = stats.report();

        assert_eq!(report.analyzed_titles, 1);
        assert_eq!(report.counts.movies, 1);
        assert_eq!(report.actors.len(), 1);
        assert_eq!(report.actors[0].average_rating, Some(9.0));
        assert_eq!(report.global.average_year_of_release, Some(2000));
    }

    #[test]
    fn statistics_can_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Statistics>();

        let stats = compute_statistics(vec![series("tt0000001")]);
        let handle = std::thread::spawn(move || stats.counts().series);
        assert_eq!(handle.join().unwrap(), 1);
    }
}
