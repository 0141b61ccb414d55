//! Grouping of wins by producer and consecutive-year intervals

use std::collections::HashMap;

use super::model::{ProducerInterval, WinningMovie};

/// Winning years per producer, in first-seen producer order
///
/// Years are kept exactly as recorded, duplicates included.
#[derive(Debug, Default, Clone)]
pub struct WinsByProducer {
    entries: Vec<(String, Vec<i32>)>,
    index: HashMap<String, usize>,
}

impl WinsByProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group every movie's year under each of its producers
    pub fn from_movies<'a>(movies: impl IntoIterator<Item = &'a WinningMovie>) -> Self {
        let mut wins = Self::new();
        for movie in movies {
            for producer in &movie.producers {
                wins.record(producer, movie.year);
            }
        }
        wins
    }

    /// Register one win for `producer`
    pub fn record(&mut self, producer: &str, year: i32) {
        match self.index.get(producer) {
            Some(&slot) => self.entries[slot].1.push(year),
            None => {
                self.index.insert(producer.to_string(), self.entries.len());
                self.entries.push((producer.to_string(), vec![year]));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i32])> {
        self.entries
            .iter()
            .map(|(producer, years)| (producer.as_str(), years.as_slice()))
    }
}

/// One interval per adjacent pair of each producer's sorted years
///
/// Producers with fewer than two wins contribute nothing. Output follows
/// producer order, then year order within a producer.
pub fn calculate_intervals(wins: &WinsByProducer) -> Vec<ProducerInterval> {
    let mut intervals = Vec::new();

    for (producer, years) in wins.iter() {
        if years.len() < 2 {
            continue;
        }

        let mut sorted = years.to_vec();
        sorted.sort_unstable();

        intervals.extend(
            sorted
                .windows(2)
                .map(|pair| ProducerInterval::new(producer, pair[0], pair[1])),
        );
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wins(data: &[(&str, &[i32])]) -> WinsByProducer {
        let mut wins = WinsByProducer::new();
        for (producer, years) in data {
            for &year in years.iter() {
                wins.record(producer, year);
            }
        }
        wins
    }

    #[test]
    fn test_adjacent_pairs_after_sort() {
        let wins = wins(&[("P1", &[2015, 2000, 2001]), ("P2", &[1990, 2000])]);

        let intervals = calculate_intervals(&wins);
        assert_eq!(
            intervals,
            vec![
                ProducerInterval::new("P1", 2000, 2001),
                ProducerInterval::new("P1", 2001, 2015),
                ProducerInterval::new("P2", 1990, 2000),
            ]
        );
        assert_eq!(intervals[1].interval, 14);
    }

    #[test]
    fn test_single_win_contributes_nothing() {
        let wins = wins(&[("Solo", &[1999]), ("Pair", &[2001, 2003])]);

        let intervals = calculate_intervals(&wins);
        assert_eq!(intervals, vec![ProducerInterval::new("Pair", 2001, 2003)]);
    }

    #[test]
    fn test_duplicate_years_give_zero_interval() {
        let wins = wins(&[("Twice", &[2005, 2005, 2010])]);

        let intervals = calculate_intervals(&wins);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].interval, 0);
        assert_eq!(intervals[1].interval, 5);
    }

    #[test]
    fn test_extreme_years_do_not_overflow() {
        let wins = wins(&[("Edge", &[i32::MAX, i32::MIN])]);

        let intervals = calculate_intervals(&wins);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].previous_win, i32::MIN);
        assert_eq!(intervals[0].following_win, i32::MAX);
        assert_eq!(intervals[0].interval, i64::from(i32::MAX) - i64::from(i32::MIN));
    }

    #[test]
    fn test_empty_grouping() {
        assert!(calculate_intervals(&WinsByProducer::new()).is_empty());
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let movies = vec![
            WinningMovie {
                year: 1990,
                title: "A".to_string(),
                producers: vec!["Zed".to_string(), "Amy".to_string()],
            },
            WinningMovie {
                year: 1995,
                title: "B".to_string(),
                producers: vec!["Amy".to_string()],
            },
            WinningMovie {
                year: 1993,
                title: "C".to_string(),
                producers: vec![],
            },
        ];

        let wins = WinsByProducer::from_movies(&movies);
        let grouped: Vec<(&str, &[i32])> = wins.iter().collect();
        assert_eq!(grouped, vec![("Zed", &[1990][..]), ("Amy", &[1990, 1995][..])]);
        assert_eq!(wins.len(), 2);
    }

    #[test]
    fn test_every_interval_matches_its_years() {
        let wins = wins(&[("A", &[1980, 2019, 1984, 1999]), ("B", &[2002, 2002, 1986])]);

        for interval in calculate_intervals(&wins) {
            let expected = i64::from(interval.following_win) - i64::from(interval.previous_win);
            assert_eq!(interval.interval, expected);
            assert!(interval.interval >= 0);
        }
    }
}
