//! Ranking of service results.
//!
//! The service assigns every problem a `score`; ranking is a stable sort
//! on that score, highest first. Equal scores keep the order the service
//! sent them in, which matters because the feed may contain duplicates.

use std::cmp::Ordering;

use crate::types::Problem;

/// Sort `problems` by score descending, in place and stably.
///
/// Scores that do not compare (NaN) are treated as equal to their
/// neighbours so they keep arrival order.
pub fn rank_by_score(problems: &mut [Problem]) {
    problems.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Returns `true` if no problem scores higher than the one before it.
pub fn is_ranked(problems: &[Problem]) -> bool {
    problems
        .windows(2)
        .all(|w| w[1].score.partial_cmp(&w[0].score) != Some(Ordering::Greater))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_problem(name: &str, score: f64) -> Problem {
        Problem {
            name: name.to_string(),
            url: format!("https://example.com/{name}"),
            score,
        }
    }

    #[test]
    fn sorts_by_score_descending() {
        let mut problems = vec![
            make_problem("c", 0.5),
            make_problem("a", 1.5),
            make_problem("b", 1.0),
        ];
        rank_by_score(&mut problems);
        let names: Vec<&str> = problems.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(is_ranked(&problems));
    }

    #[test]
    fn ties_keep_arrival_order() {
        let mut problems = vec![
            make_problem("first", 2.0),
            make_problem("low", 1.0),
            make_problem("second", 2.0),
            make_problem("third", 2.0),
        ];
        rank_by_score(&mut problems);
        let names: Vec<&str> = problems.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third", "low"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut problems = vec![make_problem("dup", 1.0), make_problem("dup", 1.0)];
        rank_by_score(&mut problems);
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn empty_and_single_are_ranked() {
        let mut empty: Vec<Problem> = vec![];
        rank_by_score(&mut empty);
        assert!(is_ranked(&empty));

        let single = vec![make_problem("only", 0.0)];
        assert!(is_ranked(&single));
    }

    #[test]
    fn unsorted_input_detected() {
        let problems = vec![make_problem("a", 1.0), make_problem("b", 2.0)];
        assert!(!is_ranked(&problems));
    }

    #[test]
    fn negative_scores_sort_below_zero() {
        let mut problems = vec![make_problem("neg", -1.0), make_problem("zero", 0.0)];
        rank_by_score(&mut problems);
        assert_eq!(problems[0].name, "zero");
    }
}
