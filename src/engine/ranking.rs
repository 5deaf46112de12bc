//! Participant orderings for one game column.
//!
//! Both functions return participant indices. Sorting is stable and starts
//! from the original participant order, so ties keep that order.

use crate::Tally;
use std::cmp::Reverse;

/// Most completions first; participants without completions are left out.
pub(crate) fn by_completions(column: &[&Tally]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..column.len()).collect();
    order.sort_by_key(|&p| Reverse(column[p].completed()));
    order.retain(|&p| column[p].completed() > 0);
    order
}

/// Lowest average first. An average of exactly 0 means "no data", not a
/// perfect score: it sorts last and is left out.
pub(crate) fn by_average(column: &[&Tally]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..column.len()).collect();
    order.sort_by(|&a, &b| average_key(column[a]).total_cmp(&average_key(column[b])));
    order.retain(|&p| column[p].average_guesses() != 0.0);
    order
}

fn average_key(tally: &Tally) -> f64 {
    let avg = tally.average_guesses();
    if avg == 0.0 { f64::INFINITY } else { avg }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResultRecord;

    fn tally(results: &[ResultRecord]) -> Tally {
        let mut tally = Tally::new();
        for &r in results {
            tally.record(r);
        }
        tally
    }

    #[test]
    fn completions_descending_with_stable_ties() {
        let a = tally(&[ResultRecord::solved(1, 3)]);
        let b = tally(&[ResultRecord::solved(1, 3), ResultRecord::solved(2, 3)]);
        let c = tally(&[ResultRecord::solved(5, 1)]);
        let none = tally(&[ResultRecord::failed(1)]);

        assert_eq!(by_completions(&[&a, &none, &b, &c]), vec![2, 0, 3]);
    }

    #[test]
    fn averages_ascending_without_no_data() {
        let slow = tally(&[ResultRecord::solved(1, 6)]);
        let fast = tally(&[ResultRecord::solved(1, 2), ResultRecord::solved(2, 3)]);
        let failed = tally(&[ResultRecord::failed(1)]);
        let empty = Tally::new();

        assert_eq!(by_average(&[&failed, &slow, &empty, &fast]), vec![3, 1]);
    }

    #[test]
    fn equal_averages_keep_participant_order() {
        let x = tally(&[ResultRecord::solved(1, 4)]);
        let y = tally(&[ResultRecord::solved(2, 2), ResultRecord::solved(3, 6)]);
        assert_eq!(by_average(&[&y, &x]), vec![0, 1]);
        assert_eq!(by_average(&[&x, &y]), vec![0, 1]);
    }

    #[test]
    fn empty_column() {
        assert!(by_completions(&[]).is_empty());
        assert!(by_average(&[]).is_empty());
    }
}
