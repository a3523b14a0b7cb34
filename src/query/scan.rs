//! Scanning loops shared by `first` and `last`.

use crate::error::QueryError;

/// Counts visited elements against an optional limit.
#[derive(Debug)]
pub(crate) struct Budget {
    limit: Option<usize>,
    visited: usize,
}

impl Budget {
    pub(crate) const fn new(limit: Option<usize>) -> Self {
        Self { limit, visited: 0 }
    }

    /// Records one visit; fails once `limit` visits have already happened.
    ///
    /// Without a limit nothing is counted.
    #[inline]
    fn visit(&mut self) -> Result<(), QueryError> {
        let Some(limit) = self.limit else {
            return Ok(());
        };
        if self.visited >= limit {
            tracing::debug!(limit, "scan limit reached");
            return Err(QueryError::ScanLimitExceeded { limit });
        }
        self.visited += 1;
        Ok(())
    }
}

/// Returns the first element matching `predicate`, stopping at the match.
///
/// Also serves the backward scan of `last` when handed a reversed iterator.
pub(crate) fn scan<I, P>(
    elements: I,
    predicate: &mut P,
    budget: &mut Budget,
) -> Result<Option<I::Item>, QueryError>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    for element in elements {
        budget.visit()?;
        if predicate(&element) {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

/// Visits every element and returns the latest match.
pub(crate) fn sweep<I, P>(
    elements: I,
    predicate: &mut P,
    budget: &mut Budget,
) -> Result<Option<I::Item>, QueryError>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut latest = None;
    for element in elements {
        budget.visit()?;
        if predicate(&element) {
            latest = Some(element);
        }
    }
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_scan_stops_at_first_match() {
        let mut visited = Vec::new();
        let mut predicate = |element: &i32| {
            visited.push(*element);
            *element % 2 == 0
        };
        let result = scan([1, 3, 4, 6].into_iter(), &mut predicate, &mut Budget::new(None));
        assert_eq!(result, Ok(Some(4)));
        assert_eq!(visited, vec![1, 3, 4]);
    }

    #[rstest]
    fn test_sweep_keeps_latest_match() {
        let result = sweep(
            [1, 4, 3, 6, 5].into_iter(),
            &mut |element: &i32| *element % 2 == 0,
            &mut Budget::new(None),
        );
        assert_eq!(result, Ok(Some(6)));
    }

    #[rstest]
    fn test_sweep_without_match_is_empty() {
        let result = sweep(
            [1, 3].into_iter(),
            &mut |element: &i32| *element > 10,
            &mut Budget::new(None),
        );
        assert_eq!(result, Ok(None));
    }

    #[rstest]
    #[case(3, Ok(Some(3)))]
    #[case(2, Err(QueryError::ScanLimitExceeded { limit: 2 }))]
    #[case(0, Err(QueryError::ScanLimitExceeded { limit: 0 }))]
    fn test_scan_respects_limit(
        #[case] limit: usize,
        #[case] expected: Result<Option<i32>, QueryError>,
    ) {
        let result = scan(
            [1, 2, 3].into_iter(),
            &mut |element: &i32| *element == 3,
            &mut Budget::new(Some(limit)),
        );
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_unlimited_budget_does_not_count() {
        let mut budget = Budget {
            limit: None,
            visited: usize::MAX,
        };
        let result = scan([1, 2].into_iter(), &mut |element: &i32| *element == 2, &mut budget);
        assert_eq!(result, Ok(Some(2)));
        assert_eq!(budget.visited, usize::MAX);
    }

    #[rstest]
    fn test_limited_budget_counts_visits() {
        let mut budget = Budget::new(Some(10));
        let result = sweep([1, 2, 3].into_iter(), &mut |_: &i32| true, &mut budget);
        assert_eq!(result, Ok(Some(3)));
        assert_eq!(budget.visited, 3);
    }

    #[rstest]
    fn test_limit_not_hit_when_exhausted_within_it() {
        let result = sweep(
            [1, 2].into_iter(),
            &mut |_: &i32| false,
            &mut Budget::new(Some(2)),
        );
        assert_eq!(result, Ok(None));
    }
}
