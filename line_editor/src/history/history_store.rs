// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

/// Default number of lines kept in [`History`].
pub const HISTORY_SIZE_MAX: usize = 1_024;

/// Which lines [`History::add_line`] refuses to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    pub ignore_empty: bool,
    /// Skip a line that is identical to the newest entry.
    pub ignore_consecutive_duplicates: bool,
}

impl HistoryPolicy {
    /// Store every committed line.
    pub const KEEP_ALL: Self = Self {
        ignore_empty: false,
        ignore_consecutive_duplicates: false,
    };
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            ignore_empty: true,
            ignore_consecutive_duplicates: true,
        }
    }
}

/// Bounded list of past lines, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    pub entries: VecDeque<String>,
    pub max_size: usize,
    pub policy: HistoryPolicy,
}

impl Default for History {
    fn default() -> Self { Self::new(HISTORY_SIZE_MAX, HistoryPolicy::default()) }
}

impl History {
    #[must_use]
    pub fn new(max_size: usize, policy: HistoryPolicy) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size.min(HISTORY_SIZE_MAX)),
            max_size,
            policy,
        }
    }

    /// Append `line` as the newest entry. Once there are more than `max_size` entries,
    /// the oldest one is dropped.
    ///
    /// Returns whether the line was stored. It isn't when [`Self::policy`] filters it
    /// out, or when `max_size` is 0.
    pub fn add_line(&mut self, line: &str) -> bool {
        if self.max_size == 0 {
            return false;
        }
        // Don't add entry if line was empty, or same as the last entry.
        if self.policy.ignore_empty && line.is_empty() {
            return false;
        }
        if self.policy.ignore_consecutive_duplicates
            && self.entries.back().is_some_and(|last| last == line)
        {
            return false;
        }

        self.entries.push_back(line.to_owned());

        // Check if already have enough entries.
        while self.entries.len() > self.max_size {
            // Remove oldest entry.
            self.entries.pop_front();
        }

        true
    }

    /// 0 is the oldest entry.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn entries(history: &History) -> Vec<&str> { history.iter().collect() }

    #[test]
    fn test_add_line() {
        let mut history = History::new(2, HistoryPolicy::default());
        assert!(history.add_line("test1"));
        assert_eq2!(entries(&history), vec!["test1"]);

        assert!(!history.add_line("test1"));
        assert!(!history.add_line(""));
        assert_eq2!(history.len(), 1);

        assert!(history.add_line("test2"));
        assert!(history.add_line("test3"));
        assert_eq2!(entries(&history), vec!["test2", "test3"]);
    }

    #[test_case(1, 5 ; "one slot")]
    #[test_case(3, 1 ; "one over")]
    #[test_case(3, 7 ; "many over")]
    fn test_capacity_evicts_oldest(capacity: usize, overflow: usize) {
        let mut history = History::new(capacity, HistoryPolicy::default());
        let total = capacity + overflow;
        for index in 0..total {
            history.add_line(&format!("line {index}"));
        }

        assert_eq2!(history.len(), capacity);
        assert_eq2!(history.get(0), Some(format!("line {overflow}").as_str()));
        let newest = format!("line {}", total - 1);
        assert_eq2!(history.get(capacity - 1), Some(newest.as_str()));
        assert!(history.iter().all(|line| {
            let index: usize = line["line ".len()..].parse().unwrap();
            index >= overflow
        }));
    }

    #[test]
    fn test_keep_all_policy() {
        let mut history = History::new(10, HistoryPolicy::KEEP_ALL);
        assert!(history.add_line(""));
        assert!(history.add_line("same"));
        assert!(history.add_line("same"));
        assert_eq2!(entries(&history), vec!["", "same", "same"]);
    }

    #[test]
    fn test_duplicates_only_skipped_when_consecutive() {
        let mut history = History::default();
        history.add_line("a");
        history.add_line("b");
        assert!(history.add_line("a"));
        assert_eq2!(entries(&history), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut history = History::new(0, HistoryPolicy::default());
        assert!(!history.add_line("anything"));
        assert!(history.is_empty());
    }
}
