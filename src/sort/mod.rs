//! Sort option registry
//!
//! Every sort option is a total order over records, selected at runtime by
//! its string identifier (`recent`, `alpha`, `size-desc`, ...). Sorting is
//! always stable, so records with equal keys keep their input order and the
//! visible window does not reshuffle between recomputations.

use crate::browse::models::ViewKind;
use crate::filters::ParseError;
use crate::records::Record;
use crate::search::normalize_str;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A selectable ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Most recently updated first
    #[default]
    Recent,
    /// Title, A to Z
    ///
    /// Not locale-aware collation: titles compare by their normalized form
    /// (accents stripped, lower-cased) in code point order, with the raw
    /// title breaking ties.
    Alpha,
    /// Largest first, unsized last
    SizeDesc,
    /// Smallest first, unsized last
    SizeAsc,
    /// Most gallery entries first
    EntriesDesc,
    /// Fewest gallery entries first
    EntriesAsc,
}

impl SortOption {
    pub const ALL: [Self; 6] = [
        Self::Recent,
        Self::Alpha,
        Self::SizeDesc,
        Self::SizeAsc,
        Self::EntriesDesc,
        Self::EntriesAsc,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Alpha => "alpha",
            Self::SizeDesc => "size-desc",
            Self::SizeAsc => "size-asc",
            Self::EntriesDesc => "entries-desc",
            Self::EntriesAsc => "entries-asc",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recent => "Recently updated",
            Self::Alpha => "Title (A-Z)",
            Self::SizeDesc => "Size (largest)",
            Self::SizeAsc => "Size (smallest)",
            Self::EntriesDesc => "Most entries",
            Self::EntriesAsc => "Fewest entries",
        }
    }

    /// Options offered by a list view
    #[must_use]
    pub fn for_view(view: ViewKind) -> &'static [Self] {
        match view {
            ViewKind::Models | ViewKind::Images => {
                &[Self::Recent, Self::Alpha, Self::SizeDesc, Self::SizeAsc]
            }
            ViewKind::Galleries => &[
                Self::Recent,
                Self::Alpha,
                Self::EntriesDesc,
                Self::EntriesAsc,
            ],
        }
    }

    /// Compare two records under this ordering
    #[must_use]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Recent => b.updated_at.cmp(&a.updated_at),
            Self::Alpha => collation_key(&a.title).cmp(&collation_key(&b.title)),
            Self::SizeDesc => size_or(b, 0).cmp(&size_or(a, 0)).then_with(|| unsized_last(a, b)),
            Self::SizeAsc => size_or(a, u64::MAX).cmp(&size_or(b, u64::MAX)),
            Self::EntriesDesc => b.entries().len().cmp(&a.entries().len()),
            Self::EntriesAsc => a.entries().len().cmp(&b.entries().len()),
        }
    }

    /// Stable in-place sort
    pub fn sort(self, records: &mut [&Record]) {
        self.sort_with(records, |r| *r);
    }

    /// Stable in-place sort of anything that resolves to a record
    ///
    /// Lets callers sort index lists without materializing references.
    pub fn sort_with<'r, T>(self, items: &mut [T], get: impl Fn(&T) -> &'r Record) {
        if self == Self::Alpha {
            // Avoid renormalizing titles on every comparison
            items.sort_by_cached_key(|item| collation_key(&get(item).title));
        } else {
            items.sort_by(|a, b| self.compare(get(a), get(b)));
        }
    }
}

impl FromStr for SortOption {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.id() == s)
            .ok_or_else(|| ParseError::UnknownSortOption(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Sort key for titles: accent- and case-insensitive, raw title as tiebreak
fn collation_key(title: &str) -> (String, String) {
    (normalize_str(title), title.to_string())
}

fn size_or(record: &Record, missing: u64) -> u64 {
    record.file_size().unwrap_or(missing)
}

/// Among records that compare equal by size, unsized ones go last
fn unsized_last(a: &Record, b: &Record) -> Ordering {
    a.file_size().is_none().cmp(&b.file_size().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, gallery, model};

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_parse_every_id() {
        for option in SortOption::ALL {
            assert_eq!(option.id().parse::<SortOption>().unwrap(), option);
            assert_eq!(option.to_string(), option.id());
        }
        assert_eq!(
            "popular".parse::<SortOption>(),
            Err(ParseError::UnknownSortOption("popular".to_string()))
        );
    }

    #[test]
    fn test_recent_descending() {
        let a = model("a", "a").updated(at(2024, 1, 1)).build();
        let b = model("b", "b").updated(at(2024, 6, 1)).build();
        let c = model("c", "c").updated(at(2023, 1, 1)).build();
        let mut list = vec![&a, &b, &c];
        SortOption::Recent.sort(&mut list);
        assert_eq!(ids(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_alpha_ignores_case_and_accents() {
        let a = model("a", "zebra").build();
        let b = model("b", "Émile").build();
        let c = model("c", "apple").build();
        let mut list = vec![&a, &b, &c];
        SortOption::Alpha.sort(&mut list);
        assert_eq!(ids(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_alpha_ties_break_on_raw_title() {
        let lower = model("lower", "abc").build();
        let upper = model("upper", "ABC").build();
        let accent = model("accent", "àbc").build();
        let mut list = vec![&lower, &accent, &upper];
        SortOption::Alpha.sort(&mut list);
        // Same normalized key; raw titles in code point order
        assert_eq!(ids(&list), vec!["upper", "lower", "accent"]);
    }

    #[test]
    fn test_unsized_last_in_both_directions() {
        let small = model("small", "s").size(10).build();
        let none = model("none", "n").build();
        let big = model("big", "b").size(1_000).build();
        let zero = model("zero", "z").size(0).build();

        let mut list = vec![&none, &small, &big, &zero];
        SortOption::SizeDesc.sort(&mut list);
        assert_eq!(ids(&list), vec!["big", "small", "zero", "none"]);

        let mut list = vec![&none, &small, &big, &zero];
        SortOption::SizeAsc.sort(&mut list);
        assert_eq!(ids(&list), vec!["zero", "small", "big", "none"]);
    }

    #[test]
    fn test_entries_order() {
        let two = gallery("two", "2").note_entry("e1", "a").note_entry("e2", "b").build();
        let none = gallery("none", "0").build();
        let one = gallery("one", "1").note_entry("e1", "a").build();

        let mut list = vec![&one, &two, &none];
        SortOption::EntriesDesc.sort(&mut list);
        assert_eq!(ids(&list), vec!["two", "one", "none"]);

        SortOption::EntriesAsc.sort(&mut list);
        assert_eq!(ids(&list), vec!["none", "one", "two"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let when = at(2024, 1, 1);
        let records: Vec<Record> = (0..10)
            .map(|i| model(&format!("r{i}"), "same").updated(when).build())
            .collect();

        for option in SortOption::ALL {
            let mut list: Vec<&Record> = records.iter().collect();
            option.sort(&mut list);
            assert_eq!(ids(&list), ids(&records.iter().collect::<Vec<_>>()));

            // Re-sorting an already sorted list changes nothing
            let once = ids(&list);
            option.sort(&mut list);
            assert_eq!(ids(&list), once);
        }
    }

    #[test]
    fn test_for_view_offers_relevant_options() {
        assert!(SortOption::for_view(ViewKind::Models).contains(&SortOption::SizeDesc));
        assert!(!SortOption::for_view(ViewKind::Models).contains(&SortOption::EntriesDesc));
        assert!(SortOption::for_view(ViewKind::Galleries).contains(&SortOption::EntriesAsc));
    }
}
