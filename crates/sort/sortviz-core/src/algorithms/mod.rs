//! Algorithm implementations and the tagged `Algorithm` selector.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod quick;
pub mod selection;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::sorter::SortAlgorithm;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// Every algorithm shipped with the crate, selectable by name.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Bubble,
    Heap,
    Insertion,
    Selection,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Heap,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Heap => "heap",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
        }
    }

    /// Boxed instance for dynamic dispatch inside a `Sorter`.
    pub fn build<T: PartialOrd>(self) -> Box<dyn SortAlgorithm<T> + Send> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort),
            Algorithm::Heap => Box::new(HeapSort),
            Algorithm::Insertion => Box::new(InsertionSort),
            Algorithm::Selection => Box::new(SelectionSort),
            Algorithm::Quick => Box::new(QuickSort),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `heap`, `heap-sort`, `heap_sort`, `HeapSort` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.strip_suffix("sort").unwrap_or(&key);
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| SortError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("HeapSort".parse::<Algorithm>().unwrap(), Algorithm::Heap);
        assert_eq!("quick-sort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!(
            "selection_sort".parse::<Algorithm>().unwrap(),
            Algorithm::Selection
        );
        let err = "bogo".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err,
            SortError::UnknownAlgorithm {
                name: "bogo".into()
            }
        );
    }

    #[test]
    fn built_instances_carry_their_name() {
        for kind in Algorithm::ALL {
            let algo = kind.build::<i32>();
            assert_eq!(algo.name(), kind.name());
        }
    }

    #[test]
    fn serde_uses_kebab_names() {
        let json = serde_json::to_string(&Algorithm::Insertion).unwrap();
        assert_eq!(json, "\"insertion\"");
        let back: Algorithm = serde_json::from_str("\"heap\"").unwrap();
        assert_eq!(back, Algorithm::Heap);
    }
}
