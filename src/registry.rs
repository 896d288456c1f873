//! Algorithm registry
//!
//! Maps every [`Algorithm`] to its metadata, the views it can be shown in,
//! its pseudocode, and a producer constructor per view. The playback
//! controller only ever talks to algorithms through this table.

use crate::dataset::Dataset;
use crate::errors::{PlaybackError, RegistryError};
use crate::producer::{self, StepProducer};
use crate::step::{SearchKind, SearchStep, SearchWindow, SortStep, Step, TreeEventKind, TreeStep, ROOT_NODE};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sorting,
    Searching,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Sorting => write!(f, "Sorting"),
            Category::Searching => write!(f, "Searching"),
        }
    }
}

/// Static metadata shown alongside a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub complexity_time: &'static str,
    pub complexity_space: &'static str,
    pub description: &'static str,
}

/// Rendering family a producer feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visualizer {
    Bars,
    Blocks,
    Tree,
}

impl Visualizer {
    pub fn name(self) -> &'static str {
        match self {
            Visualizer::Bars => "bars",
            Visualizer::Blocks => "blocks",
            Visualizer::Tree => "tree",
        }
    }
}

impl fmt::Display for Visualizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Visualizer {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bars" | "array" => Ok(Visualizer::Bars),
            "blocks" | "search" => Ok(Visualizer::Blocks),
            "tree" => Ok(Visualizer::Tree),
            _ => Err(RegistryError::UnknownVisualizer(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
    ];

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::BubbleSort => AlgorithmInfo {
                id: "bubble-sort",
                title: "Bubble Sort",
                category: Category::Sorting,
                complexity_time: "O(n²)",
                complexity_space: "O(1)",
                description: "Walks the list comparing neighbours and swapping them when out of order. \
                              Each pass carries the largest remaining element to the end.",
            },
            Algorithm::SelectionSort => AlgorithmInfo {
                id: "selection-sort",
                title: "Selection Sort",
                category: Category::Sorting,
                complexity_time: "O(n²)",
                complexity_space: "O(1)",
                description: "Finds the smallest element of the unsorted region and swaps it to the \
                              front of that region. At most one swap per pass.",
            },
            Algorithm::InsertionSort => AlgorithmInfo {
                id: "insertion-sort",
                title: "Insertion Sort",
                category: Category::Sorting,
                complexity_time: "O(n²)",
                complexity_space: "O(1)",
                description: "Grows a sorted prefix one element at a time, shifting larger elements \
                              right to open a slot for the next key.",
            },
            Algorithm::MergeSort => AlgorithmInfo {
                id: "merge-sort",
                title: "Merge Sort",
                category: Category::Sorting,
                complexity_time: "O(n log n)",
                complexity_space: "O(n)",
                description: "Splits the array in half, sorts both halves recursively and merges \
                              the sorted halves. Stable with a guaranteed O(n log n).",
            },
            Algorithm::QuickSort => AlgorithmInfo {
                id: "quick-sort",
                title: "Quick Sort",
                category: Category::Sorting,
                complexity_time: "O(n log n) avg",
                complexity_space: "O(log n)",
                description: "Partitions the array around a pivot so smaller elements end up on its \
                              left, then sorts both sides recursively.",
            },
            Algorithm::LinearSearch => AlgorithmInfo {
                id: "linear-search",
                title: "Linear Search",
                category: Category::Searching,
                complexity_time: "O(n)",
                complexity_space: "O(1)",
                description: "Checks every element from left to right until the target is found or \
                              the list runs out. Needs no ordering.",
            },
            Algorithm::BinarySearch => AlgorithmInfo {
                id: "binary-search",
                title: "Binary Search",
                category: Category::Searching,
                complexity_time: "O(log n)",
                complexity_space: "O(1)",
                description: "Halves a sorted search window on every comparison with its middle \
                              element until the target is found or the window is empty.",
            },
        }
    }

    pub fn is_search(self) -> bool {
        self.info().category == Category::Searching
    }

    /// Views this algorithm can drive, default first
    pub fn visualizers(self) -> &'static [Visualizer] {
        match self {
            Algorithm::BubbleSort | Algorithm::SelectionSort | Algorithm::InsertionSort => {
                &[Visualizer::Bars]
            }
            Algorithm::MergeSort | Algorithm::QuickSort => &[Visualizer::Tree, Visualizer::Bars],
            Algorithm::LinearSearch | Algorithm::BinarySearch => &[Visualizer::Blocks],
        }
    }

    pub fn default_visualizer(self) -> Visualizer {
        self.visualizers()[0]
    }

    pub fn supports(self, visualizer: Visualizer) -> bool {
        self.visualizers().contains(&visualizer)
    }

    /// Next algorithm in registry order, wrapping around
    pub fn next(self) -> Algorithm {
        let at = Algorithm::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Algorithm::ALL[(at + 1) % Algorithm::ALL.len()]
    }

    fn check(self, visualizer: Visualizer) -> Result<(), PlaybackError> {
        if self.supports(visualizer) {
            Ok(())
        } else {
            Err(PlaybackError::UnsupportedView {
                algorithm: self.id(),
                visualizer: visualizer.name(),
            })
        }
    }

    fn target(self, dataset: &Dataset) -> Result<crate::step::Value, PlaybackError> {
        dataset
            .target
            .ok_or(PlaybackError::MissingTarget { algorithm: self.id() })
    }

    /// Pseudocode shown in the source pane
    pub fn source(self, visualizer: Visualizer) -> Result<&'static str, PlaybackError> {
        self.check(visualizer)?;
        Ok(match (self, visualizer) {
            (Algorithm::BubbleSort, _) => producer::bubble::SOURCE,
            (Algorithm::SelectionSort, _) => producer::selection::SOURCE,
            (Algorithm::InsertionSort, _) => producer::insertion::SOURCE,
            (Algorithm::MergeSort, Visualizer::Tree) => producer::merge_tree::SOURCE,
            (Algorithm::MergeSort, _) => producer::merge::SOURCE,
            (Algorithm::QuickSort, Visualizer::Tree) => producer::quick_tree::SOURCE,
            (Algorithm::QuickSort, _) => producer::quick::SOURCE,
            (Algorithm::LinearSearch, _) => producer::linear_search::SOURCE,
            (Algorithm::BinarySearch, _) => producer::binary_search::SOURCE,
        })
    }

    /// Fresh producer over a copy of the dataset
    pub fn producer(
        self,
        visualizer: Visualizer,
        dataset: &Dataset,
    ) -> Result<Box<dyn StepProducer>, PlaybackError> {
        self.check(visualizer)?;
        let values = &dataset.values;
        let producer: Box<dyn StepProducer> = match (self, visualizer) {
            (Algorithm::BubbleSort, _) => Box::new(producer::bubble::BubbleSort::new(values)),
            (Algorithm::SelectionSort, _) => {
                Box::new(producer::selection::SelectionSort::new(values))
            }
            (Algorithm::InsertionSort, _) => {
                Box::new(producer::insertion::InsertionSort::new(values))
            }
            (Algorithm::MergeSort, Visualizer::Tree) => {
                Box::new(producer::merge_tree::MergeSortTree::new(values))
            }
            (Algorithm::MergeSort, _) => Box::new(producer::merge::MergeSort::new(values)),
            (Algorithm::QuickSort, Visualizer::Tree) => {
                Box::new(producer::quick_tree::QuickSortTree::new(values))
            }
            (Algorithm::QuickSort, _) => Box::new(producer::quick::QuickSort::new(values)),
            (Algorithm::LinearSearch, _) => Box::new(producer::linear_search::LinearSearch::new(
                values,
                self.target(dataset)?,
            )),
            (Algorithm::BinarySearch, _) => Box::new(producer::binary_search::BinarySearch::new(
                values,
                self.target(dataset)?,
            )),
        };
        Ok(producer)
    }

    /// Placeholder shown after a load, before the first producer step
    pub fn ready_step(self, visualizer: Visualizer, dataset: &Dataset) -> Result<Step, PlaybackError> {
        self.check(visualizer)?;
        let description = format!("Ready: {}. Press space to play", self.info().title);
        let step = match visualizer {
            Visualizer::Bars => SortStep::new(&dataset.values, &BTreeSet::new(), description).into(),
            Visualizer::Blocks => {
                let target = self.target(dataset)?;
                let mut values = dataset.values.clone();
                if self == Algorithm::BinarySearch {
                    values.sort_unstable();
                }
                SearchStep::new(&values, target, SearchKind::Init, description)
                    .window(
                        values
                            .len()
                            .checked_sub(1)
                            .map(|end| SearchWindow { start: 0, end }),
                    )
                    .into()
            }
            Visualizer::Tree => {
                TreeStep::new(TreeEventKind::Init, ROOT_NODE, None, 0, &dataset.values, description).into()
            }
        };
        Ok(step)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().title)
    }
}

impl FromStr for Algorithm {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == wanted || a.id().trim_end_matches("-sort").trim_end_matches("-search") == wanted)
            .ok_or_else(|| RegistryError::UnknownAlgorithm(s.to_string()))
    }
}
