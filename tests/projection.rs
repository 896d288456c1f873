// Integration tests: producer runs seen through the render projections

use algoviz::dataset::Dataset;
use algoviz::producer::drain;
use algoviz::projection::bars::{self, BarCategory};
use algoviz::projection::blocks::{self, BlockCategory};
use algoviz::projection::tree::{NodeStatus, TreeView};
use algoviz::registry::{Algorithm, Visualizer};
use algoviz::step::{SearchKind, Step, TreeEventKind, TreeStep, ROOT_NODE};

fn run(algorithm: Algorithm, visualizer: Visualizer, dataset: &Dataset) -> Vec<Step> {
    let mut producer = algorithm.producer(visualizer, dataset).unwrap();
    drain(producer.as_mut()).unwrap()
}

#[test]
fn test_every_bar_gets_one_category() {
    let dataset = Dataset::new(vec![9, 4, 7, 1, 8, 2, 6]);
    for algorithm in [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ] {
        let steps = run(algorithm, Visualizer::Bars, &dataset);
        for step in &steps {
            let step = step.as_sort().unwrap();
            assert_eq!(bars::project(step).len(), step.array.len());
        }

        let last = steps.last().and_then(Step::as_sort).unwrap();
        assert!(
            bars::project(last).iter().all(|&c| c == BarCategory::Sorted),
            "{} ends with unsorted bars",
            algorithm
        );
    }
}

#[test]
fn test_quick_sort_shows_pivot_and_scanners() {
    let steps = run(Algorithm::QuickSort, Visualizer::Bars, &Dataset::new(vec![3, 9, 1, 5]));
    let categories: Vec<BarCategory> = steps
        .iter()
        .filter_map(Step::as_sort)
        .flat_map(bars::project)
        .collect();

    assert!(categories.contains(&BarCategory::Pivot));
    assert!(categories.contains(&BarCategory::LeftScan));
    assert!(categories.contains(&BarCategory::Comparing));
    assert!(categories.contains(&BarCategory::InRange));
}

#[test]
fn test_merge_sort_flashes_overwrites() {
    let steps = run(Algorithm::MergeSort, Visualizer::Bars, &Dataset::new(vec![4, 3, 2, 1]));
    assert!(steps
        .iter()
        .filter_map(Step::as_sort)
        .any(|s| bars::project(s).contains(&BarCategory::Overwrite)));
}

#[test]
fn test_binary_search_dims_discarded_half() {
    let dataset = Dataset::new(vec![1, 3, 5, 7, 9, 11, 13]).with_target(11);
    let steps = run(Algorithm::BinarySearch, Visualizer::Blocks, &dataset);

    let narrowed = steps
        .iter()
        .filter_map(Step::as_search)
        .find(|s| s.kind == SearchKind::RangeNarrowed)
        .unwrap();
    let categories = blocks::project(narrowed);
    assert_eq!(categories[0], BlockCategory::OutsideWindow);
    assert_eq!(categories[6], BlockCategory::InsideWindow);

    let last = steps.last().and_then(Step::as_search).unwrap();
    assert_eq!(blocks::project(last)[5], BlockCategory::Found);
}

#[test]
fn test_linear_search_scans_left_to_right() {
    let dataset = Dataset::new(vec![4, 8, 15, 16]).with_target(16);
    let scanned: Vec<usize> = run(Algorithm::LinearSearch, Visualizer::Blocks, &dataset)
        .iter()
        .filter_map(Step::as_search)
        .filter_map(|s| {
            blocks::project(s)
                .iter()
                .position(|&c| c == BlockCategory::Scanning)
        })
        .collect();
    assert_eq!(scanned, vec![0, 1, 2, 3]);
}

#[test]
fn test_tree_grows_then_collapses() {
    let dataset = Dataset::new(vec![8, 3, 5, 1, 9, 2, 7, 4]);
    let steps: Vec<TreeStep> = run(Algorithm::MergeSort, Visualizer::Tree, &dataset)
        .into_iter()
        .filter_map(|s| s.as_tree().cloned())
        .collect();

    let mut view = TreeView::new();
    let mut deepest = 0;
    for step in &steps {
        view.apply(step);
        deepest = deepest.max(view.depth());
        assert_eq!(view.focus(), Some(step.node_id.as_str()));
        if step.kind == TreeEventKind::Split {
            let parent = view.node(&step.node_id).unwrap();
            assert_eq!(parent.status, NodeStatus::Split);
            assert!(view.node(&format!("{}-L", step.node_id)).is_some());
            assert!(view.node(&format!("{}-R", step.node_id)).is_some());
        }
    }

    assert_eq!(deepest, 4);
    assert_eq!(view.len(), 1);
    let root = view.root().unwrap();
    assert_eq!(root.id, ROOT_NODE);
    assert_eq!(root.status, NodeStatus::Sorted);
    assert_eq!(root.values, vec![1, 2, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn test_quick_tree_marks_pivot_node() {
    let steps: Vec<TreeStep> = run(Algorithm::QuickSort, Visualizer::Tree, &Dataset::new(vec![5, 2, 8, 4]))
        .into_iter()
        .filter_map(|s| s.as_tree().cloned())
        .collect();
    let pivot_at = steps
        .iter()
        .position(|s| s.kind == TreeEventKind::Pivot)
        .unwrap();

    let view = TreeView::replay(&steps[..=pivot_at]);
    let root = view.root().unwrap();
    assert_eq!(root.status, NodeStatus::Pivot);
    assert_eq!(root.pivot_index, Some(3));

    let done = TreeView::replay(&steps);
    assert_eq!(done.root().unwrap().values, vec![2, 4, 5, 8]);
}
