use crate::step::SortStep;

/// Visual category of one bar, highest precedence first
///
/// Exactly one category applies to each index; when several markers land on
/// the same index the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BarCategory {
    Overwrite,
    Pivot,
    Minimum,
    Key,
    Swapped,
    Comparing,
    LeftScan,
    RightScan,
    Sorted,
    InRange,
    Idle,
}

/// Category of a single index
pub fn category(step: &SortStep, index: usize) -> BarCategory {
    let is = |marker: Option<usize>| marker == Some(index);

    if is(step.overwrite_index) {
        BarCategory::Overwrite
    } else if is(step.pivot_index) {
        BarCategory::Pivot
    } else if is(step.min_index) {
        BarCategory::Minimum
    } else if is(step.key_index) {
        BarCategory::Key
    } else if step.swapped.is_some_and(|(a, b)| a == index || b == index) {
        BarCategory::Swapped
    } else if step.comparing.contains(&index) {
        BarCategory::Comparing
    } else if is(step.left_scan) {
        BarCategory::LeftScan
    } else if is(step.right_scan) {
        BarCategory::RightScan
    } else if step.sorted.contains(&index) {
        BarCategory::Sorted
    } else if step.in_active_range(index) {
        BarCategory::InRange
    } else {
        BarCategory::Idle
    }
}

/// Category of every index, in array order
pub fn project(step: &SortStep) -> Vec<BarCategory> {
    (0..step.array.len()).map(|i| category(step, i)).collect()
}
