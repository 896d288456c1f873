use crate::step::{SearchKind, SearchStep};

/// Visual category of one search block, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockCategory {
    Found,
    Scanning,
    Midpoint,
    /// Eliminated by binary search, drawn dimmed
    OutsideWindow,
    InsideWindow,
    NotFound,
    Default,
}

pub fn category(step: &SearchStep, index: usize) -> BlockCategory {
    let here = step.index == Some(index);

    match step.kind {
        SearchKind::Found if here => return BlockCategory::Found,
        SearchKind::Scan if here => return BlockCategory::Scanning,
        SearchKind::Midpoint if here => return BlockCategory::Midpoint,
        _ => {}
    }

    if matches!(step.kind, SearchKind::Midpoint | SearchKind::RangeNarrowed) {
        return match step.window {
            Some(window) if window.contains(index) => BlockCategory::InsideWindow,
            // an empty window has eliminated everything
            _ => BlockCategory::OutsideWindow,
        };
    }

    if step.kind == SearchKind::NotFound {
        BlockCategory::NotFound
    } else {
        BlockCategory::Default
    }
}

pub fn project(step: &SearchStep) -> Vec<BlockCategory> {
    (0..step.array.len()).map(|i| category(step, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::SearchWindow;

    fn step(kind: SearchKind) -> SearchStep {
        SearchStep::new(&[1, 2, 3, 4, 5], 4, kind, "")
    }

    #[test]
    fn test_midpoint_dims_outside_window() {
        let s = step(SearchKind::Midpoint)
            .at(3)
            .window(Some(SearchWindow { start: 2, end: 4 }));
        assert_eq!(
            project(&s),
            vec![
                BlockCategory::OutsideWindow,
                BlockCategory::OutsideWindow,
                BlockCategory::InsideWindow,
                BlockCategory::Midpoint,
                BlockCategory::InsideWindow,
            ]
        );
    }

    #[test]
    fn test_found_highlights_only_its_index() {
        let s = step(SearchKind::Found).at(3);
        let categories = project(&s);
        assert_eq!(categories[3], BlockCategory::Found);
        assert!(categories[..3].iter().all(|&c| c == BlockCategory::Default));
    }

    #[test]
    fn test_scan_in_linear_search() {
        let s = step(SearchKind::Scan).at(0);
        assert_eq!(category(&s, 0), BlockCategory::Scanning);
        assert_eq!(category(&s, 1), BlockCategory::Default);
    }

    #[test]
    fn test_not_found_colours_every_block() {
        let categories = project(&step(SearchKind::NotFound));
        assert!(categories.iter().all(|&c| c == BlockCategory::NotFound));
    }

    #[test]
    fn test_emptied_window_dims_everything() {
        let s = step(SearchKind::RangeNarrowed).at(0).window(None);
        assert!(project(&s).iter().all(|&c| c == BlockCategory::OutsideWindow));
    }

    #[test]
    fn test_init_is_default() {
        let s = step(SearchKind::Init).window(Some(SearchWindow { start: 0, end: 4 }));
        assert!(project(&s).iter().all(|&c| c == BlockCategory::Default));
    }
}
