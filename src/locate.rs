// Locating the word next to a point

use crate::region::Region;
use crate::view::{PointClass, View};

/// Which word to prefer when a point is not inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Nearest,
    After,
    Before,
}

fn word_from_boundary(view: &dyn View, pt: usize) -> Option<Region> {
    let class = view.classify(pt);
    if class.is_word_start() {
        Some(Region::new(pt, view.find_by_class(pt, true, PointClass::WORD_END)))
    } else if class.is_word_end() {
        Some(Region::new(view.find_by_class(pt, false, PointClass::WORD_START), pt))
    } else {
        None
    }
}

/// Region of the word at or near `pt`, looking to `side` when `pt` sits
/// between words. With `in_line` the word must be on the row of `pt`.
pub fn word_region_near(view: &dyn View, pt: usize, in_line: bool, side: Side) -> Option<Region> {
    let class = view.classify(pt);
    if class.is_word_start() && side != Side::Before {
        return Some(Region::new(pt, view.find_by_class(pt, true, PointClass::WORD_END)));
    }
    if class.is_word_end() && side != Side::After {
        return Some(Region::new(view.find_by_class(pt, false, PointClass::WORD_START), pt));
    }

    let expanded = view.expand_by_class(pt, PointClass::WORD_BOUNDARY);
    if !class.is_boundary() && view.classify(expanded.begin()).is_word_start() {
        // Inside a word already
        return Some(expanded);
    }

    let mut new_pt = match side {
        Side::After => expanded.end(),
        Side::Before => expanded.begin(),
        Side::Nearest => {
            let before = view.classify(expanded.begin()).is_word_end();
            let after = view.classify(expanded.end()).is_word_start();
            match (before, after) {
                (true, true) if pt - expanded.begin() <= expanded.end() - pt => expanded.begin(),
                (true, true) => expanded.end(),
                (true, false) => expanded.begin(),
                (false, true) => expanded.end(),
                (false, false) => return None,
            }
        }
    };

    if in_line {
        let start_line = view.rowcol(pt).0;
        let new_line = view.rowcol(new_pt).0;
        if new_line != start_line {
            if side != Side::Nearest {
                return None;
            }
            new_pt = if new_line < start_line {
                view.find_by_class(pt, true, PointClass::WORD_START)
            } else {
                view.find_by_class(pt, false, PointClass::WORD_END)
            };
            if view.rowcol(new_pt).0 != start_line {
                log::debug!("No word on line {} near {}.", start_line + 1, pt);
                return None;
            }
        }
    }

    word_from_boundary(view, new_pt)
}

pub fn closest_word_region(view: &dyn View, pt: usize, in_line: bool) -> Option<Region> {
    word_region_near(view, pt, in_line, Side::Nearest)
}

pub fn next_word_region(view: &dyn View, pt: usize, in_line: bool) -> Option<Region> {
    word_region_near(view, pt, in_line, Side::After)
}

pub fn previous_word_region(view: &dyn View, pt: usize, in_line: bool) -> Option<Region> {
    word_region_near(view, pt, in_line, Side::Before)
}

/// Next (or previous) word from `pt` anywhere in the buffer, retrying from
/// the opposite end of the buffer when `wrap` is set.
pub fn adjacent_word_region(view: &dyn View, pt: usize, forward: bool, wrap: bool) -> Option<Region> {
    let locate = if forward {
        next_word_region
    } else {
        previous_word_region
    };

    if let Some(region) = locate(view, pt, false) {
        return Some(region);
    }
    if !wrap {
        return None;
    }

    let restart = if forward { 0 } else { view.size() };
    if restart == pt {
        return None;
    }
    log::debug!("No word {} {} - wrapping to {}.", if forward { "after" } else { "before" }, pt, restart);
    locate(view, restart, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer_view::BufferView;

    #[test]
    fn test_word_under_point() {
        let view = BufferView::from_text("flagpole banana");
        assert_eq!(closest_word_region(&view, 3, false), Some(Region::new(0, 8)));
        assert_eq!(next_word_region(&view, 3, false), Some(Region::new(0, 8)));
        assert_eq!(previous_word_region(&view, 11, false), Some(Region::new(9, 15)));
    }

    #[test]
    fn test_boundaries_pick_side() {
        let view = BufferView::from_text("foo bar");
        assert_eq!(closest_word_region(&view, 3, false), Some(Region::new(0, 3)));
        assert_eq!(closest_word_region(&view, 4, false), Some(Region::new(4, 7)));
        assert_eq!(next_word_region(&view, 3, false), Some(Region::new(4, 7)));
        assert_eq!(next_word_region(&view, 4, false), Some(Region::new(4, 7)));
        assert_eq!(previous_word_region(&view, 4, false), Some(Region::new(0, 3)));
        assert_eq!(previous_word_region(&view, 3, false), Some(Region::new(0, 3)));
    }

    #[test]
    fn test_closest_between_words() {
        let view = BufferView::from_text("foo      bar");
        assert_eq!(closest_word_region(&view, 4, false), Some(Region::new(0, 3)));
        assert_eq!(closest_word_region(&view, 8, false), Some(Region::new(9, 12)));
        // Ties go to the word before
        assert_eq!(closest_word_region(&view, 6, false), Some(Region::new(0, 3)));
    }

    #[test]
    fn test_closest_with_one_side_missing() {
        let view = BufferView::from_text("   foo   ");
        assert_eq!(closest_word_region(&view, 1, false), Some(Region::new(3, 6)));
        assert_eq!(closest_word_region(&view, 8, false), Some(Region::new(3, 6)));
    }

    #[test]
    fn test_no_words() {
        let view = BufferView::from_text(" .. ");
        assert_eq!(closest_word_region(&view, 2, false), None);
        assert_eq!(next_word_region(&view, 2, false), None);
        assert_eq!(previous_word_region(&view, 2, false), None);
    }

    #[test]
    fn test_directional_words_between() {
        let view = BufferView::from_text("one   two");
        assert_eq!(next_word_region(&view, 4, false), Some(Region::new(6, 9)));
        assert_eq!(previous_word_region(&view, 4, false), Some(Region::new(0, 3)));
    }

    #[test]
    fn test_in_line_stays_on_row() {
        let view = BufferView::from_text("alpha\n  beta   \ngamma");
        // Closest would be "alpha" on the row above
        assert_eq!(closest_word_region(&view, 6, true), Some(Region::new(8, 12)));
        assert_eq!(closest_word_region(&view, 6, false), Some(Region::new(0, 5)));
        // Closest would be "gamma" on the row below
        assert_eq!(closest_word_region(&view, 15, true), Some(Region::new(8, 12)));
        assert_eq!(next_word_region(&view, 14, true), None);
        assert_eq!(next_word_region(&view, 14, false), Some(Region::new(16, 21)));
    }

    #[test]
    fn test_in_line_empty_row() {
        let view = BufferView::from_text("alpha\n   \ngamma");
        assert_eq!(closest_word_region(&view, 7, true), None);
    }

    #[test]
    fn test_adjacent_wraps() {
        let view = BufferView::from_text("alpha beta  ");
        assert_eq!(adjacent_word_region(&view, 11, true, false), None);
        assert_eq!(adjacent_word_region(&view, 11, true, true), Some(Region::new(0, 5)));

        let view = BufferView::from_text("  alpha beta");
        assert_eq!(adjacent_word_region(&view, 1, false, false), None);
        assert_eq!(adjacent_word_region(&view, 1, false, true), Some(Region::new(8, 12)));
    }

    #[test]
    fn test_adjacent_wrap_from_the_end_gives_up() {
        let view = BufferView::from_text("  ");
        assert_eq!(adjacent_word_region(&view, 0, true, true), None);
        assert_eq!(adjacent_word_region(&view, 2, false, true), None);
    }
}
