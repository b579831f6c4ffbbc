// Host editor API the navigation code works against

use std::ops::BitOr;

use crate::buffer::BufferId;
use crate::classify::is_word_char;
use crate::error::Result;
use crate::region::Region;
use crate::selection::Selection;

/// Boundary classes a point can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointClass(u8);

impl PointClass {
    pub const NONE: PointClass = PointClass(0);
    pub const WORD_START: PointClass = PointClass(1);
    pub const WORD_END: PointClass = PointClass(1 << 1);
    pub const WORD_BOUNDARY: PointClass = PointClass(1 | 1 << 1);

    pub fn intersects(self, other: PointClass) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_word_start(self) -> bool {
        self.intersects(Self::WORD_START)
    }

    pub fn is_word_end(self) -> bool {
        self.intersects(Self::WORD_END)
    }

    pub fn is_boundary(self) -> bool {
        self.intersects(Self::WORD_BOUNDARY)
    }
}

impl BitOr for PointClass {
    type Output = PointClass;

    fn bitor(self, rhs: PointClass) -> PointClass {
        PointClass(self.0 | rhs.0)
    }
}

/// Options for [`View::find`] and [`View::find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindFlags {
    /// Search towards the start of the buffer.
    pub reverse: bool,
    pub ignore_case: bool,
    /// Retry over the whole buffer when nothing lies in the search direction.
    pub wrap: bool,
}

/// Text, geometry, search and selection of a host view. Word boundary
/// classification is built on `char_at` and hosts may override it.
pub trait View {
    fn buffer_id(&self) -> BufferId;

    /// Number of characters in the buffer.
    fn size(&self) -> usize;

    fn char_at(&self, pt: usize) -> Option<char>;

    fn substr(&self, region: Region) -> String;

    /// Zero-based (row, column) of a point.
    fn rowcol(&self, pt: usize) -> (usize, usize);

    /// The content of the line holding `pt`, without its line ending.
    fn line(&self, pt: usize) -> Region;

    /// First match of `pattern` beginning at or after `start` (last match
    /// ending at or before it when reversed).
    fn find(&self, pattern: &str, start: usize, flags: FindFlags) -> Result<Option<Region>>;

    /// Every match of `pattern` lying inside `within`, in buffer order.
    fn find_all(&self, pattern: &str, flags: FindFlags, within: Region) -> Result<Vec<Region>>;

    fn sel(&self) -> &Selection;

    fn sel_mut(&mut self) -> &mut Selection;

    fn show_at_center(&mut self, region: Region);

    /// Highlights `regions` under `key`, replacing any earlier set.
    fn add_regions(&mut self, key: &str, regions: Vec<Region>);

    fn erase_regions(&mut self, key: &str);

    fn classify(&self, pt: usize) -> PointClass {
        if pt > self.size() {
            return PointClass::NONE;
        }
        let before = pt
            .checked_sub(1)
            .and_then(|p| self.char_at(p))
            .map_or(false, is_word_char);
        let after = self.char_at(pt).map_or(false, is_word_char);

        match (before, after) {
            (false, true) => PointClass::WORD_START,
            (true, false) => PointClass::WORD_END,
            _ => PointClass::NONE,
        }
    }

    /// Nearest point strictly after (or before) `pt` matching `classes`.
    /// Falls back to the buffer end (or start) when there is none.
    fn find_by_class(&self, pt: usize, forward: bool, classes: PointClass) -> usize {
        let size = self.size();
        if forward {
            ((pt + 1)..=size)
                .find(|&p| self.classify(p).intersects(classes))
                .unwrap_or(size)
        } else {
            (0..pt.min(size + 1))
                .rev()
                .find(|&p| self.classify(p).intersects(classes))
                .unwrap_or(0)
        }
    }

    fn expand_by_class(&self, pt: usize, classes: PointClass) -> Region {
        Region::new(
            self.find_by_class(pt, false, classes),
            self.find_by_class(pt, true, classes),
        )
    }

    /// Grows `region` to cover the words it cuts into, then trims any
    /// non-word characters left at either edge.
    fn word(&self, region: Region) -> Region {
        let is_word = |pt: Option<usize>| {
            pt.and_then(|p| self.char_at(p))
                .map_or(false, is_word_char)
        };
        let empty = region.is_empty();
        let mut begin = region.begin();
        let mut end = region.end();

        if is_word(begin.checked_sub(1)) && (empty || is_word(Some(begin))) {
            begin = self.find_by_class(begin, false, PointClass::WORD_START);
        }
        if is_word(Some(end)) && (empty || is_word(end.checked_sub(1))) {
            end = self.find_by_class(end, true, PointClass::WORD_END);
        }

        if begin < end {
            while begin < end && !is_word(Some(begin)) {
                begin += 1;
            }
            while end > begin && !is_word(Some(end - 1)) {
                end -= 1;
            }
        }

        Region::new(begin, end)
    }
}
