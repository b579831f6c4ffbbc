// Word shape classification of selected regions

use crate::region::Region;
use crate::view::{PointClass, View};

/// Check if a character is part of a word
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// How a region lines up with the words around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordShape {
    /// No word characters selected, and not a caret inside a word
    NoWord,
    /// Exactly one word, boundary to boundary
    SingleWord,
    /// Several whole words with only non-word characters in between
    MultipleWords,
    /// Cuts into one word, or into several when `spans_multiple` is set
    Partial { spans_multiple: bool },
}

impl WordShape {
    pub fn as_str(&self) -> &str {
        match self {
            WordShape::NoWord => "no word",
            WordShape::SingleWord => "single word",
            WordShape::MultipleWords => "multiple words",
            WordShape::Partial {
                spans_multiple: false,
            } => "part of a word",
            WordShape::Partial {
                spans_multiple: true,
            } => "part of multiple words",
        }
    }
}

pub fn classify_region(view: &dyn View, region: Region) -> WordShape {
    if is_not_part_of_any_word(view, region) {
        WordShape::NoWord
    } else if is_single_complete_word(view, region) {
        WordShape::SingleWord
    } else if is_multiple_complete_words(view, region) {
        WordShape::MultipleWords
    } else {
        WordShape::Partial {
            spans_multiple: is_part_of_multiple_words(view, region),
        }
    }
}

/// `"[    ]"`, `"[ /? ]"` and a caret between words hold no word;
/// `"[a  ]"` and `"flagpo[le b]anana"` do.
pub fn is_not_part_of_any_word(view: &dyn View, region: Region) -> bool {
    let begin = region.begin();
    if region.is_empty() && view.classify(begin).is_word_start() {
        return true;
    }

    let next = view.find_by_class(begin, true, PointClass::WORD_BOUNDARY);
    if next == begin {
        // Already at the buffer end
        return true;
    }

    let class = view.classify(next);
    if class.is_word_start() {
        next >= region.end()
    } else {
        // A word end comes first, so `begin` is inside a word
        !class.is_boundary()
    }
}

/// `"[flagpole]"` is one; `"[ flagpole]"`, `"f[lagpole]"` and
/// `"[flagpole banana]"` are not.
pub fn is_single_complete_word(view: &dyn View, region: Region) -> bool {
    if view.classify(region.begin()).is_word_start() {
        let word_end = view.find_by_class(region.begin(), true, PointClass::WORD_END);
        return word_end == region.end();
    }
    false
}

/// `"[flagpole banana]"`, `"[flagpole.banana]"`, `"[flagpole\n   banana]"`.
pub fn is_multiple_complete_words(view: &dyn View, region: Region) -> bool {
    view.classify(region.begin()).is_word_start()
        && view.classify(region.end()).is_word_end()
        && !is_single_complete_word(view, region)
}

/// `"flagpo[le ban]ana"` and `"f[lagpole banana]"` reach into a second word;
/// `"flagpo[le] "` does not.
pub fn is_part_of_multiple_words(view: &dyn View, region: Region) -> bool {
    let end_point = view.find_by_class(region.begin(), true, PointClass::WORD_END);
    let start_point = view.find_by_class(end_point, true, PointClass::WORD_START);

    region.end() > start_point
}
