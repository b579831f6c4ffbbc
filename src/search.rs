// Searching for the same word, or any word on the current line

use crate::classify::is_word_char;
use crate::error::Result;
use crate::region::Region;
use crate::view::{FindFlags, View};

/// Matches a whole word on the current line
pub const WORD_PATTERN: &str = r"\b\w+\b";

/// Literal pattern for `word`, anchored with `\b` wherever the word
/// starts or ends with a word character.
pub fn whole_word_pattern(word: &str) -> String {
    let anchor = |c: Option<char>| if c.map_or(false, is_word_char) { r"\b" } else { "" };
    format!(
        "{}{}{}",
        anchor(word.chars().next()),
        regex::escape(word),
        anchor(word.chars().last())
    )
}

fn log_found(view: &dyn View, region: Region, forward: bool) {
    let (row, col_start) = view.rowcol(region.begin());
    let (_, col_end) = view.rowcol(region.end());
    log::debug!(
        "{} word is '{}' ({}, [{}:{}]).",
        if forward { "Next" } else { "Previous" },
        view.substr(region),
        row + 1,
        col_start + 1,
        col_end
    );
}

/// Region of the closest occurrence of the text in `word_region`.
pub fn closest_same_word(
    view: &dyn View,
    word_region: Region,
    forward: bool,
    wrap: bool,
    case_sensitive: bool,
) -> Result<Option<Region>> {
    let word = view.substr(word_region);
    if word.is_empty() {
        return Ok(None);
    }

    let point = if forward {
        word_region.end()
    } else {
        word_region.begin()
    };
    let flags = FindFlags {
        reverse: !forward,
        ignore_case: !case_sensitive,
        wrap,
    };

    let found = view.find(&whole_word_pattern(&word), point, flags)?;
    match found {
        Some(region) => log_found(view, region, forward),
        None => log::debug!("No other occurrence of '{}'.", word),
    }
    Ok(found)
}

fn words_in_line(view: &dyn View, within: Region) -> Result<Vec<Region>> {
    log::debug!("Searching region {} ('{}').", within, view.substr(within));
    view.find_all(WORD_PATTERN, FindFlags::default(), within)
}

/// Region of the closest word after (or before) `point` on its line.
/// Backward results are reversed so the caret lands on the word start.
pub fn closest_word_in_line(
    view: &dyn View,
    point: usize,
    forward: bool,
    wrap: bool,
) -> Result<Option<Region>> {
    let line = view.line(point);
    let (row, col) = view.rowcol(point);
    log::debug!("Finding closest word in line from {}:{}.", row + 1, col);

    let within = if forward {
        Region::new(point, line.end())
    } else {
        Region::new(line.begin(), point)
    };
    let mut regions = words_in_line(view, within)?;

    if regions.is_empty() {
        log::debug!("No region found.");
        if !wrap {
            return Ok(None);
        }
        // The rest of the line is only unsearched when we did not start at the wrap end
        let wrap_point = if forward { line.begin() } else { line.end() };
        if point == wrap_point {
            return Ok(None);
        }
        regions = words_in_line(view, line)?;
    }

    let found = if forward {
        regions.first().copied()
    } else {
        regions.last().map(Region::reversed)
    };
    if let Some(region) = found {
        log_found(view, region, forward);
    }
    Ok(found)
}
