// Deciding where a navigation command moves the selection

use crate::classify::{classify_region, WordShape};
use crate::error::Result;
use crate::index::IndexStore;
use crate::locate::{adjacent_word_region, closest_word_region};
use crate::region::Region;
use crate::search::{closest_same_word, closest_word_in_line};
use crate::settings::Settings;
use crate::view::View;

/// Highlight key used for adjacent same words
pub const ADJACENT_WORD_MARK: &str = "word_navigate_mark_adjacent";

/// What a navigation command did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved(Region),
    Unchanged,
    /// Several regions were selected
    Aborted,
}

/// Where the policy wants to go next
enum Target {
    /// Select this region as is
    Select(Region),
    /// Search for another occurrence of this word
    Pivot(Region),
    Nothing,
}

impl From<Option<Region>> for Target {
    fn from(region: Option<Region>) -> Self {
        region.map_or(Target::Nothing, Target::Select)
    }
}

pub struct Navigator<'a> {
    settings: &'a Settings,
    indices: &'a IndexStore,
}

impl<'a> Navigator<'a> {
    pub fn new(settings: &'a Settings, indices: &'a IndexStore) -> Self {
        Self { settings, indices }
    }

    /// Jumps to the previous or next occurrence of the selected word.
    pub fn navigate(&self, view: &mut dyn View, forward: bool) -> Result<Navigation> {
        if view.sel().is_multiple() {
            log::warn!("Multiple regions selected - doing nothing.");
            return Ok(Navigation::Aborted);
        }

        let region = view.sel().first();
        let destination = match self.same_word_target(view, region, forward) {
            Target::Select(region) => Some(region),
            Target::Pivot(word_region) => self.closest_same_word(view, word_region, forward)?,
            Target::Nothing => None,
        };

        Ok(apply(view, destination, forward))
    }

    /// Jumps to the previous or next word on the caret's line.
    pub fn navigate_in_line(&self, view: &mut dyn View, forward: bool) -> Result<Navigation> {
        if view.sel().is_multiple() {
            log::warn!("Multiple regions selected - doing nothing.");
            return Ok(Navigation::Aborted);
        }

        let region = view.sel().first();
        let caret = region.b;
        let text = view.substr(region);

        let start = match classify_region(view, region) {
            WordShape::NoWord => {
                log::debug!("No word selected ('{}') - finding closest.", text);
                caret
            }
            WordShape::SingleWord => {
                log::debug!("Single word '{}' selected.", text);
                edge(region, forward)
            }
            shape => {
                log::debug!("{} selected ('{}').", shape.as_str(), text);
                if self.settings.expand_first() {
                    log::debug!("'{}' not a word - expanding to word.", text);
                    let word = closest_word_region(view, caret, true)
                        .map(|word| if forward { word } else { word.reversed() });
                    return Ok(apply(view, word, forward));
                }
                edge(view.word(region), forward)
            }
        };

        let destination = closest_word_in_line(view, start, forward, self.settings.wrap_line())?;
        Ok(apply(view, destination, forward))
    }

    /// Highlights the previous and next occurrences of a selected word.
    pub fn mark_adjacent_words(&self, view: &mut dyn View) -> Result<()> {
        view.erase_regions(ADJACENT_WORD_MARK);
        if !self.settings.mark_adjacent() {
            return Ok(());
        }

        let region = match view.sel().single() {
            Ok(region) => region,
            Err(_) => {
                log::warn!("Multiple regions selected - doing nothing.");
                return Ok(());
            }
        };
        if classify_region(view, region) != WordShape::SingleWord {
            return Ok(());
        }

        let mut marks = Vec::new();
        let previous = self.closest_same_word(view, region, false)?;
        if let Some(previous) = previous.filter(|r| r.end() < region.end()) {
            marks.push(previous);
        }
        let next = self.closest_same_word(view, region, true)?;
        if let Some(next) = next.filter(|r| r.end() > region.end()) {
            marks.push(next);
        }
        log::debug!("Found adjacent words {:?} and {:?}.", previous, next);

        view.add_regions(ADJACENT_WORD_MARK, marks);
        Ok(())
    }

    fn same_word_target(&self, view: &dyn View, region: Region, forward: bool) -> Target {
        let settings = self.settings;
        let caret = region.b;
        let text = view.substr(region);

        match classify_region(view, region) {
            WordShape::NoWord => {
                log::debug!("No word selected ('{}') - finding closest.", text);
                adjacent_word_region(view, caret, forward, settings.wrap_buffer())
                    .map_or(Target::Nothing, Target::Pivot)
            }
            WordShape::SingleWord => {
                log::debug!("Single word '{}' selected - finding closest.", text);
                Target::Pivot(region)
            }
            shape @ (WordShape::MultipleWords
            | WordShape::Partial {
                spans_multiple: true,
            }) => {
                if !settings.allow_multiple_words() {
                    let word = closest_word_region(view, caret, false);
                    if settings.expand_first() {
                        log::debug!("{} ('{}') selected - expanding to single word under caret.", shape.as_str(), text);
                        return word.into();
                    }
                    log::debug!("{} ('{}') selected - finding next closest single word from caret.", shape.as_str(), text);
                    return word.map_or(Target::Nothing, Target::Pivot);
                }
                if settings.expand_first() && shape != WordShape::MultipleWords {
                    log::debug!("{} ('{}') selected - expanding to words.", shape.as_str(), text);
                    return Target::Select(view.word(region));
                }
                log::debug!("{} ('{}') selected - finding next closest combination of words.", shape.as_str(), text);
                Target::Pivot(region)
            }
            WordShape::Partial { .. } => {
                let word = view.word(region);
                if settings.expand_first() {
                    log::debug!("Part of single word ('{}') selected - expanding to word.", text);
                    Target::Select(word)
                } else {
                    log::debug!("Part of single word ('{}') selected - finding closest.", text);
                    Target::Pivot(word)
                }
            }
        }
    }

    fn closest_same_word(&self, view: &dyn View, word_region: Region, forward: bool) -> Result<Option<Region>> {
        if self.settings.use_index() {
            match self.indices.get(view.buffer_id()) {
                Ok(index) => log::warn!(
                    "Index search not implemented for buffer {} - navigating manually.",
                    index.buffer()
                ),
                Err(e) => log::debug!("{} - navigating manually.", e),
            }
        }
        closest_same_word(
            view,
            word_region,
            forward,
            self.settings.wrap_buffer(),
            self.settings.case_sensitive(),
        )
    }
}

fn edge(region: Region, forward: bool) -> usize {
    if forward {
        region.end()
    } else {
        region.begin()
    }
}

/// Selects `destination` and scrolls it to the middle of the view.
fn apply(view: &mut dyn View, destination: Option<Region>, forward: bool) -> Navigation {
    match destination {
        Some(region) => {
            log::debug!(
                "{} word is '{}'.",
                if forward { "Next" } else { "Previous" },
                view.substr(region)
            );
            view.sel_mut().replace(region);
            view.show_at_center(region);
            Navigation::Moved(region)
        }
        None => {
            log::debug!("Nothing to navigate to - selection unchanged.");
            Navigation::Unchanged
        }
    }
}
