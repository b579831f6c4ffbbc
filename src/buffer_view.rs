// A View over an in-memory Buffer, searched with regex

use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::path::Path;

use crate::buffer::{Buffer, BufferId};
use crate::error::Result;
use crate::region::Region;
use crate::selection::Selection;
use crate::view::{FindFlags, View};
use crate::viewport::Viewport;

#[derive(Debug)]
pub struct BufferView {
    buffer: Buffer,
    selection: Selection,
    viewport: Viewport,
    highlights: HashMap<String, Vec<Region>>,
}

impl BufferView {
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            selection: Selection::from_caret(0),
            viewport: Viewport::default(),
            highlights: HashMap::new(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(Buffer::from_text(text))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Buffer::from_file(path)?))
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn highlights(&self, key: &str) -> &[Region] {
        self.highlights.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn compile(pattern: &str, flags: FindFlags) -> Result<Regex> {
        Ok(RegexBuilder::new(pattern)
            .case_insensitive(flags.ignore_case)
            .multi_line(true)
            .build()?)
    }

    fn char_region(&self, start_byte: usize, end_byte: usize) -> Region {
        let rope = self.buffer.rope();
        Region::new(rope.byte_to_char(start_byte), rope.byte_to_char(end_byte))
    }
}

impl View for BufferView {
    fn buffer_id(&self) -> BufferId {
        self.buffer.id()
    }

    fn size(&self) -> usize {
        self.buffer.len_chars()
    }

    fn char_at(&self, pt: usize) -> Option<char> {
        self.buffer.char_at(pt)
    }

    fn substr(&self, region: Region) -> String {
        self.buffer.substr(region)
    }

    fn rowcol(&self, pt: usize) -> (usize, usize) {
        self.buffer.rowcol(pt)
    }

    fn line(&self, pt: usize) -> Region {
        let (row, _) = self.buffer.rowcol(pt);
        self.buffer.line_region(row)
    }

    fn find(&self, pattern: &str, start: usize, flags: FindFlags) -> Result<Option<Region>> {
        let re = Self::compile(pattern, flags)?;
        let text = self.buffer.to_string();
        let start_byte = self.buffer.rope().char_to_byte(start.min(self.size()));

        let found = if flags.reverse {
            let mut before = None;
            let mut last = None;
            for m in re.find_iter(&text) {
                if m.end() <= start_byte {
                    before = Some(m);
                }
                last = Some(m);
            }
            before.or(if flags.wrap { last } else { None })
        } else {
            re.find_at(&text, start_byte)
                .or_else(|| if flags.wrap { re.find(&text) } else { None })
        };

        Ok(found.map(|m| self.char_region(m.start(), m.end())))
    }

    fn find_all(&self, pattern: &str, flags: FindFlags, within: Region) -> Result<Vec<Region>> {
        let re = Self::compile(pattern, flags)?;
        let text = self.buffer.to_string();
        let rope = self.buffer.rope();
        let begin_byte = rope.char_to_byte(within.begin().min(self.size()));
        let end_byte = rope.char_to_byte(within.end().min(self.size()));

        let mut regions = Vec::new();
        let mut pos = begin_byte;
        while pos <= end_byte {
            let Some(m) = re.find_at(&text, pos) else {
                break;
            };
            if m.end() > end_byte {
                break;
            }
            regions.push(self.char_region(m.start(), m.end()));
            pos = if m.end() > m.start() {
                m.end()
            } else {
                // Step over the character after an empty match
                match text[m.end()..].chars().next() {
                    Some(c) => m.end() + c.len_utf8(),
                    None => break,
                }
            };
        }

        Ok(regions)
    }

    fn sel(&self) -> &Selection {
        &self.selection
    }

    fn sel_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    fn show_at_center(&mut self, region: Region) {
        let (line, col) = self.buffer.rowcol(region.begin());
        self.viewport.center_on(line, col);
    }

    fn add_regions(&mut self, key: &str, regions: Vec<Region>) {
        self.highlights.insert(key.to_string(), regions);
    }

    fn erase_regions(&mut self, key: &str) {
        self.highlights.remove(key);
    }
}
