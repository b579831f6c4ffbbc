// Text buffer implementation using ropey

use ropey::Rope;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::region::Region;

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a buffer for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl BufferId {
    fn next() -> Self {
        BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub struct Buffer {
    id: BufferId,
    rope: Rope,
    file_path: Option<PathBuf>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            id: BufferId::next(),
            rope: Rope::from_str(text),
            file_path: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;

        Ok(Self {
            id: BufferId::next(),
            rope: Rope::from_str(&content),
            file_path: Some(path.as_ref().to_path_buf()),
        })
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn char_at(&self, pt: usize) -> Option<char> {
        self.rope.get_char(pt)
    }

    /// Text covered by `region`, clamped to the buffer.
    pub fn substr(&self, region: Region) -> String {
        let len = self.len_chars();
        let begin = region.begin().min(len);
        let end = region.end().min(len);
        self.rope.slice(begin..end).to_string()
    }

    /// Zero-based (row, column) of a character offset.
    pub fn rowcol(&self, pt: usize) -> (usize, usize) {
        let pt = pt.min(self.len_chars());
        let row = self.rope.char_to_line(pt);
        (row, pt - self.rope.line_to_char(row))
    }

    /// Region covering a row's content, without its line ending.
    pub fn line_region(&self, row: usize) -> Region {
        if row >= self.line_count() {
            return Region::point(self.len_chars());
        }
        let start = self.rope.line_to_char(row);
        Region::new(start, start + self.line_len(row))
    }

    pub fn get_line(&self, line: usize) -> Option<String> {
        if line < self.line_count() {
            let line_text = self.rope.line(line).to_string();
            Some(line_text.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        }
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Characters in a line, excluding its line ending.
    pub fn line_len(&self, line: usize) -> usize {
        self.get_line(line)
            .map(|text| text.chars().count())
            .unwrap_or(0)
    }

    pub fn file_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("[No Name]")
            .to_string()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}
