// Per-buffer word index lookup
//
// No index is ever built; every lookup misses and callers search the
// buffer directly.

use std::collections::HashMap;

use crate::buffer::BufferId;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct WordIndex {
    buffer: BufferId,
}

impl WordIndex {
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }
}

#[derive(Debug, Default)]
pub struct IndexStore {
    indices: HashMap<BufferId, WordIndex>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, buffer: BufferId) -> Result<&WordIndex> {
        self.indices.get(&buffer).ok_or(Error::NoIndex(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    #[test]
    fn test_lookup_misses() {
        let store = IndexStore::new();
        let buffer = Buffer::from_text("text");
        assert!(matches!(store.get(buffer.id()), Err(Error::NoIndex(id)) if id == buffer.id()));
    }
}
