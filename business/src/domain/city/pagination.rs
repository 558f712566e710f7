pub const DEFAULT_OFFSET: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 100;
pub const MIN_LIMIT: u32 = 1;

/// Offset/limit window over the city catalog.
///
/// `limit` is always at least 1; construction through [`PageRequest::new`]
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: u32,
    limit: u32,
}

impl PageRequest {
    /// Returns `None` when `limit` is below [`MIN_LIMIT`].
    pub fn new(offset: u32, limit: u32) -> Option<Self> {
        (limit >= MIN_LIMIT).then_some(Self { offset, limit })
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Cursor for the page after this one, given how many rows came back.
    pub fn next_offset(&self, returned: usize) -> u64 {
        u64::from(self.offset) + returned as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}
