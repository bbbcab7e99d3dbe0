use core::fmt;
use core::mem::size_of;

/// The unit `.bss` is cleared in.
pub type Word = usize;

pub const WORD_SIZE: usize = size_of::<Word>();

/// A half-open `[start, end)` range of words that must read as zero before
/// `main` runs.
///
/// The checked constructors enforce `start <= end`, word alignment and a
/// whole number of words. The unchecked ones trust the linker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BssRegion {
    start: usize,
    words: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    Inverted { start: usize, end: usize },
    Misaligned { start: usize },
    Ragged { bytes: usize },
    Overflow { start: usize, words: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LayoutError::Inverted { start, end } => {
                write!(f, "bss end {:#x} lies below start {:#x}", end, start)
            }
            LayoutError::Misaligned { start } => {
                write!(f, "bss start {:#x} is not {}-byte aligned", start, WORD_SIZE)
            }
            LayoutError::Ragged { bytes } => {
                write!(f, "bss size {} is not a multiple of {} bytes", bytes, WORD_SIZE)
            }
            LayoutError::Overflow { start, words } => {
                write!(f, "{} words from {:#x} overflow the address space", words, start)
            }
        }
    }
}

impl BssRegion {
    pub fn new(start: usize, end: usize) -> Result<Self, LayoutError> {
        if end < start {
            return Err(LayoutError::Inverted { start, end });
        }
        if start % WORD_SIZE != 0 {
            return Err(LayoutError::Misaligned { start });
        }
        let bytes = end - start;
        if bytes % WORD_SIZE != 0 {
            return Err(LayoutError::Ragged { bytes });
        }
        Ok(Self {
            start,
            words: bytes / WORD_SIZE,
        })
    }

    pub fn with_len(start: usize, words: usize) -> Result<Self, LayoutError> {
        let end = words
            .checked_mul(WORD_SIZE)
            .and_then(|bytes| start.checked_add(bytes))
            .ok_or(LayoutError::Overflow { start, words })?;
        Self::new(start, end)
    }

    /// # Safety
    ///
    /// `start` must be word aligned and `[start, start + words * WORD_SIZE)`
    /// must be writable memory nobody else is using.
    pub const unsafe fn from_raw_parts(start: usize, words: usize) -> Self {
        Self { start, words }
    }

    /// The words between two unvalidated bounds. An inverted pair yields an
    /// empty region and a tail shorter than a word is left out.
    ///
    /// # Safety
    ///
    /// Same contract as [`BssRegion::from_raw_parts`].
    pub const unsafe fn from_bounds(start: usize, end: usize) -> Self {
        Self::from_raw_parts(start, end.saturating_sub(start) / WORD_SIZE)
    }

    /// The region the linker script brackets with `__bss_start__` and
    /// `__bss_end__`.
    ///
    /// # Safety
    ///
    /// Must only be called before anything has been stored in `.bss`. The
    /// symbols are not validated; an inverted pair yields an empty region.
    #[cfg(target_os = "none")]
    pub unsafe fn from_linker() -> Self {
        extern "C" {
            static mut __bss_start__: Word;
            static mut __bss_end__: Word;
        }
        let start = core::ptr::addr_of_mut!(__bss_start__) as usize;
        let end = core::ptr::addr_of_mut!(__bss_end__) as usize;
        Self::from_bounds(start, end)
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.start + self.words * WORD_SIZE
    }

    pub const fn len_words(&self) -> usize {
        self.words
    }

    pub const fn len_bytes(&self) -> usize {
        self.words * WORD_SIZE
    }

    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }
}
