use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::boot::{BssRegion, Word};
use crate::driver::{Mmio, StatusLed};

pub const GUARD: Word = 0x5a5a_5a5a;
pub const SENTINEL: Word = 0xdead_beef;

/// A fake `.bss`: `len` words fenced by one guard word on each side.
pub struct Arena {
    words: Vec<Word>,
    len: usize,
}

impl Arena {
    pub fn new(len: usize, fill: Word) -> Self {
        let mut words = vec![GUARD; len + 2];
        words[1..=len].fill(fill);
        Self { words, len }
    }

    pub fn region(&mut self) -> BssRegion {
        let start = unsafe { self.words.as_mut_ptr().add(1) } as usize;
        BssRegion::with_len(start, self.len).unwrap()
    }

    pub fn body(&self) -> &[Word] {
        &self.words[1..=self.len]
    }

    pub fn guards_intact(&self) -> bool {
        self.words[0] == GUARD && self.words[self.len + 1] == GUARD
    }
}

/// Snapshot of a region, taken while no reference into it is alive.
pub unsafe fn contents(bss: BssRegion) -> Vec<Word> {
    (0..bss.len_words())
        .map(|i| (bss.start() as *const Word).add(i).read_volatile())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Main { bss_zeroed: bool },
    Success,
}

pub struct RecordingLed<'a> {
    events: &'a RefCell<Vec<Event>>,
}

impl<'a> RecordingLed<'a> {
    pub fn new(events: &'a RefCell<Vec<Event>>) -> Self {
        Self { events }
    }
}

impl StatusLed for RecordingLed<'_> {
    fn assert_success(&mut self) {
        self.events.borrow_mut().push(Event::Success);
    }
}

/// Register file backed by a map; unwritten registers read as zero.
#[derive(Default)]
pub struct FakeBus {
    regs: BTreeMap<usize, u32>,
    pub writes: Vec<(usize, u32)>,
}

impl FakeBus {
    pub fn with(mut self, addr: usize, value: u32) -> Self {
        self.regs.insert(addr, value);
        self
    }

    pub fn reg(&self, addr: usize) -> u32 {
        self.regs.get(&addr).copied().unwrap_or(0)
    }
}

impl Mmio for FakeBus {
    fn read(&mut self, addr: usize) -> u32 {
        self.reg(addr)
    }

    fn write(&mut self, addr: usize, value: u32) {
        self.regs.insert(addr, value);
        self.writes.push((addr, value));
    }
}
