//! Six-slot code model

use std::fmt;

use ov_core::domain::entities::CODE_LENGTH;

/// Ordered slots, each empty or holding one ASCII digit.
///
/// The slot count is fixed; only slot contents change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    slots: [Option<char>; CODE_LENGTH],
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn len(&self) -> usize {
        CODE_LENGTH
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Write a digit or clear a slot. Rejects non-digits and out of range
    /// positions.
    pub fn set(&mut self, index: usize, digit: Option<char>) -> bool {
        if digit.is_some_and(|c| !c.is_ascii_digit()) {
            return false;
        }
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = digit;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Write `digits` left to right from `start`, stopping at the last slot.
    /// Returns how many were written.
    pub fn fill_from(&mut self, start: usize, digits: &[char]) -> usize {
        let mut written = 0;
        for (slot, digit) in self.slots.iter_mut().skip(start).zip(digits) {
            *slot = Some(*digit);
            written += 1;
        }
        written
    }

    /// Write `digits` into empty slots only, scanning from `start` to the
    /// last slot and then wrapping to the empty slots before `start`.
    /// Returns how many were written.
    pub fn fill_empty_from(&mut self, start: usize, digits: &[char]) -> usize {
        let start = start.min(CODE_LENGTH);
        let mut digits = digits.iter();
        let mut written = 0;
        for index in (start..CODE_LENGTH).chain(0..start) {
            if self.slots[index].is_some() {
                continue;
            }
            match digits.next() {
                Some(digit) => {
                    self.slots[index] = Some(*digit);
                    written += 1;
                }
                None => break,
            }
        }
        written
    }

    /// The assembled code, once every slot holds a digit
    pub fn assemble(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or('_'))?;
        }
        Ok(())
    }
}
