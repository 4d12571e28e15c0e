//! Numeric input control with min/max/step
//!
//! Values never leave `[min, max]`: stepping saturates, typing a digit that
//! would overflow starts a fresh entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberInput {
    value: u16,
    min: u16,
    max: u16,
    step: u16,
}

impl NumberInput {
    pub fn new(value: u16, min: u16, max: u16, step: u16) -> Self {
        NumberInput {
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    /// Input for one factor (0..=12)
    pub fn factor(value: u8) -> Self {
        NumberInput::new(u16::from(value), 0, 12, 1)
    }

    /// Input for a product answer (0..=144)
    pub fn answer() -> Self {
        NumberInput::new(0, 0, 144, 1)
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn set(&mut self, value: u16) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn increment(&mut self) {
        self.set(self.value.saturating_add(self.step));
    }

    pub fn decrement(&mut self) {
        self.set(self.value.saturating_sub(self.step));
    }

    /// Append a typed digit. If the number would pass `max`, the entry
    /// restarts from `digit` alone.
    pub fn push_digit(&mut self, digit: u8) {
        let digit = u16::from(digit.min(9));
        let appended = u32::from(self.value) * 10 + u32::from(digit);
        if appended <= u32::from(self.max) {
            self.set(appended as u16);
        } else {
            self.set(digit);
        }
    }

    pub fn pop_digit(&mut self) {
        self.set(self.value / 10);
    }
}
