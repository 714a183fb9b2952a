use core::slice;

use crate::memory::GrowBuf;


pub type Value = f64;

/// Index of a value in a [`ConstPool`]
pub type ConstID = usize;


/// Append-only table of the literal values referenced by a chunk's instructions.
///
/// Instructions refer to constants through a single operand byte, so a pool that is
/// referenced from bytecode should not grow past 256 entries. That is up to the caller.
#[derive(Debug, Default)]
pub struct ConstPool {
    values: GrowBuf<Value>,
}

impl ConstPool {
    pub const fn new() -> Self {
        Self { values: GrowBuf::new() }
    }

    /// Appends a value and returns the index it was stored at.
    pub fn add(&mut self, value: Value) -> ConstID {
        self.values.push(value);
        self.values.len() - 1
    }

    pub fn get(&self, index: impl Into<ConstID>) -> Option<&Value> {
        self.values.get(index.into())
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn as_slice(&self) -> &[Value] { self.values.as_slice() }

    pub fn iter(&self) -> slice::Iter<'_, Value> { self.values.iter() }

    pub fn release(&mut self) {
        self.values.release()
    }
}
