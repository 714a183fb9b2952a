use std::fmt;
use std::mem;
use std::error::Error;

use crate::utils;


pub type AllocResult<T> = Result<T, AllocError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocErrorKind {
    CapacityOverflow,  // requested size does not fit in a usize
    AllocFailed,
}

#[derive(Debug)]
pub struct AllocError {
    kind: AllocErrorKind,
    requested: usize,
    elem_size: usize,
    cause: Option<Box<dyn Error>>,
}

impl AllocError {
    pub fn new<T>(kind: AllocErrorKind, requested: usize) -> Self {
        Self {
            kind,
            requested,
            elem_size: mem::size_of::<T>(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, error: impl Error + 'static) -> Self {
        self.cause.replace(Box::new(error)); self
    }

    pub fn kind(&self) -> &AllocErrorKind { &self.kind }

    /// The capacity, in elements, that could not be obtained
    pub fn requested(&self) -> usize { self.requested }

    pub fn elem_size(&self) -> usize { self.elem_size }
}

impl Error for AllocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|o| o.as_ref())
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let message = match self.kind() {
            AllocErrorKind::CapacityOverflow => format!(
                "capacity overflow growing past {} elements of {} bytes", self.requested, self.elem_size
            ),
            AllocErrorKind::AllocFailed => format!(
                "could not reserve {} elements of {} bytes", self.requested, self.elem_size
            ),
        };

        utils::format_error(fmt, "allocation failure", Some(message.as_str()), self.source())
    }
}
