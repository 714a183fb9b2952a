//! Growable storage shared by every container in a chunk.
//!
//! All buffers grow through [`reallocate`], which also keeps the
//! thread-local allocation ledger (see [`alloc_stats`]) up to date.

use core::cmp;
use core::mem;
use log;

mod buffer;
mod errors;
mod stats;

pub use buffer::GrowBuf;
pub use errors::{AllocError, AllocErrorKind, AllocResult};
pub use stats::{AllocStats, alloc_stats};


/// Capacity given to a buffer on its first allocation
pub const MIN_CAPACITY: usize = 8;

/// Factor by which a full buffer grows
pub const GROWTH_FACTOR: usize = 2;


/// Returns the capacity that a full buffer of `capacity` elements should grow to.
pub fn grow_capacity<T>(capacity: usize) -> AllocResult<usize> {
    let grown = capacity.checked_mul(GROWTH_FACTOR)
        .ok_or_else(|| AllocError::new::<T>(AllocErrorKind::CapacityOverflow, capacity))?;

    Ok(cmp::max(MIN_CAPACITY, grown))
}


/// Resizes `storage` from `old_capacity` to `new_capacity` elements.
///
/// A new capacity of zero releases the storage. Otherwise the storage is grown or shrunk,
/// and the contents are preserved up to the smaller of the two capacities. Growing storage
/// that already holds more than `new_capacity` elements reserves nothing.
pub fn reallocate<T>(storage: &mut Vec<T>, old_capacity: usize, new_capacity: usize) -> AllocResult<()> {
    let elem_size = mem::size_of::<T>();
    let old_bytes = old_capacity * elem_size;

    if new_capacity == 0 {
        let ptr = storage.as_ptr() as usize;
        drop(mem::take(storage));
        if old_capacity > 0 {
            log::debug!("{:#X} free {} bytes", ptr, old_bytes);
            stats::record_free(old_bytes);
        }
        return Ok(());
    }

    let new_bytes = new_capacity.checked_mul(elem_size)
        .ok_or_else(|| AllocError::new::<T>(AllocErrorKind::CapacityOverflow, new_capacity))?;

    match new_capacity.cmp(&old_capacity) {
        cmp::Ordering::Greater => {
            let additional = new_capacity.saturating_sub(storage.len());
            storage.try_reserve_exact(additional)
                .map_err(|error| AllocError::new::<T>(AllocErrorKind::AllocFailed, new_capacity).with_cause(error))?;

            if old_capacity == 0 {
                log::debug!("{:#X} allocate {} bytes", storage.as_ptr() as usize, new_bytes);
                stats::record_alloc(new_bytes);
            } else {
                log::debug!("{:#X} grow {} -> {} bytes", storage.as_ptr() as usize, old_bytes, new_bytes);
                stats::record_realloc(old_bytes, new_bytes);
            }
        },

        cmp::Ordering::Less => {
            storage.truncate(new_capacity);
            storage.shrink_to(new_capacity);

            log::debug!("{:#X} shrink {} -> {} bytes", storage.as_ptr() as usize, old_bytes, new_bytes);
            stats::record_realloc(old_bytes, new_bytes);
        },

        cmp::Ordering::Equal => { },
    }

    Ok(())
}


/// Reports an allocation failure. A container that could not grow cannot keep operating,
/// so this never returns. Unwinding still drops (and so releases) every live buffer.
#[cold]
pub fn alloc_failure(error: AllocError) -> ! {
    log::error!("{}", error);
    panic!("{}", error)
}
