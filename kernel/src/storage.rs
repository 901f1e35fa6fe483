//! Static-storage initialization (`.bss` clearing).

use core::ptr;

use crate::layout::MemRegion;

/// Write `byte` to every address in `region`.
///
/// Volatile stores: the compiler may neither drop them (nothing in Rust reads
/// `.bss` through these addresses yet) nor turn the loop into a `memset` call.
///
/// # Safety
///
/// `region` must be writable memory that no live reference points into, and
/// must not contain the running stack.
pub unsafe fn fill(region: MemRegion, byte: u8) {
    let mut p = region.start() as *mut u8;
    let end = region.end() as *mut u8;
    while p < end {
        ptr::write_volatile(p, byte);
        p = p.add(1);
    }
}

/// Zero `region`. Empty regions are a no-op and running it twice is harmless.
///
/// # Safety
///
/// Same as [`fill`]. Must run before anything reads a zero-initialized static.
#[inline]
pub unsafe fn zero(region: MemRegion) {
    fill(region, 0);
}
