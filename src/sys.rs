//! System glue: logging, panic handler, global allocator.
//!
//! Board-specific bring-up (pin mapping, clock trees, picotool metadata) is
//! out of scope for this crate; the embedding application pulls this module
//! in with `use mmwave_presence_driver::sys as _;` alongside its own.

#[cfg(not(test))]
use linked_list_allocator::LockedHeap;

/// defmt RTT logger (link-time side effects)
#[cfg(any(target_arch = "arm", target_arch = "riscv32"))]
use defmt_rtt as _;

#[cfg(target_arch = "riscv32")]
use panic_halt as _;
#[cfg(target_arch = "arm")]
use panic_probe as _;

// Unit tests link `std` and run as a normal host binary driven by the
// `libtest` harness, which itself allocates (argument parsing, thread
// pool, output buffering) before any test body executes. Registering the
// bounded embedded heap as the process-wide allocator in that binary
// would starve the harness itself, so tests keep the host's default
// allocator instead and drive `Accountant`'s own caps directly.
#[cfg(not(test))]
#[global_allocator]
static ALLOCATOR: LockedHeap = LockedHeap::empty();

/// Initializes the global allocator with a caller-provided heap region.
///
/// Must be called exactly once before any `alloc`-dependent driver code
/// runs (`HalOrchestrator::init` assumes the allocator is already live).
/// The region is typically a `static mut` byte array placed by the board
/// crate in whatever memory region it chooses.
///
/// # Safety
/// `heap_start` must point to at least `heap_size` bytes of memory that
/// is not used by anything else for the remainder of the program.
#[cfg(not(test))]
pub unsafe fn init_heap(heap_start: *mut u8, heap_size: usize) {
    unsafe {
        ALLOCATOR.lock().init(heap_start, heap_size);
    }
}
