//! Memory Allocator Configuration
//!
//! Routes every heap allocation of the binary, including the per-shred pass
//! buffer that can be as large as the target file, through mimalloc.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
