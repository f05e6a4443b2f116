//! System memory discovery and enumeration budgets.
//!
//! Cache entries dominate peak memory, and their number grows exponentially
//! with the node count. The budget model is empirical: roughly `2^(n/3)`
//! MiB for an `n`-node enumeration. Requests that cannot fit are refused
//! before any work starts; requests that would consume more than half of
//! available memory proceed with a warning.

use sysinfo::System;
use tracing::warn;

use crate::{Error, Result};

/// Hard limit on the node count
pub const MAX_NODES: usize = 30;

/// Node count from which the memory estimate is checked against the system
const CHECK_THRESHOLD: usize = 25;

const GIB: u64 = 1024 * 1024 * 1024;

/// Available system memory in GiB, `None` when discovery fails
pub fn available_gib() -> Option<u64> {
    let bytes = refreshed().available_memory();
    (bytes > 0).then_some(bytes / GIB)
}

/// Total system memory in GiB, `None` when discovery fails
pub fn total_gib() -> Option<u64> {
    let bytes = refreshed().total_memory();
    (bytes > 0).then_some(bytes / GIB)
}

/// Estimated peak memory in MiB for an `n`-node enumeration
pub fn estimated_mib(n: usize) -> u64 {
    1u64 << (n / 3)
}

/// Refuse enumerations that cannot fit in memory; warn when the estimate
/// exceeds half of what is available.
///
/// When memory discovery fails the request is allowed through unchecked.
pub fn check_budget(n: usize) -> Result<()> {
    if n > MAX_NODES {
        return Err(Error::TooManyNodes { n, max: MAX_NODES });
    }
    if n < CHECK_THRESHOLD {
        return Ok(());
    }

    let Some(available_gib) = available_gib() else {
        return Ok(());
    };
    let estimated_gib = estimated_mib(n) / 1024;

    if estimated_gib > available_gib {
        return Err(Error::InsufficientMemory {
            n,
            estimated_gib,
            available_gib,
        });
    }
    if estimated_gib * 2 > available_gib {
        warn!(
            n,
            estimated_gib, available_gib, "enumeration may use more than half of available memory"
        );
    }
    Ok(())
}

fn refreshed() -> System {
    let mut system = System::new();
    system.refresh_memory();
    system
}
