// crates/domain/src/progress.rs

/// Completion percentage of `done` out of `total`, rounded half up.
///
/// An empty input counts as complete.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let done = done.min(total) as u128;
    let total = total as u128;
    ((200 * done + total) / (2 * total)) as u8
}
