/// Returns the peak resident set size (RSS) of the current process in
/// megabytes.
///
/// Backed by the `getrusage` system call. `ru_maxrss` is reported in
/// kilobytes on Linux and in bytes on macOS, so the value is normalized to
/// megabytes either way. Returns 0.0 when the call fails.
///
/// # Safety
/// The `unsafe` block only hands `getrusage` a pointer to uninitialized
/// memory that is read back solely on a zero return code.
pub fn peak_rss_mb() -> f64 {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::uninit();
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return 0.0;
    }

    let maxrss = unsafe { usage.assume_init() }.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        maxrss / 1024.0 / 1024.0
    } else {
        maxrss / 1024.0
    }
}
