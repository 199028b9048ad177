/// Wall-clock source for acquisition timestamps and expiry checks.
pub trait Clock: Send + Sync {
    /// Seconds since the UNIX epoch.
    fn now_secs(&self) -> u64;
}
