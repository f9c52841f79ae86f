use std::time::Duration;

/// How long to pause after a listing page has been processed.
///
/// `page` is zero-based. Closures `Fn(usize) -> Duration` work too.
pub trait DelayPolicy {
    fn delay_after(&self, page: usize) -> Duration;
}

impl<F> DelayPolicy for F
where
    F: Fn(usize) -> Duration,
{
    fn delay_after(&self, page: usize) -> Duration {
        self(page)
    }
}

/// Same pause after every page.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl DelayPolicy for FixedDelay {
    fn delay_after(&self, _page: usize) -> Duration {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayPolicy for NoDelay {
    fn delay_after(&self, _page: usize) -> Duration {
        Duration::ZERO
    }
}

/// Blocks the thread for the policy's delay after `page`.
pub fn pause(policy: &impl DelayPolicy, page: usize) {
    let delay = policy.delay_after(page);
    if !delay.is_zero() {
        tracing::debug!(page, delay_ms = delay.as_millis() as u64, "pausing before next page");
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_delay_ignores_page() {
        let policy = FixedDelay(Duration::from_secs(3));
        assert_eq!(policy.delay_after(0), Duration::from_secs(3));
        assert_eq!(policy.delay_after(7), Duration::from_secs(3));
    }

    #[test]
    fn test_closure_policy() {
        let policy = |page: usize| Duration::from_millis(page as u64 * 10);
        assert_eq!(policy.delay_after(2), Duration::from_millis(20));
        pause(&policy, 0);
    }
}
