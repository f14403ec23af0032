//! Browser wall clock.

use shelfdesk::Clock;

/// `Date.now()` in the browser; the OS clock elsewhere (tests, SSR tooling).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "csr"))]
        {
            shelfdesk::SystemClock.now_millis()
        }
    }
}
