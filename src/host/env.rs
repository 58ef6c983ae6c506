use crate::foundation::core::HostTime;
use crate::foundation::error::ScrollyResult;

/// Everything the director needs from the hosting page.
pub trait HostEnvironment {
    /// Current vertical scroll offset, non-negative.
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Make the page at least `height` tall so every step can be reached.
    fn set_min_page_height(&mut self, height: f64);
    /// Monotonic clock in milliseconds.
    fn now(&self) -> HostTime;
    /// Ask for one more display-refresh callback.
    ///
    /// Fails when the host cannot schedule frames at all.
    fn request_frame(&mut self) -> ScrollyResult<()>;
}

impl<H: HostEnvironment + ?Sized> HostEnvironment for &mut H {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn set_min_page_height(&mut self, height: f64) {
        (**self).set_min_page_height(height);
    }

    fn now(&self) -> HostTime {
        (**self).now()
    }

    fn request_frame(&mut self) -> ScrollyResult<()> {
        (**self).request_frame()
    }
}
