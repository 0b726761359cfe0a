use std::future::Future;
use std::time::Duration;

use recall_core::{Notice, Notifier, Timer};

use crate::messages;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Shows notices as blocking browser alerts.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, notice: Notice) {
        log::info!("notice: {:?}", notice);
        gloo::dialogs::alert(&messages::notice_text(notice));
    }
}

/// Non-blocking sleep on the browser event loop.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo::timers::future::sleep(duration)
    }
}
