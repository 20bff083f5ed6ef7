//! Desktop notification sink for the timer.

use std::io::Write;

use notify_rust::Notification;

use workdesk_core::{CompletionNotice, Notifier};

/// Rings the terminal bell and posts a desktop notification.
/// Both are fire-and-forget; a headless session just stays quiet.
pub struct DesktopNotifier {
    sound: bool,
}

impl DesktopNotifier {
    pub fn new(sound: bool) -> Self {
        Self { sound }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notice: &CompletionNotice) {
        if self.sound {
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
        let _ = Notification::new()
            .summary(&notice.title)
            .body(&notice.body)
            .appname("workdesk")
            .show();
    }
}
