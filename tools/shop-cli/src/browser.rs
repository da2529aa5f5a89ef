//! The terminal standing in for the store page.

use shop_core::{Browser, Notice};
use url::Url;

use crate::output::Output;

/// Page host that prints instead of rendering.
///
/// Navigation cannot leave the terminal, so the hosted checkout URL is
/// printed and kept for the command to report.
pub struct TerminalBrowser {
    location: Url,
    output: Output,
    redirect: Option<Url>,
    last_notice: Option<Notice>,
}

impl TerminalBrowser {
    pub fn new(location: Url, output: Output) -> Self {
        Self {
            location,
            output,
            redirect: None,
            last_notice: None,
        }
    }

    /// Hosted checkout the store tried to open.
    pub fn redirect(&self) -> Option<&Url> {
        self.redirect.as_ref()
    }

    /// Most recent notice shown.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }
}

impl Browser for TerminalBrowser {
    fn location(&self) -> Url {
        self.location.clone()
    }

    fn navigate(&mut self, url: &Url) {
        self.output.success(&format!("Continue to checkout: {}", url));
        self.redirect = Some(url.clone());
    }

    fn replace_location(&mut self, url: Url) {
        self.output.debug(&format!("Address is now {}", url));
        self.location = url;
    }

    fn notify(&mut self, notice: &Notice) {
        if notice.is_error() {
            self.output.error(&notice.message());
        } else {
            self.output.success(&notice.message());
        }
        self.last_notice = Some(notice.clone());
    }
}
