//! Copying rendered text to the clipboard
//!
//! The platform clipboard is tried first. When it is unavailable (headless
//! sessions, SSH, some terminals) the text is sent through the OSC 52
//! escape sequence, which most terminal emulators forward to the system
//! clipboard. The sequence goes to standard error so it never mixes with
//! output written to standard output.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ClipboardError;

/// Something that can place text on a clipboard
pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Short label used in logs
    fn name(&self) -> &str {
        "custom"
    }
}

/// The platform clipboard through `arboard`
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block in `write_text` until another program takes the selection
    ///
    /// X11 and Wayland selections are served by the owning process, so a
    /// short-lived program must wait or its copy vanishes when it exits.
    /// Only has an effect on Linux.
    pub fn wait_until_replaced(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        // Opened lazily: constructing it can fail without a display server
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let wait = self.wait;
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("not initialised".to_string()));
        };

        #[cfg(target_os = "linux")]
        {
            if wait {
                use arboard::SetExtLinux;
                log::debug!("clipboard: serving selection until it is replaced");
                return clipboard
                    .set()
                    .wait()
                    .text(text.to_string())
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()));
            }
        }
        #[cfg(not(target_os = "linux"))]
        let _ = wait;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Terminal clipboard through the OSC 52 escape sequence
pub struct Osc52Clipboard<W: Write> {
    out: W,
    label: &'static str,
}

impl Osc52Clipboard<io::Stderr> {
    /// Write the sequence to standard error
    pub fn stderr() -> Self {
        Self {
            out: io::stderr(),
            label: "osc52:stderr",
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out, label: "osc52" }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Build the OSC 52 sequence that sets the clipboard selection to `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        self.label
    }
}

/// Clipboard with a primary backend and an optional fallback
pub struct Clipboard {
    primary: Box<dyn ClipboardBackend>,
    fallback: Option<Box<dyn ClipboardBackend>>,
}

impl Clipboard {
    pub fn new(primary: Box<dyn ClipboardBackend>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// Set the backend used when the primary one fails
    pub fn with_fallback(mut self, fallback: Box<dyn ClipboardBackend>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Platform clipboard with OSC 52 on stderr as fallback
    pub fn system() -> Self {
        Self::system_with(SystemClipboard::new())
    }

    /// Like [`Clipboard::system`], with a configured platform clipboard
    pub fn system_with(system: SystemClipboard) -> Self {
        Self::new(Box::new(system)).with_fallback(Box::new(Osc52Clipboard::stderr()))
    }

    /// Backend names in the order they are tried
    pub fn backend_names(&self) -> Vec<&str> {
        std::iter::once(self.primary.name())
            .chain(self.fallback.as_ref().map(|f| f.name()))
            .collect()
    }

    /// Copy `text`, returning whether any backend accepted it
    pub fn copy(&mut self, text: &str) -> bool {
        match self.primary.write_text(text) {
            Ok(()) => return true,
            Err(e) => log::warn!("clipboard: {} backend failed: {}", self.primary.name(), e),
        }

        let Some(fallback) = self.fallback.as_mut() else {
            return false;
        };
        match fallback.write_text(text) {
            Ok(()) => {
                log::debug!("clipboard: copied through {}", fallback.name());
                true
            }
            Err(e) => {
                log::warn!("clipboard: {} backend failed: {}", fallback.name(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records what was written, or fails every write
    struct MockBackend {
        written: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl MockBackend {
        fn new(fail: bool) -> (Self, Rc<RefCell<Vec<String>>>) {
            let written = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    written: Rc::clone(&written),
                    fail,
                },
                written,
            )
        }
    }

    impl ClipboardBackend for MockBackend {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("mock".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_primary_success() {
        let (primary, primary_log) = MockBackend::new(false);
        let (fallback, fallback_log) = MockBackend::new(false);
        let mut clipboard = Clipboard::new(Box::new(primary)).with_fallback(Box::new(fallback));

        assert!(clipboard.copy("hello"));
        assert_eq!(*primary_log.borrow(), vec!["hello".to_string()]);
        assert!(fallback_log.borrow().is_empty());
    }

    #[test]
    fn test_fallback_used_on_failure() {
        let (primary, _) = MockBackend::new(true);
        let (fallback, fallback_log) = MockBackend::new(false);
        let mut clipboard = Clipboard::new(Box::new(primary)).with_fallback(Box::new(fallback));

        assert!(clipboard.copy("hello"));
        assert_eq!(*fallback_log.borrow(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_both_fail() {
        let (primary, _) = MockBackend::new(true);
        let (fallback, _) = MockBackend::new(true);
        let mut clipboard = Clipboard::new(Box::new(primary)).with_fallback(Box::new(fallback));
        assert!(!clipboard.copy("hello"));
    }

    #[test]
    fn test_no_fallback() {
        let (primary, _) = MockBackend::new(true);
        let mut clipboard = Clipboard::new(Box::new(primary));
        assert!(!clipboard.copy("hello"));
    }

    #[test]
    fn test_system_fallback_stays_off_stdout() {
        // Rendered text goes to stdout, so the escape sequence must not
        let clipboard = Clipboard::system();
        assert_eq!(clipboard.backend_names(), vec!["system", "osc52:stderr"]);
    }

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_writes_to_sink() {
        let mut backend = Osc52Clipboard::new(Vec::new());
        backend.write_text("hi").unwrap();
        assert_eq!(backend.into_inner(), b"\x1b]52;c;aGk=\x07".to_vec());
    }
}
