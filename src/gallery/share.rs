//! Share links and clipboard access

/// Path segment between the base URL and the share token
pub const VIEW_PATH: &str = "/files/view/";

/// Build the public URL for a share token
///
/// The token may be empty; the link is still built.
///
/// # Examples
/// ```
/// use mediashelf::gallery::share_link;
///
/// assert_eq!(share_link("https://media.example.com/", "abc"), "https://media.example.com/files/view/abc");
/// ```
#[must_use]
pub fn share_link(base_url: &str, token: &str) -> String {
    format!("{}{VIEW_PATH}{token}", base_url.trim_end_matches('/'))
}

/// Destination for copied text
pub trait ClipboardSink {
    /// Place `text` on the clipboard
    ///
    /// # Errors
    /// Returns a description of the failure if the clipboard is unavailable.
    fn copy_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard; a handle is opened per copy and dropped right after
///
/// On Linux the clipboard is owned by the process that set it, so the copy
/// blocks until another program takes the contents over.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
        set_text(&mut clipboard, text).map_err(|e| format!("Clipboard error: {e}"))
    }
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text.to_owned())
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
