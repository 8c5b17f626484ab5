//! Native browser confirmation prompt.

/// Ask the user to confirm `message`. Without a browser there is nobody to
/// ask, so the action proceeds.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}
