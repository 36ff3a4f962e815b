//! User-agent sniffing for browser-specific workarounds.

pub fn is_android_agent(agent: &str) -> bool {
    agent.to_lowercase().contains("android")
}

pub fn is_firefox_agent(agent: &str) -> bool {
    agent.to_lowercase().contains("firefox")
}

/// Firefox on Android stutters when the constellation paints mid-scroll.
pub fn needs_scroll_pause(agent: &str) -> bool {
    is_android_agent(agent) && is_firefox_agent(agent)
}

/// The browser's `navigator.userAgent`, or `None` outside a window.
pub fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANDROID_FIREFOX: &str =
        "Mozilla/5.0 (Android 14; Mobile; rv:128.0) Gecko/128.0 Firefox/128.0";
    const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/126.0.0.0 Mobile Safari/537.36";
    const DESKTOP_FIREFOX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

    #[test]
    fn detects_android_firefox() {
        assert!(needs_scroll_pause(ANDROID_FIREFOX));
    }

    #[test]
    fn other_browsers_do_not_pause() {
        assert!(!needs_scroll_pause(ANDROID_CHROME));
        assert!(!needs_scroll_pause(DESKTOP_FIREFOX));
        assert!(!needs_scroll_pause(""));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_android_agent("ANDROID"));
        assert!(is_firefox_agent("FireFox"));
    }
}
