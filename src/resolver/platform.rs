//! Platform capability predicate injected into the resolver.

use serde::{Deserialize, Serialize};

/// User-agent fragments that identify a mobile-class device
const MOBILE_UA_MARKERS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "webos",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// What the host device can do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// Mobile-class device: app schemes are preferred over web URLs
    pub mobile: bool,
    /// Android-like device: intent-style actions (contact picker) are available
    pub android: bool,
}

impl PlatformProfile {
    pub fn desktop() -> Self {
        Self::default()
    }

    pub fn mobile() -> Self {
        Self {
            mobile: true,
            android: false,
        }
    }

    pub fn android() -> Self {
        Self {
            mobile: true,
            android: true,
        }
    }

    /// Best-effort detection from a browser user-agent string
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        let android = ua.contains("android");
        let mobile = MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker));
        Self { mobile, android }
    }
}

impl std::fmt::Display for PlatformProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.mobile, self.android) {
            (_, true) => write!(f, "android"),
            (true, false) => write!(f, "mobile"),
            (false, false) => write!(f, "desktop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_detection() {
        let pixel = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";
        assert_eq!(PlatformProfile::from_user_agent(pixel), PlatformProfile::android());

        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        assert_eq!(PlatformProfile::from_user_agent(iphone), PlatformProfile::mobile());

        let mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Safari/605.1.15";
        assert_eq!(PlatformProfile::from_user_agent(mac), PlatformProfile::desktop());
    }

    #[test]
    fn test_display() {
        assert_eq!(PlatformProfile::desktop().to_string(), "desktop");
        assert_eq!(PlatformProfile::mobile().to_string(), "mobile");
        assert_eq!(PlatformProfile::android().to_string(), "android");
    }
}
