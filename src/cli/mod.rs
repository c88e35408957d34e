//! CLI command implementations

pub mod commands;
pub mod init;
pub mod listen;
pub mod resolve;

use voxdial::config::PlatformSettings;
use voxdial::{Config, PlatformProfile};

use crate::PlatformArgs;

/// Platform profile from config, with command-line flags taking precedence
pub fn platform_profile(config: &Config, args: &PlatformArgs) -> PlatformProfile {
    let mut settings: PlatformSettings = config.settings.platform.clone();

    if let Some(ua) = &args.user_agent {
        settings.user_agent = Some(ua.clone());
        settings.mobile = None;
        settings.android = None;
    }
    if args.mobile {
        settings.mobile = Some(true);
    }
    if args.android {
        settings.android = Some(true);
    }

    settings.profile()
}
