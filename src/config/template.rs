//! Default configuration file written by `voxdial init` and on first run

/// Default configuration content
pub const DEFAULT_CONFIG: &str = r#"# voxdial Configuration
# =====================
#
# Spoken transcripts are matched against the contacts and command phrases
# below. Special forms take precedence over phrase matching:
#
#   "call <name>"   - dials a contact from [contacts] (exact name only)
#   "whatsapp ..."  - WhatsApp app on mobile, WhatsApp Web elsewhere
#   "instagram ..." - Instagram app on mobile (web fallback), website elsewhere
#   "contact ..."   - contact picker (Android only)

# ============================================================================
# SETTINGS
# ============================================================================
#
# Available options:
#   match_threshold       - Max normalized edit distance for a phrase match, 0.0-1.0 (default: 0.3)
#   app_fallback_delay_ms - Wait before opening the web fallback of an app link (default: 2000)
#   whatsapp_message      - Text pre-filled in WhatsApp share links
#   welcome_message       - Spoken when listening starts (empty = silent)

[settings]
match_threshold = 0.3
app_fallback_delay_ms = 2000
whatsapp_message = "Hello World"
welcome_message = "Hey you there, Happy to see you back- Please speak..."

[settings.recognition]
language = "en-US"
continuous = true

# Platform capabilities. Explicit flags override user-agent detection.
# With nothing set, the platform is treated as desktop.
[settings.platform]
# mobile = true
# android = true
# user_agent = "Mozilla/5.0 (Linux; Android 14; Pixel 8) ..."

# ============================================================================
# CONTACTS - name = "phone number (digits only)"
# ============================================================================

[contacts]
abbu = "8797068762"
ammi = "7903780528"
fsl = "9123437796"
ksf = "9709921626"
safi = "7992217849"

# ============================================================================
# COMMANDS - phrase -> URL, tried in this order
# ============================================================================
#
# whatsapp:// and instagram:// URLs launch the app instead of a web page.

[[command]]
phrase = "gmail"
url = "https://gmail.com"

[[command]]
phrase = "youtube"
url = "https://youtube-dupl.onrender.com/"

[[command]]
phrase = "instagram"
url = "instagram://app"

[[command]]
phrase = "gram"
url = "https://www.instagram.com/?next=https%3A%2F%2Fwww.instagram.com%2Fdirect%2Ft%2F17844984425941519%2F%3Fhl%3Den%26__coig_login%3D1"

[[command]]
phrase = "facebook"
url = "https://www.facebook.com"

[[command]]
phrase = "portfolio"
url = "https://my-portfolio-1tju.onrender.com"

[[command]]
phrase = "linkedin"
url = "https://in.linkedin.com/in/sharique01"

[[command]]
phrase = "gethub"
url = "https://github.com/Ahmadbyte"

[[command]]
phrase = "whatsapp"
url = "whatsapp://send?text=Hello%20World"
"#;
