//! Built-in commands and contacts used when no config overrides them

use super::action::{CommandEntry, ContactEntry};

/// Default (phrase, url) pairs, in registry order
pub const DEFAULT_COMMANDS: &[(&str, &str)] = &[
    ("gmail", "https://gmail.com"),
    ("youtube", "https://youtube-dupl.onrender.com/"),
    ("instagram", "instagram://app"),
    (
        "gram",
        "https://www.instagram.com/?next=https%3A%2F%2Fwww.instagram.com%2Fdirect%2Ft%2F17844984425941519%2F%3Fhl%3Den%26__coig_login%3D1",
    ),
    ("facebook", "https://www.facebook.com"),
    ("portfolio", "https://my-portfolio-1tju.onrender.com"),
    ("linkedin", "https://in.linkedin.com/in/sharique01"),
    ("gethub", "https://github.com/Ahmadbyte"),
    ("whatsapp", "whatsapp://send?text=Hello%20World"),
];

/// Default (name, phone number) pairs
pub const DEFAULT_CONTACTS: &[(&str, &str)] = &[
    ("safi", "7992217849"),
    ("ammi", "7903780528"),
    ("abbu", "8797068762"),
    ("fsl", "9123437796"),
    ("ksf", "9709921626"),
];

pub fn default_commands() -> Vec<CommandEntry> {
    DEFAULT_COMMANDS
        .iter()
        .map(|(phrase, url)| CommandEntry::new(*phrase, url))
        .collect()
}

pub fn default_contacts() -> Vec<ContactEntry> {
    DEFAULT_CONTACTS
        .iter()
        .map(|(name, number)| ContactEntry {
            name: name.to_string(),
            phone_number: number.to_string(),
        })
        .collect()
}
