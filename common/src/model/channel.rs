use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales channel the marketing request is for.
///
/// Serialized in lowercase (`"retail"`, `"ecommerce"`, ...), which is also the
/// value written to the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Retail,
    Ecommerce,
    Inline,
    Kiosk,
}

impl Channel {
    /// Every channel, in the order the form lists them.
    pub const ALL: [Channel; 4] = [
        Channel::Retail,
        Channel::Ecommerce,
        Channel::Inline,
        Channel::Kiosk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Retail => "retail",
            Channel::Ecommerce => "ecommerce",
            Channel::Inline => "inline",
            Channel::Kiosk => "kiosk",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
