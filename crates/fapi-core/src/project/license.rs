//! License menu table and key validation
//!
//! The interactive loop lives in the CLI; this module is the pure part:
//! mapping a menu key to a choice and a choice to its template id. That
//! keeps the re-prompt loop testable without simulating a terminal.

/// The fixed license menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseChoice {
    ClosedSource,
    Mit,
    Apache2,
    Gpl2,
    Gpl3,
    None,
}

impl LicenseChoice {
    /// Menu entries in display order, keyed by the digit the user types
    pub const MENU: &'static [(&'static str, LicenseChoice)] = &[
        ("1", LicenseChoice::ClosedSource),
        ("2", LicenseChoice::Mit),
        ("3", LicenseChoice::Apache2),
        ("4", LicenseChoice::Gpl2),
        ("5", LicenseChoice::Gpl3),
        ("6", LicenseChoice::None),
    ];

    /// Validate raw menu input; anything but "1"-"6" is rejected
    pub fn from_key(input: &str) -> Option<LicenseChoice> {
        Self::MENU
            .iter()
            .find(|(key, _)| *key == input.trim())
            .map(|(_, choice)| *choice)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LicenseChoice::ClosedSource => "Closed Source",
            LicenseChoice::Mit => "MIT",
            LicenseChoice::Apache2 => "Apache 2.0",
            LicenseChoice::Gpl2 => "GPL v2",
            LicenseChoice::Gpl3 => "GPL v3",
            LicenseChoice::None => "None",
        }
    }

    /// Template id serving this license's text; `None` for no license
    pub fn template_id(&self) -> Option<&'static str> {
        match self {
            LicenseChoice::ClosedSource => Some("licenses/closed_source"),
            LicenseChoice::Mit => Some("licenses/mit"),
            LicenseChoice::Apache2 => Some("licenses/apache2"),
            LicenseChoice::Gpl2 => Some("licenses/gpl2"),
            LicenseChoice::Gpl3 => Some("licenses/gpl3"),
            LicenseChoice::None => None,
        }
    }
}
