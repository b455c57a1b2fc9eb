//! Accessibility labels for popup chrome controls.
//!
//! Labels are stable identifiers automation tools use to find a control, built
//! as `{prefix}_{control}` where the prefix comes from the popup's kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The family a popup belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PopupKind {
    CountdownPicker,
    DatePicker,
    TimerPicker,
    NumberSelector,
    List,
    Picker,
    Custom,
    /// Any popup without a dedicated prefix
    #[default]
    Generic,
}

impl PopupKind {
    pub fn prefix(self) -> &'static str {
        match self {
            PopupKind::CountdownPicker => "Popup_CountdownPicker",
            PopupKind::DatePicker => "Popup_DatePicker",
            PopupKind::TimerPicker => "Popup_TimerPicker",
            PopupKind::NumberSelector => "Popup_NumberSelector",
            PopupKind::List => "Popup_List",
            PopupKind::Picker => "Popup_Picker",
            PopupKind::Custom => "Popup_Custom",
            PopupKind::Generic => "Popup",
        }
    }

    pub fn label(self, control: Control) -> String {
        format!("{}_{}", self.prefix(), control)
    }
}

/// Interactive controls of the popup chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Back,
    Switch,
    Cancel,
    Confirm,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Control::Back => "Back",
            Control::Switch => "Switch",
            Control::Cancel => "Cancel",
            Control::Confirm => "Confirm",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_have_dedicated_prefix() {
        assert_eq!(PopupKind::DatePicker.label(Control::Confirm), "Popup_DatePicker_Confirm");
        assert_eq!(PopupKind::List.label(Control::Switch), "Popup_List_Switch");
        assert_eq!(PopupKind::Custom.label(Control::Cancel), "Popup_Custom_Cancel");
    }

    #[test]
    fn test_generic_falls_back_to_plain_prefix() {
        assert_eq!(PopupKind::default().label(Control::Cancel), "Popup_Cancel");
        assert_eq!(PopupKind::Generic.label(Control::Back), "Popup_Back");
    }
}
