//! Dialog content sent back to the host for rendering.
//!
//! The snap does not render anything itself. An RPC response is a
//! [`DialogRequest`] whose content mirrors the host's panel primitives and
//! serializes to the host's wire shape, e.g. `{"type": "heading", "value": ...}`.

use serde::{Deserialize, Serialize};

/// The kind of dialog the host should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogType {
    /// A dialog with approve and reject buttons.
    Confirmation,
    /// A dialog with a single dismiss button.
    Alert,
}

/// A single node of dialog content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    /// A vertical container of other components.
    Panel {
        /// The contained components, rendered top to bottom.
        children: Vec<Component>,
    },
    /// A heading line.
    Heading {
        /// The heading text.
        value: String,
    },
    /// A markdown text line.
    Text {
        /// The text, with `**bold**` markup honored by the host.
        value: String,
    },
    /// A value the user can copy to the clipboard.
    Copyable {
        /// The copyable value.
        value: String,
    },
    /// A horizontal rule.
    Divider,
}

/// A request for the host to show a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    /// The dialog kind.
    #[serde(rename = "type")]
    pub dialog_type: DialogType,
    /// The dialog content.
    pub content: Component,
}

/// A vertical container of `children`.
pub fn panel(children: Vec<Component>) -> Component {
    Component::Panel { children }
}

/// A heading line.
pub fn heading(value: impl Into<String>) -> Component {
    Component::Heading { value: value.into() }
}

/// A markdown text line.
pub fn text(value: impl Into<String>) -> Component {
    Component::Text { value: value.into() }
}

/// A copyable value.
pub fn copyable(value: impl Into<String>) -> Component {
    Component::Copyable { value: value.into() }
}

/// A horizontal rule.
pub fn divider() -> Component {
    Component::Divider
}

impl DialogRequest {
    /// A confirmation dialog wrapping `content`.
    pub fn confirmation(content: Component) -> Self {
        Self { dialog_type: DialogType::Confirmation, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_host_wire_shape() {
        let dialog = DialogRequest::confirmation(panel(vec![
            heading("EthZip"),
            divider(),
            text("Original size: **2 bytes**"),
            copyable("0x60"),
        ]));

        assert_eq!(
            serde_json::to_value(&dialog).unwrap(),
            json!({
                "type": "confirmation",
                "content": {
                    "type": "panel",
                    "children": [
                        { "type": "heading", "value": "EthZip" },
                        { "type": "divider" },
                        { "type": "text", "value": "Original size: **2 bytes**" },
                        { "type": "copyable", "value": "0x60" },
                    ],
                },
            })
        );
    }

    #[test]
    fn roundtrips() {
        let dialog = DialogRequest::confirmation(panel(vec![heading("hi"), divider()]));
        let json = serde_json::to_string(&dialog).unwrap();
        assert_eq!(serde_json::from_str::<DialogRequest>(&json).unwrap(), dialog);
    }
}
