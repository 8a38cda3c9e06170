//! Bootstrap alert markup.
//!
//! Messages are stored per [`MessageType`] under an optional key, either for
//! the current render or for the next one (after a redirect), and rendered as
//! `<div class="alert ...">` blocks.
//! <https://getbootstrap.com/docs/3.4/components/#alerts>

use core::fmt::{self, Display, Formatter};
use std::collections::HashMap;

/// Close label used when none is given.
pub const DEFAULT_CLOSE_TEXT: &str = "Close";

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Green
    Success,
    /// Red
    Danger,
    /// Blue
    Info,
    /// Yellow
    Warning,
}

impl MessageType {
    /// All message types in render order.
    pub const ALL: [Self; 4] = [Self::Success, Self::Danger, Self::Info, Self::Warning];

    /// Name used in storage keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Danger => "Danger",
            Self::Info => "Info",
            Self::Warning => "Warning",
        }
    }

    /// Contextual class, e.g. `alert-danger`.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Info => "alert-info",
            Self::Warning => "alert-warning",
        }
    }
}

impl Display for MessageType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Storage key for `message_type`, scoped by an optional filter key.
pub fn make_key(key: Option<&str>, message_type: MessageType) -> String {
    match key.map(str::trim) {
        Some(scope) if !scope.is_empty() => format!("{scope}_{}", message_type.name()),
        _ => message_type.name().to_owned(),
    }
}

/// How alerts are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertOptions {
    /// Label of the close button
    pub close_text: String,
    /// Render a close button
    pub dismissible: bool,
    /// Add the fade-in animation (dismissible alerts only)
    pub fade: bool,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            close_text: DEFAULT_CLOSE_TEXT.to_owned(),
            dismissible: false,
            fade: false,
        }
    }
}

impl AlertOptions {
    /// Dismissible alerts with the default close label.
    pub fn dismissible() -> Self {
        Self {
            dismissible: true,
            ..Self::default()
        }
    }

    /// Enable or disable the fade animation.
    #[must_use]
    pub fn with_fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    /// Set the close button label.
    #[must_use]
    pub fn with_close_text(mut self, close_text: impl Into<String>) -> Self {
        self.close_text = close_text.into();
        self
    }
}

/// Pending alert messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertStore {
    view: HashMap<String, String>,
    flash: HashMap<String, String>,
}

impl AlertStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `message`, for this render or, with `show_after_redirect`, the next one.
    pub fn alert(
        &mut self,
        message_type: MessageType,
        message: impl Into<String>,
        show_after_redirect: bool,
        key: Option<&str>,
    ) {
        let slot = make_key(key, message_type);
        let scope = if show_after_redirect {
            &mut self.flash
        } else {
            &mut self.view
        };
        scope.insert(slot, message.into());
    }

    /// Whether any alert is queued under `key`.
    pub fn has_alert(&self, key: Option<&str>) -> bool {
        MessageType::ALL
            .into_iter()
            .any(|message_type| self.has_alert_of(message_type, key))
    }

    /// Whether an alert of `message_type` is queued under `key`.
    pub fn has_alert_of(&self, message_type: MessageType, key: Option<&str>) -> bool {
        let slot = make_key(key, message_type);
        self.view.contains_key(&slot) || self.flash.contains_key(&slot)
    }

    /// Message for `message_type` under `key`; the current render wins over flash.
    pub fn message(&self, message_type: MessageType, key: Option<&str>) -> Option<&str> {
        let slot = make_key(key, message_type);
        self.view
            .get(&slot)
            .or_else(|| self.flash.get(&slot))
            .map(String::as_str)
    }

    /// Drop the messages kept for the next render.
    pub fn clear_flash(&mut self) {
        self.flash.clear();
    }

    /// Render every non-blank alert queued under `key`, in message type order.
    pub fn render_alerts(&self, options: &AlertOptions, key: Option<&str>) -> String {
        let mut html = String::new();
        for message_type in MessageType::ALL {
            let Some(message) = self.message(message_type, key).map(str::trim) else {
                continue;
            };
            if message.is_empty() {
                continue;
            }
            html.push_str(&render_alert(message_type, message, options));
        }
        tracing::debug!("render_alerts: key={key:?}, bytes={}", html.len());
        html
    }
}

/// Render one alert. `text` is trusted markup and inserted as is.
pub fn render_alert(message_type: MessageType, text: &str, options: &AlertOptions) -> String {
    let close_text = if options.close_text.trim().is_empty() {
        DEFAULT_CLOSE_TEXT
    } else {
        options.close_text.as_str()
    };

    let mut classes = vec!["alert", message_type.css_class()];
    if options.dismissible {
        classes.push("alert-dismissible");
        if options.fade {
            classes.push("fade in");
        }
    }

    let mut html = format!(r#"<div class="{}" role="alert">"#, classes.join(" "));
    if options.dismissible {
        let label = escape_attribute(close_text);
        html.push_str(&format!(
            r#"<button type="button" class="close" data-dismiss="alert" aria-label="{label}" title="{label}"><span aria-hidden="true">&times;</span></button>"#
        ));
    }
    html.push_str(text);
    html.push_str("</div>");
    html
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
