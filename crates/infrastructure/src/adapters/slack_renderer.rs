//! Slack message rendering
//!
//! Converts transport-neutral report payloads into `chat.postMessage`
//! request bodies: a markdown `text` block plus one attachment per panel.

use application::ports::OutgoingChatMessage;
use domain::{Field, Report, ReportPayload};
use serde::Serialize;
use serde_json::{Value, json};

/// Renders outgoing messages as Slack message JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct SlackMessageRenderer;

#[derive(Debug, Serialize)]
struct SlackAttachment<'a> {
    color: &'static str,
    fields: Vec<SlackField<'a>>,
}

#[derive(Debug, Serialize)]
struct SlackField<'a> {
    title: &'a str,
    value: &'a str,
    short: bool,
}

impl<'a> From<&'a Field> for SlackField<'a> {
    fn from(field: &'a Field) -> Self {
        Self {
            title: &field.label,
            value: &field.value,
            short: field.short,
        }
    }
}

impl SlackMessageRenderer {
    /// Create a renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render a complete message body, including channel and thread
    #[must_use]
    pub fn render(&self, message: &OutgoingChatMessage) -> Value {
        let mut body = self.render_payload(&message.payload);
        if let Value::Object(ref mut map) = body {
            map.insert("channel".to_string(), json!(message.channel));
            if let Some(ref thread_ts) = message.thread_ts {
                map.insert("thread_ts".to_string(), json!(thread_ts));
            }
        }
        body
    }

    /// Render only the payload part of a message body
    #[must_use]
    pub fn render_payload(&self, payload: &ReportPayload) -> Value {
        match payload {
            ReportPayload::NoData { text } => json!({ "text": text }),
            ReportPayload::Report(report) => Self::render_report(report),
        }
    }

    fn render_report(report: &Report) -> Value {
        let mut text = format!("*{}*\n{}", report.title, report.raw_text);
        for field in &report.header {
            text.push_str(&format!("\n*{}:* {}", field.label, field.value));
        }

        let attachments: Vec<SlackAttachment<'_>> = report
            .panels
            .iter()
            .map(|panel| SlackAttachment {
                color: panel.color.hex(),
                fields: panel.fields.iter().map(SlackField::from).collect(),
            })
            .collect();

        let mut body = json!({
            "text": text,
            "attachments": attachments,
        });
        if let (Some(icon_url), Value::Object(map)) = (&report.icon_url, &mut body) {
            map.insert("icon_url".to_string(), json!(icon_url));
        }
        body
    }
}
