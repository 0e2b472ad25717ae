//! Request payload shapes for the three tracked properties of a task row.
//!
//! The property names ("tarea", "fecha", "Status") are fixed by the external
//! database schema. A property left as `None` is omitted from the payload
//! entirely, so a partial update never touches it; an explicitly provided
//! empty string is still sent, which is how a caller clears a field.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskProperties {
    #[serde(rename = "tarea", skip_serializing_if = "Option::is_none")]
    task: Option<TitleValue>,

    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    due: Option<DateValue>,

    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    status: Option<StatusValue>,
}

impl TaskProperties {
    pub fn new(task_text: &str, date: &str, status: &str) -> Self {
        Self::default()
            .with_task(task_text)
            .with_due(date)
            .with_status(status)
    }

    pub fn with_task(self, task_text: &str) -> Self {
        Self {
            task: Some(TitleValue::new(task_text)),
            ..self
        }
    }

    pub fn with_due(self, date: &str) -> Self {
        Self {
            due: Some(DateValue::new(date)),
            ..self
        }
    }

    pub fn with_status(self, status: &str) -> Self {
        Self {
            status: Some(StatusValue::new(status)),
            ..self
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct TitleValue {
    title: Vec<RichText>,
}

impl TitleValue {
    fn new(content: &str) -> Self {
        Self {
            title: vec![RichText {
                text: TextContent {
                    content: content.to_string(),
                },
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct RichText {
    text: TextContent,
}

#[derive(Debug, Clone, Serialize)]
struct TextContent {
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct DateValue {
    date: DateRange,
}

impl DateValue {
    fn new(start: &str) -> Self {
        Self {
            date: DateRange {
                start: start.to_string(),
                end: None,
            },
        }
    }
}

// The end date is always serialized as an explicit null; the tracked schema
// uses single dates only.
#[derive(Debug, Clone, Serialize)]
struct DateRange {
    start: String,
    end: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct StatusValue {
    status: StatusName,
}

impl StatusValue {
    fn new(name: &str) -> Self {
        Self {
            status: StatusName {
                name: name.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct StatusName {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_full_properties_serialize_in_documented_shape() -> Result<()> {
        let properties =
            TaskProperties::new("Buy milk", "2024-01-01T00:00:00Z", "Not started");

        assert_eq!(
            serde_json::to_value(&properties)?,
            json!({
                "tarea": {"title": [{"text": {"content": "Buy milk"}}]},
                "fecha": {"date": {"start": "2024-01-01T00:00:00Z", "end": null}},
                "Status": {"status": {"name": "Not started"}}
            })
        );

        Ok(())
    }

    #[test]
    fn test_omitted_properties_are_absent_from_the_payload() -> Result<()> {
        let properties = TaskProperties::default().with_status("Done");

        assert_eq!(
            serde_json::to_value(&properties)?,
            json!({"Status": {"status": {"name": "Done"}}})
        );

        Ok(())
    }

    #[test]
    fn test_empty_task_text_is_sent_not_skipped() -> Result<()> {
        let properties = TaskProperties::default().with_task("");

        assert_eq!(
            serde_json::to_value(&properties)?,
            json!({"tarea": {"title": [{"text": {"content": ""}}]}})
        );

        Ok(())
    }
}
