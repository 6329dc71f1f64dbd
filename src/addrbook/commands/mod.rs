use crate::model::AddressRecord;

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the caller: records to display, records it
/// touched, and user-facing messages. Presentation is someone else's job.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<AddressRecord>,
    pub affected: Vec<AddressRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<AddressRecord>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_affected(mut self, records: Vec<AddressRecord>) -> Self {
        self.affected = records;
        self
    }
}
