use crate::model::AssetRecord;

pub mod browse;
pub mod facets;
pub mod init;
pub mod show;

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

/// Structured outcome of a command, consumed by whatever client is
/// driving the library. No formatting, no I/O.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<AssetRecord>,
    pub facet_counts: Vec<(String, usize)>,
    /// Records matching the query and filters, independent of how many
    /// pages were loaded.
    pub total_matched: usize,
    pub has_more: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<AssetRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_facet_counts(mut self, counts: Vec<(String, usize)>) -> Self {
        self.facet_counts = counts;
        self
    }

    pub fn with_total_matched(mut self, total: usize) -> Self {
        self.total_matched = total;
        self
    }

    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }
}
