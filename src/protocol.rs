use std::path::{Path, PathBuf};

use crate::record::MessageRecord;

/// Where the feed reads transcript lines from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Stdin,
    File(PathBuf),
}

impl FeedSource {
    /// `None` or `-` means stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => FeedSource::File(path.to_path_buf()),
            _ => FeedSource::Stdin,
        }
    }

    /// Short name for the toolbar and logs
    pub fn label(&self) -> String {
        match self {
            FeedSource::Stdin => "stdin".to_string(),
            FeedSource::File(path) => path.display().to_string(),
        }
    }
}

/// Events sent from the feed thread to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// The source was opened and reading started
    Opened(String),
    /// A decoded message record
    Record(MessageRecord),
    /// A line could not be decoded, or reading failed
    Error(String),
    /// No more records will arrive
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_source_from_arg() {
        assert_eq!(FeedSource::from_arg(None), FeedSource::Stdin);
        assert_eq!(FeedSource::from_arg(Some(Path::new("-"))), FeedSource::Stdin);
        assert_eq!(
            FeedSource::from_arg(Some(Path::new("log.jsonl"))),
            FeedSource::File(PathBuf::from("log.jsonl"))
        );
    }

    #[test]
    fn test_feed_source_label() {
        assert_eq!(FeedSource::Stdin.label(), "stdin");
        assert_eq!(FeedSource::File(PathBuf::from("a/b.jsonl")).label(), "a/b.jsonl");
    }
}
