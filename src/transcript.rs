//! Chat transcripts stored as a JSON array of [`Message`]s.
//!
//! ```json
//! [
//!   {"role": "user", "content": "Show me the team"},
//!   {"role": "assistant", "content": "| Name | Age |\n| --- | --- |\n| Alice | 30 |\n",
//!    "mode": "workspace", "sources": ["Document_1.pdf"]}
//! ]
//! ```
//!
//! Only `role` and `content` are required; see [`Message`] for defaults.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::message::Message;

/// Read a transcript from any reader.
pub fn load<R: Read>(reader: R) -> Result<Vec<Message>> {
    let messages: Vec<Message> = serde_json::from_reader(reader)?;
    if messages.is_empty() {
        return Err(Error::EmptyTranscript);
    }

    debug!("Loaded transcript with {} messages", messages.len());
    Ok(messages)
}

/// Read a transcript from a file.
pub fn load_path(path: &Path) -> Result<Vec<Message>> {
    let file = File::open(path)?;
    load(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ChatMode, Role};

    #[test]
    fn loads_messages_in_order() {
        let json = r#"[
            {"role": "user", "content": "Show me the team"},
            {"role": "assistant", "content": "| Name |\n|---|\n| Alice |\n", "mode": "general"}
        ]"#;
        let messages = load(json.as_bytes()).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].mode, ChatMode::General);
    }

    #[test]
    fn empty_transcript_is_an_error() {
        let err = load("[]".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::EmptyTranscript));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = load(r#"[{"role": "robot", "content": "beep"}]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");
        std::fs::write(&path, r#"[{"role": "assistant", "content": "hi"}]"#).unwrap();
        let messages = load_path(&path).unwrap();
        assert_eq!(messages[0].content, "hi");
    }
}
