//! Export format profiles
//!
//! Both export variants share one code path and differ only by the
//! profile passed in.

use chrono::{DateTime, Utc};

/// Dense `YYYYMMDDHHMMSS` timestamp used in export file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// File filter offered by the open dialog
pub const OPEN_ACCEPT: &str = "text/plain, .dt";

/// Format descriptor parameterizing an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatProfile {
    pub mime_type: &'static str,
    pub extension: &'static str,
    pub filename_prefix: &'static str,
}

impl FormatProfile {
    pub const PLAIN_NOTE: FormatProfile = FormatProfile {
        mime_type: "text/plain",
        extension: ".txt",
        filename_prefix: "note_",
    };

    pub const STRUCTURED_DUMP: FormatProfile = FormatProfile {
        mime_type: "text/dotlin",
        extension: ".dt",
        filename_prefix: "savedump_",
    };

    /// `prefix + YYYYMMDDHHMMSS + extension`
    pub fn file_name(&self, at: DateTime<Utc>) -> String {
        format!("{}{}{}", self.filename_prefix, at.format(TIMESTAMP_FORMAT), self.extension)
    }
}

/// Names the two export profiles, for dispatch tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    PlainNote,
    StructuredDump,
}

impl ProfileKind {
    pub fn profile(self) -> FormatProfile {
        match self {
            ProfileKind::PlainNote => FormatProfile::PLAIN_NOTE,
            ProfileKind::StructuredDump => FormatProfile::STRUCTURED_DUMP,
        }
    }
}
