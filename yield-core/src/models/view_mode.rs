use serde::{Deserialize, Serialize};

/// The active presentation of the current schedule.
///
/// Selecting a mode is independent of whether a schedule exists; nothing
/// renders until one does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Table,
    Chart,
}

impl ViewMode {
    /// Fixed selector label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Chart => "Chart",
        }
    }
}
