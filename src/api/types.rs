//! Kernel enums and records shared across endpoint groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Block-level node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    NodeNotebook,
    NodeFolder,
    NodeDocument,
    NodeSuperBlock,
    NodeBlockquote,
    NodeList,
    NodeListItem,
    NodeHeading,
    NodeParagraph,
    NodeMathBlock,
    NodeTable,
    NodeCodeBlock,
    NodeHTMLBlock,
    NodeBlockQueryEmbed,
    NodeAttributeView,
    NodeThematicBreak,
    NodeAudio,
    NodeVideo,
    NodeIFrame,
    NodeWidget,
}

/// Short block type codes as stored in the `blocks` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    /// Document.
    D,
    /// Super block.
    S,
    /// Blockquote.
    B,
    /// List.
    L,
    /// List item.
    I,
    /// Heading.
    H,
    /// Paragraph.
    P,
    /// Math.
    M,
    /// Table.
    T,
    /// Code.
    C,
    Html,
    QueryEmbed,
    /// Thematic break.
    Tb,
    Audio,
    Video,
    Iframe,
    Widget,
}

impl BlockType {
    /// Container blocks hold other blocks.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::D | Self::S | Self::B | Self::L | Self::I)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BlockSubType {
    #[serde(rename = "h1")]
    H1,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "h3")]
    H3,
    #[serde(rename = "h4")]
    H4,
    #[serde(rename = "h5")]
    H5,
    #[serde(rename = "h6")]
    H6,
    /// Unordered list.
    #[serde(rename = "u")]
    U,
    /// Ordered list.
    #[serde(rename = "o")]
    O,
    /// Task list.
    #[serde(rename = "t")]
    T,
    #[default]
    #[serde(rename = "")]
    None,
}

/// Content format of block write payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Markdown,
    Dom,
}

macro_rules! numeric_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u8", try_from = "u8")]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err(format!("invalid {} value {other}", stringify!($name))),
                }
            }
        }
    };
}

numeric_enum! {
    /// How a full-text search query is interpreted.
    SearchMethod {
        Keyword = 0,
        QuerySyntax = 1,
        Sql = 2,
        Regex = 3,
    }
}

numeric_enum! {
    GroupBy {
        NoGroup = 0,
        /// Group hits by document.
        Document = 1,
    }
}

numeric_enum! {
    OrderBy {
        /// Block type; the kernel default.
        Type = 0,
        CreatedAsc = 1,
        CreatedDesc = 2,
        ModifiedAsc = 3,
        ModifiedDesc = 4,
        /// Original content order; only with document grouping.
        Content = 5,
        RankAsc = 6,
        RankDesc = 7,
    }
}

numeric_enum! {
    /// Document tree sort modes.
    SortMode {
        NameAsc = 0,
        NameDesc = 1,
        UpdatedAsc = 2,
        UpdatedDesc = 3,
        AlphanumAsc = 4,
        AlphanumDesc = 5,
        Custom = 6,
        RefCountAsc = 7,
        RefCountDesc = 8,
        CreatedAsc = 9,
        CreatedDesc = 10,
        SizeAsc = 11,
        SizeDesc = 12,
        SubDocCountAsc = 13,
        SubDocCountDesc = 14,
        /// Follow the file tree's configured order.
        FileTree = 15,
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort: i64,
    #[serde(default)]
    pub sort_mode: Option<i64>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub new_flashcard_count: i64,
    #[serde(default)]
    pub due_flashcard_count: i64,
    #[serde(default)]
    pub flashcard_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotebookConf {
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub ref_create_save_path: String,
    #[serde(default)]
    pub create_doc_name_template: String,
    #[serde(default)]
    pub daily_note_save_path: String,
    #[serde(default)]
    pub daily_note_template_path: String,
    #[serde(default)]
    pub doc_create_save_path: String,
    #[serde(default)]
    pub sort: i64,
    #[serde(default)]
    pub sort_mode: i64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One write operation inside a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub action: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "parentID")]
    pub parent_id: Option<String>,
    #[serde(default, rename = "previousID")]
    pub previous_id: Option<String>,
    #[serde(default, rename = "nextID")]
    pub next_id: Option<String>,
    #[serde(default)]
    pub retain_data: Option<Value>,
}

/// Transactions returned by block writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub timestamp: i64,
    pub do_operations: Vec<Operation>,
    #[serde(default)]
    pub undo_operations: Option<Vec<Operation>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetType {
    Css,
    Js,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SnippetType,
    pub enabled: bool,
    pub content: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
