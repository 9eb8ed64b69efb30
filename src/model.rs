//! The authored content the typesetter consumes.
//!
//! These types mirror the JSON the content API hands out (camelCase keys,
//! a `type` tag next to a loosely-shaped `content` object). Parsing is
//! deliberately forgiving: a block whose content is missing or malformed
//! still deserializes, with empty strings standing in for whatever couldn't
//! be read, and a block with an unknown `type` becomes
//! [BlockContent::Unsupported] so that the renderer can skip it.

use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Everything needed to render one export
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportData {
    #[serde(deserialize_with = "lenient_string")]
    pub project_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub pages: Vec<Page>,
    pub brand_kit: Option<BrandKit>,
}

impl ExportData {
    pub fn new<S: ToString>(project_title: S) -> ExportData {
        ExportData {
            project_title: project_title.to_string(),
            ..Default::default()
        }
    }

    /// Parse export data from the JSON produced by the content API
    pub fn from_json(json: &str) -> Result<ExportData> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_page(mut self, page: Page) -> ExportData {
        self.pages.push(page);
        self
    }

    pub fn with_brand_kit(mut self, brand_kit: BrandKit) -> ExportData {
        self.brand_kit = Some(brand_kit);
        self
    }
}

/// Optional brand styling. Colours are CSS hex strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandKit {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    /// Font preferences are carried through but not used: output is always
    /// set in the standard Helvetica family
    pub fonts: Option<Value>,
}

/// One authored page: a title and its blocks. Authored pages are sections of
/// the output, not physical sheets; several can share one output page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new<S: ToString>(id: S, title: S) -> Page {
        Page {
            id: id.to_string(),
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: Block) -> Page {
        self.blocks.push(block);
        self
    }

    /// The page's blocks in ascending `order`. Blocks sharing an `order`
    /// keep their input sequence
    pub fn sorted_blocks(&self) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self.blocks.iter().collect();
        blocks.sort_by_key(|block| block.order);
        blocks
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    pub id: String,
    pub order: i64,
    pub content: BlockContent,
}

impl Block {
    pub fn new<S: ToString>(id: S, order: i64, content: BlockContent) -> Block {
        Block {
            id: id.to_string(),
            order,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListType {
    #[default]
    Bullet,
    Ordered,
}

/// The payload of a block, one variant per block type
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Heading { text: String, level: u8 },
    Paragraph { text: String },
    Quote { text: String },
    List { items: Vec<String>, list_type: ListType },
    Cta { button_text: String, url: Option<String> },
    Image { url: String, alt: String },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    /// A block type this version doesn't know how to draw
    Unsupported(String),
}

impl BlockContent {
    /// The wire name of the block type
    pub fn kind(&self) -> &str {
        match self {
            BlockContent::Heading { .. } => "heading",
            BlockContent::Paragraph { .. } => "paragraph",
            BlockContent::Quote { .. } => "quote",
            BlockContent::List { .. } => "list",
            BlockContent::Cta { .. } => "cta",
            BlockContent::Image { .. } => "image",
            BlockContent::Table { .. } => "table",
            BlockContent::Unsupported(kind) => kind,
        }
    }

    fn from_wire(kind: &str, content: Value) -> BlockContent {
        fn parse<T: for<'de> Deserialize<'de> + Default>(content: Value) -> T {
            serde_json::from_value(content).unwrap_or_default()
        }

        match kind {
            "heading" => {
                let wire: HeadingWire = parse(content);
                BlockContent::Heading {
                    text: wire.text.0,
                    level: wire.level.as_ref().and_then(level_of).unwrap_or(1),
                }
            }
            "paragraph" => BlockContent::Paragraph {
                text: parse::<TextWire>(content).text.0,
            },
            "quote" => BlockContent::Quote {
                text: parse::<TextWire>(content).text.0,
            },
            "list" => {
                let wire: ListWire = parse(content);
                BlockContent::List {
                    items: wire.items.into_iter().map(|cell| cell.0).collect(),
                    list_type: match wire.list_type.0.as_str() {
                        "ordered" => ListType::Ordered,
                        _ => ListType::Bullet,
                    },
                }
            }
            "cta" => {
                let wire: CtaWire = parse(content);
                BlockContent::Cta {
                    button_text: wire.button_text.0,
                    url: wire.url.map(|url| url.0).filter(|url| !url.is_empty()),
                }
            }
            "image" => {
                let wire: ImageWire = parse(content);
                BlockContent::Image {
                    url: wire.url.0,
                    alt: wire.alt.0,
                }
            }
            "table" => {
                let wire: TableWire = parse(content);
                BlockContent::Table {
                    headers: wire.headers.into_iter().map(|cell| cell.0).collect(),
                    rows: wire
                        .rows
                        .into_iter()
                        .map(|row| row.into_iter().map(|cell| cell.0).collect())
                        .collect(),
                }
            }
            other => BlockContent::Unsupported(other.to_string()),
        }
    }
}

fn order_of(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn level_of(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: Text,
    #[serde(rename = "type", default)]
    kind: Text,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    order: Value,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Block {
        Block {
            id: raw.id.0,
            order: order_of(&raw.order),
            content: BlockContent::from_wire(&raw.kind.0, raw.content),
        }
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Text::deserialize(deserializer).map(|text| text.0)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A string that also accepts numbers and booleans, and reads null as empty
#[derive(Debug, Default)]
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Text, D::Error> {
        let text = match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        };
        Ok(Text(text))
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TextWire {
    text: Text,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct HeadingWire {
    text: Text,
    level: Option<Value>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ListWire {
    items: Vec<Text>,
    list_type: Text,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct CtaWire {
    button_text: Text,
    url: Option<Text>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ImageWire {
    url: Text,
    alt: Text,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TableWire {
    headers: Vec<Text>,
    rows: Vec<Vec<Text>>,
}
