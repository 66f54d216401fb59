//! Color-coded pick decoding.
//!
//! The renderer paints every selectable element into an off-screen buffer with a flat color.
//! Plain items encode their linear index in the RGB channels and use [`ITEM_ALPHA`]; labels and
//! custom items are marked by reserved alpha values. A single pixel read back from that buffer
//! is decoded here into a [`SelectionResult`].

use std::sync::Arc;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::series::SeriesId;

/// Alpha marking a column (X axis) label.
pub const COLUMN_LABEL_ALPHA: u8 = 255;
/// Alpha marking a row (Z axis) label.
pub const ROW_LABEL_ALPHA: u8 = 254;
/// Alpha marking a value (Y axis) label.
pub const VALUE_LABEL_ALPHA: u8 = 253;
/// Alpha marking a custom item.
pub const CUSTOM_ITEM_ALPHA: u8 = 252;
/// Alpha used when drawing plain items.
pub const ITEM_ALPHA: u8 = 0;

/// Largest index the 24-bit RGB encoding can carry.
pub const MAX_SELECTION_INDEX: usize = 0x00FF_FFFF;

/// Background color of the selection buffer.
pub const SKIP_COLOR: Rgba8 = Rgba8::new(255, 255, 255, 255);

/// One pixel of the selection buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Create a pixel from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Index packed into the RGB channels.
    pub fn rgb_index(self) -> usize {
        (self.r as usize) | ((self.g as usize) << 8) | ((self.b as usize) << 16)
    }
}

/// Encode an item index into a selection color.
///
/// Indices above [`MAX_SELECTION_INDEX`] keep only their low 24 bits; the index table refuses to
/// hand out such indices in the first place.
pub fn index_to_color(index: usize) -> Rgba8 {
    encode_rgb(index, ITEM_ALPHA)
}

/// Encode a custom item index into a selection color.
pub fn custom_item_color(index: usize) -> Rgba8 {
    encode_rgb(index, CUSTOM_ITEM_ALPHA)
}

/// Encode an axis label index into a selection color.
pub fn label_color(alpha: u8, index: u8) -> Rgba8 {
    Rgba8::new(index, 0, 0, alpha)
}

fn encode_rgb(index: usize, alpha: u8) -> Rgba8 {
    Rgba8::new(
        (index & 0xFF) as u8,
        ((index >> 8) & 0xFF) as u8,
        ((index >> 16) & 0xFF) as u8,
        alpha,
    )
}

/// Outcome of decoding one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionResult {
    /// Background or an index nobody owns.
    #[default]
    None,
    /// Row label with its index.
    RowLabel(usize),
    /// Column label with its index.
    ColumnLabel(usize),
    /// Value label with its index.
    ValueLabel(usize),
    /// Custom item with its index.
    CustomItem(usize),
    /// Item of a series.
    Item {
        /// Owning series.
        series: SeriesId,
        /// Index within the series.
        index: usize,
    },
}

/// Contiguous index range owned by one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// Series drawn with this range.
    pub series: SeriesId,
    /// First index.
    pub offset: usize,
    /// Number of items.
    pub count: usize,
}

impl IndexRange {
    fn contains(&self, index: usize) -> bool {
        index >= self.offset && index - self.offset < self.count
    }
}

/// Mapping from selection indices to series, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionIndexTable {
    entries: Vec<IndexRange>,
    total: usize,
}

impl SelectionIndexTable {
    /// Lay out visible series back to back starting at index 0.
    pub fn build<I>(series: I) -> Result<Self>
    where
        I: IntoIterator<Item = (SeriesId, usize)>,
    {
        let mut entries = Vec::new();
        let mut offset = 0usize;
        for (id, count) in series {
            let end = offset
                .checked_add(count)
                .filter(|end| *end <= MAX_SELECTION_INDEX + 1)
                .ok_or(GraphError::SelectionCapacity {
                    requested: offset.saturating_add(count),
                    max: MAX_SELECTION_INDEX + 1,
                })?;
            entries.push(IndexRange {
                series: id,
                offset,
                count,
            });
            offset = end;
        }
        debug!(series = entries.len(), items = offset, "selection index table built");
        Ok(Self {
            entries,
            total: offset,
        })
    }

    /// Ranges in draw order.
    pub fn entries(&self) -> &[IndexRange] {
        &self.entries
    }

    /// Total number of indexed items.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Range assigned to a series.
    pub fn range_of(&self, series: SeriesId) -> Option<IndexRange> {
        self.entries.iter().copied().find(|entry| entry.series == series)
    }

    /// Find the series owning a global index.
    pub fn lookup(&self, index: usize) -> Option<(SeriesId, usize)> {
        if index >= self.total {
            return None;
        }
        let slot = self.entries.partition_point(|entry| entry.offset + entry.count <= index);
        let entry = self.entries.get(slot)?;
        entry
            .contains(index)
            .then(|| (entry.series, index - entry.offset))
    }
}

/// Decodes picked pixels against the last published index table.
#[derive(Debug, Clone, Default)]
pub struct SelectionResolver {
    table: Arc<SelectionIndexTable>,
}

impl SelectionResolver {
    /// Create a resolver with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table in one step.
    pub fn publish(&mut self, table: SelectionIndexTable) {
        self.table = Arc::new(table);
    }

    /// Currently published table.
    pub fn table(&self) -> Arc<SelectionIndexTable> {
        Arc::clone(&self.table)
    }

    /// Decode a pixel. Never fails; unknown indices resolve to [`SelectionResult::None`].
    pub fn decode(&self, pixel: Rgba8) -> SelectionResult {
        if pixel == SKIP_COLOR {
            return SelectionResult::None;
        }
        match pixel.a {
            COLUMN_LABEL_ALPHA => SelectionResult::ColumnLabel(pixel.r as usize),
            ROW_LABEL_ALPHA => SelectionResult::RowLabel(pixel.r as usize),
            VALUE_LABEL_ALPHA => SelectionResult::ValueLabel(pixel.r as usize),
            CUSTOM_ITEM_ALPHA => SelectionResult::CustomItem(pixel.rgb_index()),
            _ => match self.table.lookup(pixel.rgb_index()) {
                Some((series, index)) => SelectionResult::Item { series, index },
                None => SelectionResult::None,
            },
        }
    }
}
