use crate::domain::ListingRecord;
use crate::error::Result;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const COLUMN_SEPARATOR: &str = " | ";

/// Column widths in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub title: usize,
    pub discount: usize,
    pub price: usize,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            title: 60,
            discount: 16,
            price: 8,
        }
    }
}

impl ColumnWidths {
    pub fn rule_width(&self) -> usize {
        self.title + self.discount + self.price + 2 * COLUMN_SEPARATOR.len()
    }
}

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Left-aligns `text` in `target` cells. Wider text is returned untouched.
pub fn pad_display(text: &str, target: usize) -> String {
    let padding = target.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

pub struct TableRenderer {
    widths: ColumnWidths,
}

impl TableRenderer {
    pub fn new(widths: ColumnWidths) -> Self {
        Self { widths }
    }

    /// Writes the header, the rule and one row per listing. Excluded
    /// listings are dropped here and nowhere else.
    pub fn render<W: Write>(&self, records: &[ListingRecord], out: &mut W) -> Result<()> {
        self.write_row(out, "書名", "折扣", "價格")?;
        writeln!(out, "{}", "-".repeat(self.widths.rule_width()))?;

        for record in records.iter().filter(|record| !record.excluded) {
            self.write_row(
                out,
                &record.title,
                &record.discount_label,
                &record.price_label,
            )?;
        }

        Ok(())
    }

    fn write_row<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        discount: &str,
        price: &str,
    ) -> Result<()> {
        writeln!(
            out,
            "{}{sep}{}{sep}{}",
            pad_display(title, self.widths.title),
            pad_display(discount, self.widths.discount),
            pad_display(price, self.widths.price),
            sep = COLUMN_SEPARATOR,
        )?;
        Ok(())
    }
}

/// Full record sequence, excluded listings included.
pub fn write_json<W: Write>(records: &[ListingRecord], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}
