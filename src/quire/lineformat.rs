use std::cmp::{max, min};

use unicode_width::UnicodeWidthStr;

use crate::note::Note;

const TIMESTAMP_WIDTH: usize = 19;
const MIN_TITLE_WIDTH: usize = 8;
const MIN_TAGS_WIDTH: usize = 6;

/// Column widths for a listing of notes
#[derive(Debug, Clone, PartialEq)]
pub struct LineFormat {
    pub colsep: usize,
    pub position_width: usize,
    pub title_width: usize,
    pub tags_width: usize,
    pub timestamp_width: usize,
}

impl LineFormat {
    /// Size the columns for `rows` (position, note), in terminal columns. When
    /// `max_width` is set the tags column shrinks first, then the title column;
    /// neither goes below its minimum, so on a very narrow terminal the line
    /// stays wider than `max_width`.
    pub fn new(rows: &[(usize, &Note)], condensed: bool, max_width: Option<usize>) -> LineFormat {
        let header = !condensed;
        let mut line_format = LineFormat {
            colsep: if condensed { 1 } else { 2 },
            position_width: 0,
            title_width: 0,
            tags_width: 0,
            timestamp_width: TIMESTAMP_WIDTH,
        };

        let widest_position = rows.iter().map(|(p, _)| *p).max().unwrap_or(0);
        line_format.position_width = widest_position.to_string().len();

        line_format.title_width = rows.iter()
                                      .map(|(_, n)| {
                                          let extra = if n.content.is_empty() { 0 } else { 4 };
                                          n.title.width() + extra
                                      })
                                      .max()
                                      .unwrap_or(0);

        if !condensed {
            line_format.tags_width = rows.iter()
                                         .map(|(_, n)| n.tag_line().width())
                                         .max()
                                         .unwrap_or(0);
        }

        if header {
            line_format.position_width = max(line_format.position_width, "pos".len());
            line_format.title_width = max(line_format.title_width, "title".len());
            if line_format.tags_width != 0 {
                line_format.tags_width = max(line_format.tags_width, "tags".len());
            }
        }

        if let Some(width) = max_width {
            line_format.fit(width);
        }
        line_format
    }

    fn fit(&mut self, width: usize) {
        let mut overflow = self.line_width().saturating_sub(width);
        if overflow == 0 {
            return;
        }
        if self.tags_width > MIN_TAGS_WIDTH {
            let cut = min(overflow, self.tags_width - MIN_TAGS_WIDTH);
            self.tags_width -= cut;
            overflow -= cut;
        }
        if overflow > 0 && self.title_width > MIN_TITLE_WIDTH {
            let cut = min(overflow, self.title_width - MIN_TITLE_WIDTH);
            self.title_width -= cut;
        }
    }

    pub fn line_width(&self) -> usize {
        let tags = if self.tags_width == 0 { 0 } else { self.colsep + self.tags_width };
        self.position_width + self.colsep + self.title_width + tags + self.colsep +
        self.timestamp_width
    }
}
