use std::{borrow::Cow, fmt::Write};

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(text_width(cell));
            }
        }

        let separator = separator_line(&col_widths);
        let mut out = String::with_capacity(separator.len() * (self.rows.len() + 4));
        out.push_str(&separator);
        self.write_line(&mut out, self.headers, &col_widths);
        out.push_str(&separator);
        for row in &self.rows {
            self.write_line(&mut out, row.as_ref(), &col_widths);
        }
        if !self.rows.is_empty() {
            out.push_str(&separator);
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        out.push('|');
        for (i, width) in col_widths.iter().copied().enumerate() {
            let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            let pad = width - text_width(cell);
            let _ = match self.alignments.get(i).copied().unwrap_or_default() {
                Alignment::Left => write!(out, " {cell}{} |", " ".repeat(pad)),
                Alignment::Right => write!(out, " {}{cell} |", " ".repeat(pad)),
            };
        }
        out.push('\n');
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn separator_line(col_widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in col_widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}
