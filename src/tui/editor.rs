use unicode_segmentation::UnicodeSegmentation;

/// In-place editor for a single text field: a buffer seeded from the
/// committed value, freely mutable, finished by commit (keep buffer)
/// or cancel (restore the original). The cursor is a byte offset that
/// always sits on a grapheme boundary.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    buffer: String,
    cursor: usize,
    original: String,
}

impl FieldEditor {
    /// Enter editing: seed the buffer with the committed value, cursor
    /// at the end.
    pub fn seed(value: &str) -> Self {
        FieldEditor {
            buffer: value.to_string(),
            cursor: value.len(),
            original: value.to_string(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Grapheme count before the cursor, for terminal cursor placement.
    pub fn cursor_cell(&self) -> usize {
        self.buffer[..self.cursor].graphemes(true).count()
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(start) = prev_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(end) = next_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..end, "");
        }
    }

    pub fn left(&mut self) {
        if let Some(start) = prev_boundary(&self.buffer, self.cursor) {
            self.cursor = start;
        }
    }

    pub fn right(&mut self) {
        if let Some(end) = next_boundary(&self.buffer, self.cursor) {
            self.cursor = end;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Commit gesture: the buffer becomes the new value, any string
    /// including empty.
    pub fn commit(self) -> String {
        self.buffer
    }

    /// Cancel gesture: the pre-edit value, exactly.
    pub fn cancel(self) -> String {
        self.original
    }
}

/// Byte offset of the grapheme boundary before `at`, if any.
fn prev_boundary(s: &str, at: usize) -> Option<usize> {
    s.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < at)
        .last()
}

/// Byte offset of the grapheme boundary after `at`, if any.
fn next_boundary(s: &str, at: usize) -> Option<usize> {
    if at >= s.len() {
        return None;
    }
    s[at..]
        .grapheme_indices(true)
        .nth(1)
        .map(|(i, _)| at + i)
        .or(Some(s.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn commit_keeps_edits() {
        let mut ed = FieldEditor::seed("фокус");
        ed.insert('!');
        assert_eq!(ed.commit(), "фокус!");
    }

    #[test]
    fn cancel_restores_original_exactly() {
        let mut ed = FieldEditor::seed("фокус");
        ed.backspace();
        ed.backspace();
        ed.insert('X');
        assert_eq!(ed.cancel(), "фокус");
    }

    #[test]
    fn commit_accepts_empty_buffer() {
        let mut ed = FieldEditor::seed("x");
        ed.backspace();
        assert_eq!(ed.commit(), "");
    }

    #[test]
    fn backspace_removes_multibyte_grapheme() {
        let mut ed = FieldEditor::seed("задача");
        ed.backspace();
        assert_eq!(ed.buffer(), "задач");
    }

    #[test]
    fn cursor_moves_over_cyrillic() {
        let mut ed = FieldEditor::seed("дом");
        assert_eq!(ed.cursor_cell(), 3);
        ed.left();
        ed.left();
        assert_eq!(ed.cursor_cell(), 1);
        ed.insert('е');
        assert_eq!(ed.buffer(), "деом");
        ed.delete();
        assert_eq!(ed.buffer(), "дем");
        ed.right();
        assert_eq!(ed.cursor_cell(), 3);
    }

    #[test]
    fn home_and_end() {
        let mut ed = FieldEditor::seed("09:00");
        ed.home();
        assert_eq!(ed.cursor_cell(), 0);
        ed.delete();
        assert_eq!(ed.buffer(), "9:00");
        ed.end();
        ed.insert('!');
        assert_eq!(ed.buffer(), "9:00!");
    }

    #[test]
    fn edits_at_start_are_safe() {
        let mut ed = FieldEditor::seed("");
        ed.backspace();
        ed.delete();
        ed.left();
        ed.right();
        assert_eq!(ed.commit(), "");
    }
}
