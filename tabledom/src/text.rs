use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Word-wrap `s` to `max_width` columns. Words wider than a line are broken
/// at character boundaries; explicit newlines are kept.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = wrap_chars(word, max_width);
                // The tail of a broken word can share a line with what follows.
                let tail = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = display_width(&tail);
                current = tail;
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}

fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(ch);
        width += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Number of rows `s` occupies when wrapped to `max_width`.
pub fn line_count(s: &str, max_width: usize) -> usize {
    if s.is_empty() {
        return 0;
    }
    wrap_words(s, max_width).len()
}
