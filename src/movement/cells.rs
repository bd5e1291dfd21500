//! Table cell boundaries on a single pipe-delimited line
//!
//! All positions are character indices into the line. A pipe preceded by a
//! backslash (`\|`) is literal text and never separates cells.
//!
//! Cells are numbered by the count of unescaped pipes before them: the text
//! before the first pipe is cell 0, so on a row written as `| a | b |` the
//! cell holding `a` has index 1.

/// Character positions of every unescaped `|` in `chars`
fn unescaped_pipes(chars: &[char]) -> Vec<usize> {
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| c == '|' && (i == 0 || chars[i - 1] != '\\'))
        .map(|(i, _)| i)
        .collect()
}

/// First non-whitespace index in `from..to`, or `to` if the range is blank
fn skip_whitespace(chars: &[char], from: usize, to: usize) -> usize {
    (from..to).find(|&i| !chars[i].is_whitespace()).unwrap_or(to)
}

/// End of the visible content in `from..to` (trailing whitespace trimmed)
fn trim_end(chars: &[char], from: usize, to: usize) -> usize {
    let mut end = to;
    while end > from && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    end
}

/// Move towards the start of the cell containing `ch`.
///
/// From inside the content this lands on the first visible character of
/// the cell. From the content start it steps back to the end of the
/// previous cell's visible content. Returns `ch` when there is nowhere to
/// go and 0 when no pipe precedes the cursor.
pub fn cell_start(line: &str, ch: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let ch = ch.min(chars.len());
    let pipes = unescaped_pipes(&chars);

    let Some(idx) = pipes.iter().rposition(|&p| p < ch) else {
        return 0;
    };
    let pipe = pipes[idx];

    let content_start = skip_whitespace(&chars, pipe + 1, chars.len());
    if ch > content_start {
        return content_start;
    }

    match idx.checked_sub(1).map(|prev| pipes[prev]) {
        Some(prev_pipe) => trim_end(&chars, prev_pipe + 1, pipe),
        None => ch,
    }
}

/// Move towards the end of the cell containing `ch`.
///
/// From inside the content this lands just past the last visible character
/// of the cell. From the content end it jumps to the first visible
/// character of the next cell. Returns the line length when no pipe
/// follows the cursor and `ch` when there is no next cell.
pub fn cell_end(line: &str, ch: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let ch = ch.min(chars.len());
    let pipes = unescaped_pipes(&chars);

    let Some(idx) = pipes.iter().position(|&p| p >= ch) else {
        return chars.len();
    };
    let pipe = pipes[idx];

    let cell_from = idx.checked_sub(1).map_or(0, |prev| pipes[prev] + 1);
    let content_end = trim_end(&chars, cell_from, pipe);
    if ch < content_end {
        return content_end;
    }

    match pipes.get(idx + 1) {
        Some(&next_pipe) => skip_whitespace(&chars, pipe + 1, next_pipe),
        None => ch,
    }
}

/// First visible character of the cell containing `ch`.
///
/// When no pipe precedes `ch` the cell is the region before the first pipe.
pub fn cell_content_start(line: &str, ch: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let ch = ch.min(chars.len());
    let pipes = unescaped_pipes(&chars);

    let from = pipes
        .iter()
        .rev()
        .find(|&&p| p < ch)
        .map_or(0, |&p| p + 1);
    skip_whitespace(&chars, from, chars.len())
}

/// Index of the cell containing `ch`: unescaped pipes strictly before it
pub fn cell_index(line: &str, ch: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let ch = ch.min(chars.len());
    unescaped_pipes(&chars)
        .into_iter()
        .take_while(|&p| p < ch)
        .count()
}

/// First visible character of cell `n` on `line`.
///
/// Returns `None` when the line has no such cell. A trailing pipe followed
/// only by whitespace closes the row and does not open another cell.
pub fn nth_cell_content_start(line: &str, n: usize) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let pipes = unescaped_pipes(&chars);

    if n == 0 {
        return Some(skip_whitespace(&chars, 0, chars.len()));
    }

    let pipe = *pipes.get(n - 1)?;
    let cell_to = pipes.get(n).copied().unwrap_or(chars.len());
    let start = skip_whitespace(&chars, pipe + 1, cell_to);

    let is_row_terminator = pipes.get(n).is_none() && start == chars.len();
    if is_row_terminator {
        None
    } else {
        Some(start)
    }
}
