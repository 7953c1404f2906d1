use css::WhiteSpace;

// Internal token representation after whitespace processing.
// Token invariants:
// - in collapsing modes `Space` is never emitted twice in a row, and never
//   right after a `HardBreak` or at the start of the value;
// - `HardBreak` is only emitted when the mode preserves newlines;
// - source ranges are byte ranges into the original value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum TextareaToken {
    Word {
        text: String,
        source_range: (usize, usize),
    },
    /// One preserved space or tab, or one collapsed whitespace run.
    Space {
        tab: bool,
        source_range: (usize, usize),
    },
    /// Force a new line (a preserved `\n`, `\r` or `\r\n`).
    HardBreak { source_range: (usize, usize) },
}

/// Split a text control value into layout tokens for the given `white-space` mode.
///
/// This preserves, depending on the mode:
/// - explicit `\n` line breaks (as hard breaks)
/// - sequences of spaces (no collapsing)
/// - leading spaces on a line
pub(super) fn tokenize_textarea_value(value: &str, white_space: WhiteSpace) -> Vec<TextareaToken> {
    let keep_spaces = white_space.preserves_spaces();
    let keep_newlines = white_space.preserves_newlines();

    let mut tokens: Vec<TextareaToken> = Vec::new();
    let mut word = String::new();
    let mut word_start: Option<usize> = None;

    fn flush_pending_word(
        word: &mut String,
        word_start: &mut Option<usize>,
        end: usize,
        tokens: &mut Vec<TextareaToken>,
    ) {
        let Some(start) = word_start.take() else {
            debug_assert!(word.is_empty());
            return;
        };
        if word.is_empty() {
            return;
        }
        tokens.push(TextareaToken::Word {
            text: std::mem::take(word),
            source_range: (start, end),
        });
    }

    fn push_collapsible_space(tokens: &mut Vec<TextareaToken>, start: usize, end: usize) {
        match tokens.last_mut() {
            None | Some(TextareaToken::HardBreak { .. }) => {}
            Some(TextareaToken::Space { source_range, .. }) => source_range.1 = end,
            Some(TextareaToken::Word { .. }) => tokens.push(TextareaToken::Space {
                tab: false,
                source_range: (start, end),
            }),
        }
    }

    let mut it = value.char_indices().peekable();
    while let Some((idx, ch)) = it.next() {
        match ch {
            '\n' | '\r' => {
                flush_pending_word(&mut word, &mut word_start, idx, &mut tokens);
                let mut end = idx + 1;
                if ch == '\r' {
                    if let Some((next_idx, '\n')) = it.peek().copied() {
                        let _ = it.next();
                        end = next_idx + 1;
                    }
                }
                if keep_newlines {
                    // pre-line keeps the break but eats the spaces before it.
                    if !keep_spaces {
                        if let Some(TextareaToken::Space { .. }) = tokens.last() {
                            tokens.pop();
                        }
                    }
                    tokens.push(TextareaToken::HardBreak {
                        source_range: (idx, end),
                    });
                } else {
                    push_collapsible_space(&mut tokens, idx, end);
                }
            }
            ' ' | '\t' => {
                flush_pending_word(&mut word, &mut word_start, idx, &mut tokens);
                let end = idx + ch.len_utf8();
                if keep_spaces {
                    tokens.push(TextareaToken::Space {
                        tab: ch == '\t',
                        source_range: (idx, end),
                    });
                } else {
                    push_collapsible_space(&mut tokens, idx, end);
                }
            }
            _ => {
                if word_start.is_none() {
                    word_start = Some(idx);
                }
                word.push(ch);
            }
        }
    }

    flush_pending_word(&mut word, &mut word_start, value.len(), &mut tokens);

    tokens
}
