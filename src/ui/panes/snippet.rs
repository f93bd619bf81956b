//! Snippet pane rendering with syntax highlighting
//!
//! Shows the core routine of the selected operation in the selected
//! language. The highlighter is a character-by-character tokenizer shared by
//! all four languages: it knows line comments (`//` and `#`), string
//! literals, numbers and one keyword table per language.

use crate::catalog::snippets::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn is_comment_start(chars: &[char], i: usize, language: Language) -> bool {
    match language {
        Language::Python => chars[i] == '#',
        _ => chars[i] == '/' && chars.get(i + 1) == Some(&'/'),
    }
}

/// Highlight one line of snippet text
fn highlight_line(line: &str, language: Language) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_comment_start(&chars, i, language) {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        if c == '"' || c == '\'' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                end += if chars[end] == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, c == '(', language);
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false, language);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn is_type_name(word: &str, language: Language) -> bool {
    match language {
        Language::Cpp => matches!(word, "int" | "void" | "bool" | "auto" | "Node"),
        Language::Java => matches!(word, "int" | "void" | "boolean" | "Node"),
        Language::Python | Language::JavaScript => word == "Node",
    }
}

fn is_keyword(word: &str, language: Language) -> bool {
    match language {
        Language::Cpp => matches!(
            word,
            "if" | "else" | "while" | "for" | "return" | "new" | "delete" | "struct" | "class"
        ),
        Language::Java => matches!(
            word,
            "if" | "else" | "while" | "for" | "return" | "new" | "class" | "public" | "private"
        ),
        Language::Python => matches!(
            word,
            "def" | "if" | "elif" | "else" | "while" | "for" | "return" | "class" | "is" | "not"
                | "and" | "or" | "in"
        ),
        Language::JavaScript => matches!(
            word,
            "function" | "if" | "else" | "while" | "for" | "return" | "new" | "let" | "const"
                | "class"
        ),
    }
}

fn is_literal(word: &str) -> bool {
    matches!(
        word,
        "nullptr" | "NULL" | "null" | "None" | "true" | "false" | "True" | "False" | "this" | "self"
    )
}

fn word_style(word: &str, is_function: bool, language: Language) -> Style {
    if is_type_name(word, language) {
        Style::default().fg(DEFAULT_THEME.type_name)
    } else if is_keyword(word, language) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if is_literal(word) || word.chars().all(|c| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if is_function {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the snippet pane
pub fn render_snippet_pane(
    frame: &mut Frame,
    area: Rect,
    snippet: Option<&str>,
    language: Language,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Code ({}) ", language))
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(text) = snippet else {
        let paragraph = Paragraph::new("(no snippet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let total_lines = text.lines().count();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let lines: Vec<Line> = text
        .lines()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:3} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_line(line, language).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
