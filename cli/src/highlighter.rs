use funclang::{TokenKind, TokenPattern, Tokenizer};
use funclang_core::casting::parse_number;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "", fg: Color::White },
    PaletteItem { name: "operator", fg: Color::White },
    PaletteItem { name: "keyword", fg: Color::Magenta },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "string", fg: Color::Green },
    PaletteItem { name: "function", fg: Color::Blue },
    PaletteItem { name: "punctuation", fg: Color::White },
    PaletteItem { name: "invalid", fg: Color::Red },
];

fn color(name: &str) -> Color {
    PALETTE
        .iter()
        .find(|item| item.name == name)
        .map_or(PALETTE[0].fg, |item| item.fg)
}

/// Colors a line using the engine's own tokenizer, so what is highlighted as
/// an operator is exactly what the engine will fold.
pub struct Highlighter {
    pattern: TokenPattern,
}

impl Highlighter {
    pub fn new(pattern: TokenPattern) -> Self {
        Self { pattern }
    }
}

fn classify(tokens: &Tokenizer<'_>, kind: TokenKind, text: &str, after_chain: bool) -> &'static str {
    match kind {
        TokenKind::Operator if text == "as" || text == "->" => "keyword",
        TokenKind::Operator => "operator",
        TokenKind::Quoted => "string",
        TokenKind::Word if after_chain || tokens.current_kind() == Some(TokenKind::LeftParen) => {
            "function"
        }
        TokenKind::Word if parse_number(text).is_some() => "number",
        TokenKind::Word => "",
        TokenKind::LeftParen | TokenKind::RightParen | TokenKind::Comma => "punctuation",
        TokenKind::Invalid => "invalid",
    }
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut tokens = self.pattern.tokenize(line);
        let mut curr_end = 0;
        let mut after_chain = false;

        while let Some(token) = tokens.advance() {
            if token.position > curr_end {
                output.push((Style::new(), line[curr_end..token.position].to_string()));
            }
            // Classified after advancing so a call's `(` is visible.
            let name = classify(&tokens, token.kind, token.raw, after_chain);
            output.push((Style::new().fg(color(name)), token.raw.to_string()));

            after_chain = token.kind == TokenKind::Operator && token.raw == "->";
            curr_end = token.position + token.raw.len();
        }

        if curr_end < line.len() {
            output.push((Style::new(), line[curr_end..].to_string()));
        }

        output
    }
}
