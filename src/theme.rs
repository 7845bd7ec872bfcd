use crate::parser::TokenKind;
use crossterm::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color, // Blue
    pub comment: Color, // Grey
    pub error: Color,   // Red
    pub keyword: Color,
    pub number: Color,
    pub operator: Color,
    pub delimiter: Color,
}

impl Theme {
    /// Colour used to render a token of `kind`
    pub fn token_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Illegal => self.error,
            TokenKind::Eof => self.comment,
            TokenKind::Ident => self.fg,
            TokenKind::Int => self.number,
            k if k.is_keyword() => self.keyword,
            k if k.is_operator() => self.operator,
            _ => self.delimiter,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb { r: 205, g: 214, b: 244 },
    primary: Color::Rgb { r: 137, g: 180, b: 250 },
    comment: Color::Rgb { r: 108, g: 112, b: 134 },
    error: Color::Rgb { r: 243, g: 139, b: 168 },
    keyword: Color::Rgb { r: 137, g: 180, b: 250 },   // Blue for keywords
    number: Color::Rgb { r: 250, g: 179, b: 135 },    // Orange for numbers
    operator: Color::Rgb { r: 249, g: 226, b: 175 },  // Yellow for operators
    delimiter: Color::Rgb { r: 148, g: 226, b: 213 }, // Cyan for delimiters
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_colors() {
        let theme = &DEFAULT_THEME;
        assert_eq!(theme.token_color(TokenKind::Let), theme.keyword);
        assert_eq!(theme.token_color(TokenKind::NotEq), theme.operator);
        assert_eq!(theme.token_color(TokenKind::LBrace), theme.delimiter);
        assert_eq!(theme.token_color(TokenKind::Int), theme.number);
        assert_eq!(theme.token_color(TokenKind::Illegal), theme.error);
    }
}
