//! Functionality for displaying rationals to humans. The canonical text form is plain ASCII
//! (`-13/122`), which is what [`Display`](std::fmt::Display) produces and what
//! [`FromStr`](std::str::FromStr) reads back. The same value can also be presented with Unicode
//! typography (`−13⁄122`) or as Typst markup (`-(13)/(122)`) for typeset output. Rather than
//! writing each of these by hand, a type breaks itself into [`Block`]s once and a [`RenderMode`]
//! decides how each block looks.

/// A primitive in the markup system. Any type that can represent itself using these pieces can
/// be faithfully rendered in every mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Plain text, such as the digits of an integer.
    Text(String),
    /// A symbol with multiple representations depending on available characters, such as a minus
    /// sign.
    Symbol(Symbol),
    /// A fraction with a numerator and a denominator.
    Fraction(Box<Block>, Box<Block>),
    /// A concatenation of blocks that are inseparable.
    Concatenation(Vec<Block>),
}

/// A symbol that can be represented using Unicode or ASCII.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Symbol {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl Block {
    pub fn new_text<T: Into<String>>(string: T) -> Self {
        Block::Text(string.into())
    }

    pub const fn new_symbol(ascii: &'static str, unicode: &'static str) -> Self {
        Block::Symbol(Symbol { ascii, unicode })
    }

    pub fn new_fraction(numerator: Block, denominator: Block) -> Self {
        Block::Fraction(numerator.into(), denominator.into())
    }

    pub fn new_concatenation<T: IntoIterator<Item = Block>>(t: T) -> Self {
        Block::Concatenation(t.into_iter().collect())
    }

    /// The fraction slash, represented using a normal slash in ASCII mode.
    pub const FRAC_SLASH: Block = Block::new_symbol("/", "\u{2044}");

    /// The minus sign, falling back to a hyphen.
    pub const MINUS_SIGN: Block = Block::new_symbol("-", "\u{2212}");
}

/// A render *mode*: an environment in which information can be displayed.
pub trait RenderMode {
    /// Renders plain text.
    fn render_text(&self, text: &str) -> String {
        text.to_string()
    }

    /// Renders a symbol.
    fn render_symbol(&self, sym: &Symbol) -> String {
        sym.unicode.to_string()
    }

    /// Renders a fraction. The default puts the fraction slash between the two halves.
    fn render_fraction(&self, numerator: &Block, denominator: &Block) -> String {
        format!(
            "{}{}{}",
            self.render_block(numerator),
            self.render_block(&Block::FRAC_SLASH),
            self.render_block(denominator)
        )
    }

    /// Renders a concatenation of other blocks, one after another.
    fn render_concatenation(&self, blocks: &[Block]) -> String {
        blocks.iter().map(|b| self.render_block(b)).collect()
    }

    /// Render a block.
    ///
    /// When implementing [`RenderMode`], generally do not override this method. Instead, implement
    /// whichever branch methods you want to customize.
    fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Text(t) => self.render_text(t),
            Block::Symbol(sym) => self.render_symbol(sym),
            Block::Fraction(num, denom) => self.render_fraction(num, denom),
            Block::Concatenation(blocks) => self.render_concatenation(blocks),
        }
    }

    /// Renders anything that can break itself into blocks.
    fn render_to_string<T: RenderBlocks + ?Sized>(&self, t: &T) -> String {
        self.render_concatenation(&t.components())
    }
}

/// Trait for types that can be rendered by concatenating smaller pieces.
pub trait RenderBlocks {
    /// Decompose self into components.
    fn components(&self) -> Vec<Block>;
}

/// Plain ASCII: the canonical, parseable text form.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Ascii {}

impl RenderMode for Ascii {
    fn render_symbol(&self, sym: &Symbol) -> String {
        sym.ascii.to_string()
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Unicode {}

impl RenderMode for Unicode {}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Typst {}

impl RenderMode for Typst {
    fn render_symbol(&self, sym: &Symbol) -> String {
        sym.ascii.to_string()
    }

    fn render_fraction(&self, numerator: &Block, denominator: &Block) -> String {
        format!(
            "({})/({})",
            self.render_block(numerator),
            self.render_block(denominator)
        )
    }
}

/// The mode used for [`Display`](std::fmt::Display).
pub const DISPLAY: Ascii = Ascii {};

pub const UNICODE: Unicode = Unicode {};

pub const TYPST: Typst = Typst {};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_blocks() {
        let half = Block::new_concatenation([
            Block::MINUS_SIGN,
            Block::new_fraction(Block::new_text("1"), Block::new_text("2")),
        ]);
        assert_eq!(DISPLAY.render_block(&half), "-1/2");
        assert_eq!(UNICODE.render_block(&half), "\u{2212}1\u{2044}2");
        assert_eq!(TYPST.render_block(&half), "-(1)/(2)");
    }

    #[test]
    fn test_rational() {
        assert_eq!(DISPLAY.render_to_string(&rational!(-13 / 122)), "-13/122");
        assert_eq!(
            UNICODE.render_to_string(&rational!(-13 / 122)),
            "\u{2212}13\u{2044}122"
        );
        assert_eq!(TYPST.render_to_string(&rational!(5 / 24)), "(5)/(24)");
        assert_eq!(UNICODE.render_to_string(&rational!(-4 / 2)), "\u{2212}2");
        assert_eq!(TYPST.render_to_string(&rational!(0)), "0");
    }
}
