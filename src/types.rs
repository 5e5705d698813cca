//! Core types for ember-tui.
//!
//! The foundation everything else builds on: the two-tag sum that routes
//! combined request/response channels, and the small vocabulary of colors,
//! text attributes, and event positions that rendered trees carry.

// =============================================================================
// Either
// =============================================================================

/// Two-tag sum correlating a combined channel with the side that owns it.
///
/// When two components run side by side, every external request is exactly
/// one of the two variants, and every surfaced response producer carries the
/// tag of the side that produced it. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, if this is a `Left`.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// The right value, if this is a `Right`.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Transform the left value, leaving a `Right` untouched.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Transform the right value, leaving a `Left` untouched.
    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(f(value)),
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// Terminal color: either the terminal's own default or a 24-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Let the terminal pick.
    #[default]
    Default,
    /// 24-bit RGB.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    // Standard colors
    pub const BLACK: Self = Self::Rgb(0, 0, 0);
    pub const WHITE: Self = Self::Rgb(255, 255, 255);
    pub const RED: Self = Self::Rgb(255, 0, 0);
    pub const GREEN: Self = Self::Rgb(0, 255, 0);
    pub const BLUE: Self = Self::Rgb(0, 0, 255);
    pub const YELLOW: Self = Self::Rgb(255, 255, 0);
    pub const CYAN: Self = Self::Rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::Rgb(255, 0, 255);
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

// =============================================================================
// Events
// =============================================================================

/// Event positions a rendered element can attach a response producer to.
///
/// Dispatching concrete terminal input to these positions is the driver's
/// job; the tree only records which producer belongs where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyPress,
    Click,
    Focus,
    Blur,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either_accessors() {
        let left: Either<i32, &str> = Either::Left(7);
        let right: Either<i32, &str> = Either::Right("hi");

        assert!(left.is_left());
        assert!(right.is_right());
        assert_eq!(left.left(), Some(7));
        assert_eq!(left.right(), None);
        assert_eq!(right.right(), Some("hi"));
    }

    #[test]
    fn test_either_map_targets_one_side() {
        let left: Either<i32, i32> = Either::Left(1);
        assert_eq!(left.map_left(|n| n + 1), Either::Left(2));
        assert_eq!(Either::<i32, i32>::Right(1).map_left(|n| n + 1), Either::Right(1));
        assert_eq!(Either::<i32, i32>::Right(1).map_right(|n| n * 10), Either::Right(10));
    }

    #[test]
    fn test_attr_combination() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::ITALIC));
        assert_eq!(Attr::default(), Attr::NONE);
    }

    #[test]
    fn test_color_default_is_terminal_default() {
        assert_eq!(Color::default(), Color::Default);
        assert_eq!(Color::rgb(1, 2, 3), Color::Rgb(1, 2, 3));
    }
}
