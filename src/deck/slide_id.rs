//! Slide identifiers of the form `slide<N>`

use std::fmt;

/// Prefix shared by every slide identifier
pub const SLIDE_PREFIX: &str = "slide";

/// Numeric part of a `slide<N>` identifier
///
/// Signed because the index is read leniently from arbitrary element ids
/// (`slide-1` parses to `-1`), and the transition rules compare it against
/// `slide_count - 1`, which is `-1` for an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideId(i64);

impl SlideId {
    pub const FIRST: SlideId = SlideId(0);

    pub fn new(index: i64) -> Self {
        Self(index)
    }

    pub fn index(self) -> i64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Read the index out of an element id
    ///
    /// The id must start with `slide`. The remainder is read the way a
    /// browser's `parseInt` reads it: leading whitespace, an optional sign,
    /// then as many decimal digits as are present. Trailing garbage is
    /// ignored (`slide3abc` is slide 3). No digits at all yields `None`.
    pub fn from_element_id(id: &str) -> Option<Self> {
        let rest = id.strip_prefix(SLIDE_PREFIX)?;
        parse_int_prefix(rest).map(Self)
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SLIDE_PREFIX, self.0)
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids() {
        assert_eq!(SlideId::from_element_id("slide0"), Some(SlideId::new(0)));
        assert_eq!(SlideId::from_element_id("slide12"), Some(SlideId::new(12)));
    }

    #[test]
    fn test_lenient_suffix() {
        assert_eq!(SlideId::from_element_id("slide3abc"), Some(SlideId::new(3)));
        assert_eq!(SlideId::from_element_id("slide 7"), Some(SlideId::new(7)));
        assert_eq!(SlideId::from_element_id("slide-1"), Some(SlideId::new(-1)));
        assert_eq!(SlideId::from_element_id("slide+2"), Some(SlideId::new(2)));
    }

    #[test]
    fn test_rejected_ids() {
        assert_eq!(SlideId::from_element_id("slide"), None);
        assert_eq!(SlideId::from_element_id("slideX"), None);
        assert_eq!(SlideId::from_element_id("intro"), None);
        assert_eq!(SlideId::from_element_id("Slide1"), None);
        assert_eq!(SlideId::from_element_id("slide-"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SlideId::new(4).to_string(), "slide4");
        assert_eq!(SlideId::FIRST.next().to_string(), "slide1");
        assert_eq!(SlideId::new(1).prev(), SlideId::FIRST);
    }
}
