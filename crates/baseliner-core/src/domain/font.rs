//! Font loading policy for the design-tool plugin path.
//!
//! The plugin runtime can only load fonts by (family, named style) pairs,
//! and real font files disagree wildly about style naming.  Rather than
//! nested retry blocks, the policy is plain data: ordered candidate lists
//! consumed by [`try_in_order`].

/// Candidate font families tried when the requested family fails to load.
pub const FALLBACK_FAMILIES: &[&str] = &["Inter", "Arial", "Helvetica", "Roboto"];

/// Canonical style name for a numeric weight (100 → Thin … 900 → Black).
pub fn style_name(weight: u16) -> &'static str {
    match weight {
        0..=100 => "Thin",
        101..=200 => "ExtraLight",
        201..=300 => "Light",
        301..=400 => "Regular",
        401..=500 => "Medium",
        501..=600 => "SemiBold",
        601..=700 => "Bold",
        701..=800 => "ExtraBold",
        _ => "Black",
    }
}

/// Ordered named-style candidates for a numeric weight.
///
/// The first entry is the canonical name; the rest are the degradations a
/// font is most likely to carry instead.
pub fn style_candidates(weight: u16) -> &'static [&'static str] {
    match weight {
        0..=100 => &["Thin", "UltraLight", "ExtraLight", "Light", "Regular"],
        101..=200 => &["ExtraLight", "UltraLight", "Light", "Regular"],
        201..=300 => &["Light", "Regular"],
        301..=400 => &["Regular", "Normal"],
        401..=500 => &["Medium", "Regular"],
        501..=600 => &["SemiBold", "Medium", "Bold"],
        601..=700 => &["Bold", "SemiBold", "Medium"],
        701..=800 => &["ExtraBold", "Bold", "SemiBold"],
        _ => &["Black", "ExtraBold", "Bold"],
    }
}

/// The error produced when every candidate in a fallback chain failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhausted<E> {
    /// The failure from the last candidate attempted, if any were.
    pub last: Option<E>,
}

/// Try candidates in order; the first success wins.
///
/// Returns [`Exhausted`] carrying the last failure when no candidate
/// succeeds (or when the list is empty).
pub fn try_in_order<C, T, E>(
    candidates: impl IntoIterator<Item = C>,
    mut attempt: impl FnMut(C) -> Result<T, E>,
) -> Result<T, Exhausted<E>> {
    let mut last = None;
    for candidate in candidates {
        match attempt(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last = Some(e),
        }
    }
    Err(Exhausted { last })
}
