//! Register value support.

/// A typed view over one addressable control/status word.
///
/// Every named register type wraps the raw word in a `repr(transparent)`
/// newtype; `from_raw`/`to_raw` convert at the bus boundary. All bit
/// patterns are representable, so the conversion is total.
pub trait Register: Sized {
    type Regwidth;

    fn from_raw(val: Self::Regwidth) -> Self;

    fn to_raw(self) -> Self::Regwidth;
}
