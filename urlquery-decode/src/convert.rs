use log::trace;
use urlquery_core::{Kind, Slot};

use crate::{DecodeError, DecodeErrorKind, TagOptions};

/// Error returned by [`parse_bool`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoolError {
    input: String,
}

impl core::fmt::Display for ParseBoolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid boolean literal {:?}", self.input)
    }
}

impl core::error::Error for ParseBoolError {}

/// Parses a boolean the lenient way query strings spell them.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`, nothing else.
pub fn parse_bool(s: &str) -> Result<bool, ParseBoolError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError {
            input: s.to_string(),
        }),
    }
}

fn parse_signed<T: TryFrom<i64>>(raw: &str, kind: Kind) -> Result<T, DecodeError> {
    let n: i64 = raw.parse().map_err(DecodeErrorKind::ParseInt)?;
    T::try_from(n).map_err(|_| DecodeError::incompatible(raw, kind))
}

fn parse_unsigned<T: TryFrom<u64>>(raw: &str, kind: Kind) -> Result<T, DecodeError> {
    // unsigned values take no sign at all; parsing the lone `+` yields the same
    // "invalid digit" error a `-` gets
    let digits = if raw.starts_with('+') { &raw[..1] } else { raw };
    let n: u64 = digits.parse().map_err(DecodeErrorKind::ParseInt)?;
    T::try_from(n).map_err(|_| DecodeError::incompatible(raw, kind))
}

/// Whether `raw` spells infinity outright (`inf`, `-Infinity`, ...), as opposed to a finite
/// literal too large for `f64`
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_float(raw: &str, kind: Kind) -> Result<f64, DecodeError> {
    let n: f64 = raw.parse().map_err(DecodeErrorKind::ParseFloat)?;
    if n.is_infinite() && !is_infinity_literal(raw) {
        return Err(DecodeError::incompatible(raw, kind));
    }
    Ok(n)
}

/// Converts `raw` according to the kind of `slot`, and writes the result through it.
///
/// Pointers are followed first; converting into a pointer to nothing is an error. Sealed slots
/// are left alone. Integers are parsed as 64-bit base-10 and then narrowed, floats as `f64`.
/// Numbers that overflow their field, including finite literals beyond `f64`, are
/// [`Incompatible`](DecodeErrorKind::Incompatible).
/// Kinds without a conversion rule (records, tuples, sequences, maps, opaque types) are
/// [`Unsupported`](DecodeErrorKind::Unsupported) no matter what `raw` contains.
///
/// `options` is accepted for options that change how values are spelled; none do yet.
pub fn convert_str(
    raw: &str,
    slot: Slot<'_>,
    _options: &TagOptions<'_>,
) -> Result<(), DecodeError> {
    let Some(slot) = slot.follow() else {
        return Err(DecodeErrorKind::NilTarget.into());
    };

    match slot {
        Slot::Sealed(shape) => {
            trace!("Not assigning sealed value of type {shape}");
        }
        Slot::I8(v) => *v = parse_signed(raw, Kind::I8)?,
        Slot::I16(v) => *v = parse_signed(raw, Kind::I16)?,
        Slot::I32(v) => *v = parse_signed(raw, Kind::I32)?,
        Slot::I64(v) => *v = parse_signed(raw, Kind::I64)?,
        Slot::I128(v) => *v = parse_signed(raw, Kind::I128)?,
        Slot::Isize(v) => *v = parse_signed(raw, Kind::Isize)?,
        Slot::U8(v) => *v = parse_unsigned(raw, Kind::U8)?,
        Slot::U16(v) => *v = parse_unsigned(raw, Kind::U16)?,
        Slot::U32(v) => *v = parse_unsigned(raw, Kind::U32)?,
        Slot::U64(v) => *v = parse_unsigned(raw, Kind::U64)?,
        Slot::U128(v) => *v = parse_unsigned(raw, Kind::U128)?,
        Slot::Usize(v) => *v = parse_unsigned(raw, Kind::Usize)?,
        Slot::F32(v) => {
            let n = parse_float(raw, Kind::F32)?;
            // spelled-out infinities pass through, like they do for f64
            if n.is_finite() && n.abs() > f32::MAX as f64 {
                return Err(DecodeError::incompatible(raw, Kind::F32));
            }
            *v = n as f32;
        }
        Slot::F64(v) => *v = parse_float(raw, Kind::F64)?,
        Slot::Bool(v) => *v = parse_bool(raw).map_err(DecodeErrorKind::ParseBool)?,
        Slot::String(v) => {
            v.clear();
            v.push_str(raw);
        }
        other => {
            return Err(DecodeErrorKind::Unsupported { kind: other.kind() }.into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlquery_core::Queryable;

    fn convert<T: Queryable>(raw: &str, value: &mut T) -> Result<(), DecodeError> {
        convert_str(raw, value.slot(), &TagOptions::default())
    }

    #[test]
    fn bool_grammar() {
        for yes in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(yes), Ok(true), "{yes}");
        }
        for no in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(no), Ok(false), "{no}");
        }
        for bad in ["", "yes", "tRUE", "2", " true"] {
            assert!(parse_bool(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn signed_boundaries() {
        let mut n = 0i8;
        convert("127", &mut n).unwrap();
        assert_eq!(n, 127);
        convert("-128", &mut n).unwrap();
        assert_eq!(n, -128);

        let err = convert("128", &mut n).unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::Incompatible { kind: Kind::I8, .. }
        ));
        assert_eq!(n, -128);
    }

    #[test]
    fn unsigned_boundaries() {
        let mut n = 0u16;
        convert("65535", &mut n).unwrap();
        assert_eq!(n, 65535);
        assert!(convert("65536", &mut n).unwrap_err().to_string().contains("incompatible"));

        // a sign is a parse error, not an overflow
        assert!(matches!(
            convert("-1", &mut n).unwrap_err().kind,
            DecodeErrorKind::ParseInt(_)
        ));
    }

    #[test]
    fn unsigned_values_take_no_plus_sign() {
        let mut n = 0u32;
        let err = convert("+5", &mut n).unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::ParseInt(_)));
        assert_eq!(err.to_string(), "invalid digit found in string");
        assert_eq!(n, 0);

        // signed values do
        let mut i = 0i32;
        convert("+5", &mut i).unwrap();
        assert_eq!(i, 5);
    }

    #[test]
    fn wide_integers_go_through_64_bits() {
        let mut n = 0u128;
        convert("18446744073709551615", &mut n).unwrap();
        assert_eq!(n, u64::MAX as u128);
        assert!(matches!(
            convert("18446744073709551616", &mut n).unwrap_err().kind,
            DecodeErrorKind::ParseInt(_)
        ));
    }

    #[test]
    fn floats() {
        let mut x = 0f32;
        convert("-2.751e-6", &mut x).unwrap();
        assert_eq!(x, -2.751e-6_f64 as f32);
        assert!(convert("1e39", &mut x).unwrap_err().to_string().contains("incompatible"));
        convert("inf", &mut x).unwrap();
        assert!(x.is_infinite());

        let mut y = 0f64;
        convert("1e39", &mut y).unwrap();
        assert_eq!(y, 1e39);
        assert!(matches!(
            convert("abc", &mut y).unwrap_err().kind,
            DecodeErrorKind::ParseFloat(_)
        ));
    }

    #[test]
    fn finite_literals_beyond_f64_are_incompatible() {
        let mut y = 1.5f64;
        let err = convert("1e400", &mut y).unwrap_err();
        assert!(matches!(
            err.kind,
            DecodeErrorKind::Incompatible { kind: Kind::F64, .. }
        ));
        assert_eq!(y, 1.5);
        assert!(convert("-1e400", &mut y).is_err());

        let mut x = 0f32;
        assert!(convert("1e400", &mut x).unwrap_err().to_string().contains("incompatible"));
    }

    #[test]
    fn spelled_out_infinities_are_accepted() {
        let mut y = 0f64;
        for raw in ["inf", "+Inf", "-infinity", "Infinity"] {
            convert(raw, &mut y).unwrap();
            assert!(y.is_infinite(), "{raw}");
        }
        assert!(y.is_sign_positive());
        convert("-inf", &mut y).unwrap();
        assert!(y.is_sign_negative());
    }

    #[test]
    fn strings_are_copied_verbatim() {
        let mut s = String::from("old");
        convert("  spaced %20 ", &mut s).unwrap();
        assert_eq!(s, "  spaced %20 ");
    }

    #[test]
    fn pointers_are_followed() {
        let mut some = Some(3u8);
        convert("9", &mut some).unwrap();
        assert_eq!(some, Some(9));

        let mut none: Option<u8> = None;
        assert!(matches!(
            convert("9", &mut none).unwrap_err().kind,
            DecodeErrorKind::NilTarget
        ));
    }

    #[test]
    fn sealed_slots_are_a_no_op() {
        let slot = Slot::Sealed(<u8 as Queryable>::SHAPE);
        convert_str("not even a number", slot, &TagOptions::default()).unwrap();
    }

    #[test]
    fn no_rule_means_unsupported() {
        let mut c = 'a';
        let err = convert("b", &mut c).unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::Unsupported { kind: Kind::Char }));

        let mut pair = (1u8, 2u8);
        let err = convert("1", &mut pair).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported field value type tuple");
    }
}
