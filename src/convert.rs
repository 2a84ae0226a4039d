/*!
# OptParser: Conversion.

Raw argument strings are coerced into typed [`OptValue`]s here. Conversion is
lenient by design of the format: numbers are read from the front of the
string until something non-numeric turns up, and garbage becomes zero rather
than an error.
*/

use crate::{
	OptError,
	OptKind,
	OptValue,
};



#[must_use]
/// # Convert.
///
/// Coerce `raw` into `kind`:
///
/// | Kind | Result |
/// | ---- | ------ |
/// | `Any`, `String` | The string, unchanged. |
/// | `Int` | The leading integer, or `0`. Out-of-range values saturate. |
/// | `Float` | The leading float, or `0.0`. |
/// | `Bool` | `false` for empty, `0`, `off`, `false`, or `no` (case-insensitive); `true` otherwise. |
///
/// ## Examples
///
/// ```
/// use optparser::{convert, OptKind, OptValue};
///
/// assert_eq!(convert("8000", OptKind::Int), OptValue::Int(8000));
/// assert_eq!(convert("12abc", OptKind::Int), OptValue::Int(12));
/// assert_eq!(convert("abc", OptKind::Float), OptValue::Float(0.0));
/// assert_eq!(convert("off", OptKind::Bool), OptValue::Bool(false));
/// ```
pub fn convert(raw: &str, kind: OptKind) -> OptValue {
	match kind {
		OptKind::Any | OptKind::String => OptValue::Str(raw.to_owned()),
		OptKind::Int => OptValue::Int(lenient_int(raw)),
		OptKind::Float => OptValue::Float(lenient_float(raw)),
		OptKind::Bool => OptValue::Bool(truthy(raw)),
	}
}

/// # Convert (Tagged).
///
/// Same as [`convert`], but with the kind given as a textual tag — `any`,
/// `object`, `string`, `int`, `float`, or `bool`.
///
/// ## Examples
///
/// ```
/// use optparser::{convert_tagged, OptValue};
///
/// assert_eq!(convert_tagged("1.5", "float"), Ok(OptValue::Float(1.5)));
/// assert!(convert_tagged("1.5", "decimal").is_err());
/// ```
///
/// ## Errors
///
/// Unrecognized tags return [`OptError::Conversion`].
pub fn convert_tagged(raw: &str, tag: &str) -> Result<OptValue, OptError> {
	tag.parse::<OptKind>()
		.map(|kind| convert(raw, kind))
		.map_err(|_| OptError::Conversion {
			value: raw.to_owned(),
			kind: tag.to_owned(),
		})
}



/// # Truthy?
fn truthy(raw: &str) -> bool {
	let raw = raw.trim();
	! (
		raw.is_empty() ||
		raw == "0" ||
		raw.eq_ignore_ascii_case("off") ||
		raw.eq_ignore_ascii_case("false") ||
		raw.eq_ignore_ascii_case("no")
	)
}

/// # Lenient Integer.
///
/// Read an optionally-signed run of digits from the start of the string,
/// ignoring leading whitespace. A single underscore between two digits is
/// treated as a separator, so `1_000` is a thousand.
fn lenient_int(raw: &str) -> i64 {
	let mut bytes = raw.trim_start().as_bytes();
	let neg = match bytes {
		[b'-', rest @ ..] => { bytes = rest; true },
		[b'+', rest @ ..] => { bytes = rest; false },
		_ => false,
	};

	let mut out = 0_i64;
	let mut seen = false;
	loop {
		match bytes {
			[b @ b'0'..=b'9', rest @ ..] => {
				let d = i64::from(b - b'0');
				out = out.saturating_mul(10);
				out = if neg { out.saturating_sub(d) } else { out.saturating_add(d) };
				bytes = rest;
				seen = true;
			},
			[b'_', rest @ ..] if seen && rest.first().is_some_and(u8::is_ascii_digit) => {
				bytes = rest;
			},
			_ => break,
		}
	}

	out
}

/// # Lenient Float.
///
/// Find the longest float-looking prefix — sign, digits, decimal, exponent —
/// and parse that.
fn lenient_float(raw: &str) -> f64 {
	let raw = raw.trim_start();
	let bytes = raw.as_bytes();

	let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
	let mut digits = skip_digits(bytes, &mut end);

	// Fraction.
	if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
		end += 1;
		digits += skip_digits(bytes, &mut end);
	}

	if digits == 0 { return 0.0; }

	// Exponent, but only if it is complete.
	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let mut exp = end + 1;
		if matches!(bytes.get(exp), Some(b'-' | b'+')) { exp += 1; }
		if skip_digits(bytes, &mut exp) != 0 { end = exp; }
	}

	raw.get(..end)
		.and_then(|s| s.replace('_', "").parse::<f64>().ok())
		.unwrap_or(0.0)
}

/// # Skip Digits.
///
/// Advance `pos` past any ASCII digits, and any lone underscores sitting
/// between them, returning how many digits there were.
fn skip_digits(bytes: &[u8], pos: &mut usize) -> usize {
	let mut digits = 0;
	loop {
		match bytes.get(*pos) {
			Some(b'0'..=b'9') => { digits += 1; },
			Some(b'_') if
				digits != 0 &&
				bytes.get(*pos + 1).is_some_and(u8::is_ascii_digit) => {},
			_ => break,
		}
		*pos += 1;
	}
	digits
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_lenient_int() {
		for (raw, expected) in [
			("42", 42),
			("  42", 42),
			("+7", 7),
			("-7", -7),
			("12abc", 12),
			("1.9", 1),
			("abc", 0),
			("", 0),
			("-", 0),
			("99999999999999999999", i64::MAX),
			("-99999999999999999999", i64::MIN),
			("1_000", 1000),
			("-1_000_000", -1_000_000),
			("1__0", 1),
			("_1", 0),
			("1_", 1),
			("-_1", 0),
		] {
			assert_eq!(lenient_int(raw), expected, "Int mismatch for {raw:?}.");
		}
	}

	#[test]
	fn t_lenient_float() {
		for (raw, expected) in [
			("1.5", 1.5),
			(" 1.5", 1.5),
			("-0.25", -0.25),
			(".5", 0.5),
			("-.5", -0.5),
			("3.", 3.0),
			("2.5e2x", 250.0),
			("2e", 2.0),
			("2e-", 2.0),
			("1e-1", 0.1),
			("x", 0.0),
			("", 0.0),
			("-", 0.0),
			(".", 0.0),
			("1_000.5", 1000.5),
			("0.000_5", 0.0005),
			("1e1_0", 1e10),
			("1__5", 1.0),
			("_1.5", 0.0),
			("1_.5", 1.0),
		] {
			assert_eq!(
				OptValue::Float(lenient_float(raw)),
				OptValue::Float(expected),
				"Float mismatch for {raw:?}.",
			);
		}
	}

	#[test]
	fn t_truthy() {
		for raw in ["1", "on", "yes", "true", "anything", " x "] {
			assert!(truthy(raw), "{raw:?} should be truthy.");
		}
		for raw in ["", " ", "0", "off", "OFF", "false", "False", "no"] {
			assert!(! truthy(raw), "{raw:?} should be falsey.");
		}
	}

	#[test]
	fn t_convert() {
		assert_eq!(convert("0.0.0.0", OptKind::Any), OptValue::Str("0.0.0.0".to_owned()));
		assert_eq!(convert("id", OptKind::String), OptValue::Str("id".to_owned()));
		assert_eq!(convert("8080", OptKind::Int), OptValue::Int(8080));
		assert_eq!(convert("8080", OptKind::Float), OptValue::Float(8080.0));
		assert_eq!(convert("8080", OptKind::Bool), OptValue::Bool(true));
	}

	#[test]
	fn t_convert_tagged() {
		assert_eq!(convert_tagged("8", "int"), Ok(OptValue::Int(8)));
		assert_eq!(convert_tagged("8", "object"), Ok(OptValue::Str("8".to_owned())));
		assert_eq!(
			convert_tagged("8", "complex"),
			Err(OptError::Conversion { value: "8".to_owned(), kind: "complex".to_owned() }),
		);
	}
}
