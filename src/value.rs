/*!
# OptParser: Values.
*/

use std::fmt;



#[derive(Debug, Clone, PartialEq)]
/// # Resolved Value.
///
/// This is what a flag resolves to after conversion, and also what defaults
/// are declared as.
pub enum OptValue {
	/// # Boolean.
	Bool(bool),

	/// # Float.
	Float(f64),

	/// # Integer.
	Int(i64),

	/// # String.
	Str(String),
}

impl fmt::Display for OptValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Str(v) => f.write_str(v),
		}
	}
}

/// # Helper: From Primitives.
macro_rules! from_primitive {
	($($from:ty, $var:ident, $conv:expr;)+) => ($(
		impl From<$from> for OptValue {
			#[inline]
			fn from(src: $from) -> Self { Self::$var($conv(src)) }
		}
	)+);
}

from_primitive!(
	bool, Bool, std::convert::identity;
	f64, Float, std::convert::identity;
	i32, Int, i64::from;
	i64, Int, std::convert::identity;
	&str, Str, str::to_owned;
	String, Str, std::convert::identity;
);

impl OptValue {
	#[must_use]
	/// # As Bool.
	///
	/// Returns `None` unless the value is a [`OptValue::Bool`].
	pub const fn as_bool(&self) -> Option<bool> {
		if let Self::Bool(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As Float.
	///
	/// Integers are widened; other variants return `None`.
	#[expect(clippy::cast_precision_loss, reason = "Widening is lossy for huge ints, and that's fine.")]
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			Self::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	#[must_use]
	/// # As Integer.
	pub const fn as_int(&self) -> Option<i64> {
		if let Self::Int(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As String Slice.
	pub fn as_str(&self) -> Option<&str> {
		if let Self::Str(v) = self { Some(v.as_str()) } else { None }
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_from() {
		assert_eq!(OptValue::from(80), OptValue::Int(80));
		assert_eq!(OptValue::from(80_i64), OptValue::Int(80));
		assert_eq!(OptValue::from(1.5), OptValue::Float(1.5));
		assert_eq!(OptValue::from(true), OptValue::Bool(true));
		assert_eq!(OptValue::from("id"), OptValue::Str("id".to_owned()));
		assert_eq!(OptValue::from(String::from("id")), OptValue::Str("id".to_owned()));
	}

	#[test]
	fn t_accessors() {
		let v = OptValue::Int(3);
		assert_eq!(v.as_int(), Some(3));
		assert_eq!(v.as_float(), Some(3.0));
		assert_eq!(v.as_bool(), None);
		assert_eq!(v.as_str(), None);
		assert_eq!(v.to_string(), "3");

		let v = OptValue::Str("0.0.0.0".to_owned());
		assert_eq!(v.as_str(), Some("0.0.0.0"));
		assert_eq!(v.as_int(), None);
		assert_eq!(v.to_string(), "0.0.0.0");

		assert_eq!(OptValue::Bool(false).as_bool(), Some(false));
		assert_eq!(OptValue::Bool(false).to_string(), "false");
	}
}
