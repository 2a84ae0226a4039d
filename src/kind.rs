/*!
# OptParser: Value Kinds.
*/

use crate::OptError;
use std::{
	fmt,
	str::FromStr,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Value Kind.
///
/// This is the type a flag's value should be coerced into. See
/// [`convert`](crate::convert) for the particulars.
pub enum OptKind {
	/// # Anything (Passthrough).
	Any,

	#[default]
	/// # String.
	String,

	/// # Integer.
	Int,

	/// # Float.
	Float,

	/// # Boolean.
	///
	/// Boolean flags are switches: their presence is their value.
	Bool,
}

impl fmt::Display for OptKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OptKind {
	type Err = OptError;

	/// # From Tag.
	///
	/// `object` is accepted as an alias of `any`.
	fn from_str(src: &str) -> Result<Self, Self::Err> {
		match src.trim() {
			"any" | "object" => Ok(Self::Any),
			"string" => Ok(Self::String),
			"int" => Ok(Self::Int),
			"float" => Ok(Self::Float),
			"bool" => Ok(Self::Bool),
			other => Err(OptError::UnknownKind(other.to_owned())),
		}
	}
}

impl OptKind {
	#[must_use]
	/// # As String Slice.
	///
	/// Return the tag for the kind.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Any => "any",
			Self::String => "string",
			Self::Int => "int",
			Self::Float => "float",
			Self::Bool => "bool",
		}
	}

	#[must_use]
	/// # Is Bool?
	pub const fn is_bool(self) -> bool { matches!(self, Self::Bool) }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_from_str() {
		for kind in [OptKind::Any, OptKind::String, OptKind::Int, OptKind::Float, OptKind::Bool] {
			assert_eq!(kind.as_str().parse::<OptKind>(), Ok(kind));
			assert_eq!(kind.to_string(), kind.as_str());
		}

		assert_eq!("object".parse::<OptKind>(), Ok(OptKind::Any));
		assert_eq!(" int ".parse::<OptKind>(), Ok(OptKind::Int));
		assert_eq!(
			"complex".parse::<OptKind>(),
			Err(OptError::UnknownKind("complex".to_owned())),
		);
	}
}
