/*!
# OptParser: Errors

This is the obligatory error enum. Everything the parser can complain about
ends up here, including the "happy" [`OptError::Exit`] case, which only
means an exit flag was given and the host should print and quit.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error Enum.
pub enum OptError {
	/// # Unrecognized Type Tag.
	///
	/// Raised when a value is converted using a textual type tag that is not
	/// one of `any`, `object`, `string`, `int`, `float`, or `bool`.
	#[error("Cannot convert {value:?} into {kind}.")]
	Conversion {
		/// # The Raw Value.
		value: String,

		/// # The Offending Tag.
		kind: String,
	},

	/// # Duplicate Flag.
	#[error("Duplicate flag: {0}")]
	DuplicateFlag(String),

	/// # Duplicate Short Alias.
	///
	/// Two flags cannot share a short alias. Give one of them an explicit
	/// alias with [`Flag::with_short`](crate::Flag::with_short).
	#[error("Short alias -{short} for {flag} is already used by {other}.")]
	DuplicateShort {
		/// # The Alias.
		short: char,

		/// # The Flag Being Registered.
		flag: String,

		/// # The Flag Already Holding the Alias.
		other: String,
	},

	/// # Exit Requested.
	///
	/// An exit flag (see [`OptParser::on_exit`](crate::OptParser::on_exit))
	/// was given. The payload is whatever its callback returned; the host is
	/// expected to print it and exit with [`OptError::exit_code`].
	#[error("{0}")]
	Exit(String),

	/// # Unknown Type Tag.
	#[error("Unknown type: {0}")]
	UnknownKind(String),

	/// # Unknown Option(s).
	///
	/// This is what the default unknown-flag strategy returns.
	#[error("unknown option: {}", .0.join(", "))]
	UnknownOption(Vec<String>),
}

impl OptError {
	#[must_use]
	/// # Exit Code.
	///
	/// Exit requests are successes; everything else is a failure.
	pub const fn exit_code(&self) -> i32 {
		match self {
			Self::Exit(_) => 0,
			_ => 1,
		}
	}

	#[must_use]
	/// # Is Exit?
	pub const fn is_exit(&self) -> bool { matches!(self, Self::Exit(_)) }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		for (err, expected) in [
			(
				OptError::UnknownOption(vec!["bogus".to_owned(), "?".to_owned()]),
				"unknown option: bogus, ?",
			),
			(
				OptError::Conversion { value: "1".to_owned(), kind: "complex".to_owned() },
				"Cannot convert \"1\" into complex.",
			),
			(
				OptError::DuplicateShort {
					short: 'p',
					flag: "port".to_owned(),
					other: "pretty".to_owned(),
				},
				"Short alias -p for port is already used by pretty.",
			),
			(OptError::Exit("1.0.0".to_owned()), "1.0.0"),
		] {
			assert_eq!(err.to_string(), expected, "Display mismatch for {err:?}.");
		}
	}

	#[test]
	fn t_exit_code() {
		assert_eq!(OptError::Exit(String::new()).exit_code(), 0);
		assert!(OptError::Exit(String::new()).is_exit());
		assert_eq!(OptError::UnknownOption(Vec::new()).exit_code(), 1);
		assert_eq!(OptError::DuplicateFlag("port".to_owned()).exit_code(), 1);
		assert!(! OptError::UnknownKind("x".to_owned()).is_exit());
	}
}
