/*!
# OptParser: Normalization.

Raw arguments are scanned once, left to right, and split into an ordered
token list — flag names, their values, and switch markers — and a tail of
positional leftovers.
*/

use tracing::trace;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Normalized Token.
pub enum Token {
	/// # Flag Name.
	///
	/// The leading dash(es) have been stripped, so `--port` and `-p` become
	/// `port` and `p` respectively.
	Flag(String),

	/// # Value.
	///
	/// A bare word immediately following a flag name.
	Value(String),

	/// # Switch Marker.
	///
	/// This follows the name of a boolean flag in place of a value. Its
	/// presence alone makes the flag `true`.
	Switch,
}

impl Token {
	#[must_use]
	/// # Flag Name.
	///
	/// Return the flag name if this is a [`Token::Flag`].
	pub fn as_flag(&self) -> Option<&str> {
		if let Self::Flag(s) = self { Some(s.as_str()) } else { None }
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Normalized Arguments.
///
/// This is the immutable result of a single normalization pass. Parsers swap
/// in a fresh one every time new arguments are loaded; nothing is ever
/// patched in place.
///
/// The rules are simple:
/// * Anything starting with `-` is a flag. One leading dash is stripped, or two if there are two.
/// * If `is_switch` claims the flag, a [`Token::Switch`] marker is added right after it.
/// * A bare word directly after a (non-switch) flag is that flag's value.
/// * Every other bare word — including any before the first flag — goes to the tail.
///
/// ## Examples
///
/// ```
/// use optparser::{Normalized, Token};
///
/// let norm = Normalized::new(
///     ["notes.txt", "--port", "80", "-v", "extra"],
///     |name| name == "v",
/// );
///
/// assert_eq!(
///     norm.args(),
///     [
///         Token::Flag("port".to_owned()),
///         Token::Value("80".to_owned()),
///         Token::Flag("v".to_owned()),
///         Token::Switch,
///     ],
/// );
/// assert_eq!(norm.tail(), ["notes.txt", "extra"]);
/// ```
pub struct Normalized {
	/// # Tokens.
	args: Vec<Token>,

	/// # Positional Leftovers.
	tail: Vec<String>,
}

impl Normalized {
	/// # New.
	///
	/// Normalize `raw`, using `is_switch` to decide which (stripped) flag
	/// names are boolean.
	pub fn new<I, S, F>(raw: I, is_switch: F) -> Self
	where
		I: IntoIterator<Item=S>,
		S: AsRef<str>,
		F: Fn(&str) -> bool,
	{
		let mut args: Vec<Token> = Vec::new();
		let mut tail: Vec<String> = Vec::new();
		let mut expecting = false;

		for raw in raw {
			let raw = raw.as_ref();
			if let Some(name) = strip_dashes(raw) {
				let switch = is_switch(name);
				args.push(Token::Flag(name.to_owned()));

				// Switches are self-contained; whatever follows belongs to
				// the tail.
				expecting = switch;
				if switch { args.push(Token::Switch); }
			}
			else if expecting || args.is_empty() { tail.push(raw.to_owned()); }
			else {
				args.push(Token::Value(raw.to_owned()));
				expecting = true;
			}
		}

		trace!(tokens = args.len(), tail = tail.len(), "Normalized arguments.");
		Self { args, tail }
	}

	#[must_use]
	/// # Tokens.
	pub fn args(&self) -> &[Token] { &self.args }

	#[must_use]
	/// # Tail.
	///
	/// Return the positional arguments not claimed by any flag.
	pub fn tail(&self) -> &[String] { &self.tail }

	#[must_use]
	/// # Is Empty?
	///
	/// True if there are neither tokens nor tail arguments.
	pub fn is_empty(&self) -> bool { self.args.is_empty() && self.tail.is_empty() }

	/// # Flag Names.
	///
	/// Iterate over the flag names, in order, skipping values and markers.
	pub fn flags(&self) -> impl Iterator<Item=&str> {
		self.args.iter().filter_map(Token::as_flag)
	}

	/// # Find Flag.
	///
	/// Return the index of the first flag token matching `cb`.
	pub(crate) fn position<F>(&self, cb: F) -> Option<usize>
	where F: Fn(&str) -> bool {
		self.args.iter().position(|t| t.as_flag().is_some_and(&cb))
	}

	/// # Token After.
	///
	/// Return the token immediately following `idx`, if any.
	pub(crate) fn after(&self, idx: usize) -> Option<&Token> {
		self.args.get(idx + 1)
	}
}



/// # Strip Dashes.
///
/// Return the flag name if `raw` is dash-prefixed.
fn strip_dashes(raw: &str) -> Option<&str> {
	raw.strip_prefix("--").or_else(|| raw.strip_prefix('-'))
}
