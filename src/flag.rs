/*!
# OptParser: Flag Definitions.
*/

use crate::{
	OptKind,
	OptValue,
};
use std::fmt;



/// # Value Callback.
type ValueFn = Box<dyn FnMut(Option<&OptValue>)>;

/// # Exit Callback.
type ExitFn = Box<dyn FnMut(Option<&OptValue>) -> String>;



/// # Callback.
///
/// What, if anything, to do with a flag's value after each parse.
pub(crate) enum Callback {
	/// # Nothing.
	None,

	/// # Receive the Value.
	Value(ValueFn),

	/// # Render Output and Exit (If Given).
	Exit(ExitFn),
}



/// # Flag.
///
/// A flag definition for [`OptParser::on`](crate::OptParser::on), built up
/// builder-style.
///
/// Every flag has a single-character short alias. Unless one is set
/// explicitly with [`Flag::with_short`], it is the first character of the
/// name.
///
/// ## Examples
///
/// ```
/// use optparser::{Flag, OptKind};
///
/// let flag = Flag::new("port", OptKind::Int)
///     .with_default(80)
///     .with_short('P');
///
/// assert_eq!(flag.name(), "port");
/// assert_eq!(flag.short(), Some('P'));
/// ```
pub struct Flag {
	/// # Name.
	name: String,

	/// # Kind.
	kind: OptKind,

	/// # Default Value.
	default: Option<OptValue>,

	/// # Explicit Short Alias.
	short: Option<char>,

	/// # Callback.
	pub(crate) callback: Callback,
}

impl fmt::Debug for Flag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Flag")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("default", &self.default)
			.field("short", &self.short())
			.field("callback", &match self.callback {
				Callback::None => "none",
				Callback::Value(_) => "value",
				Callback::Exit(_) => "exit",
			})
			.finish()
	}
}

impl Flag {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(name: S, kind: OptKind) -> Self {
		Self {
			name: name.into(),
			kind,
			default: None,
			short: None,
			callback: Callback::None,
		}
	}

	#[must_use]
	/// # Boolean Flag.
	///
	/// Shorthand for `Flag::new(name, OptKind::Bool)`.
	pub fn switch<S: Into<String>>(name: S) -> Self { Self::new(name, OptKind::Bool) }

	#[must_use]
	/// # With Default.
	///
	/// Set the value to use when the flag is missing, or given without a
	/// value.
	pub fn with_default<V: Into<OptValue>>(mut self, default: V) -> Self {
		self.default = Some(default.into());
		self
	}

	#[must_use]
	/// # With Short Alias.
	pub fn with_short(mut self, short: char) -> Self {
		self.short = Some(short);
		self
	}

	#[must_use]
	/// # With Callback.
	///
	/// The callback is invoked once per parse, in registration order, with
	/// whatever the flag resolved to.
	pub fn with_callback<F>(mut self, cb: F) -> Self
	where F: FnMut(Option<&OptValue>) + 'static {
		self.callback = Callback::Value(Box::new(cb));
		self
	}

	#[must_use]
	/// # With Exit Callback.
	///
	/// If the flag is given, the parse stops after invoking the callback and
	/// returns its output as [`OptError::Exit`](crate::OptError::Exit). This
	/// is meant for things like `--version`.
	pub fn with_exit<F>(mut self, cb: F) -> Self
	where F: FnMut(Option<&OptValue>) -> String + 'static {
		self.callback = Callback::Exit(Box::new(cb));
		self
	}
}

impl Flag {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> OptKind { self.kind }

	#[must_use]
	/// # Default.
	pub const fn default(&self) -> Option<&OptValue> { self.default.as_ref() }

	#[must_use]
	/// # Short Alias.
	///
	/// Return the explicit alias, or failing that, the first character of
	/// the name. This is only `None` for empty names.
	pub fn short(&self) -> Option<char> {
		self.short.or_else(|| self.name.chars().next())
	}

	/// # Matches?
	///
	/// True if `name` is this flag's name or (single-character) alias.
	pub(crate) fn matches(&self, name: &str) -> bool {
		self.name == name ||
		single_char(name).is_some_and(|c| self.short() == Some(c))
	}
}



/// # Single Character.
///
/// Return the character if `s` consists of exactly one.
pub(crate) fn single_char(s: &str) -> Option<char> {
	let mut chars = s.chars();
	let c = chars.next()?;
	if chars.next().is_none() { Some(c) } else { None }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_short() {
		assert_eq!(Flag::new("port", OptKind::Int).short(), Some('p'));
		assert_eq!(Flag::new("port", OptKind::Int).with_short('x').short(), Some('x'));
		assert_eq!(Flag::new("über", OptKind::Any).short(), Some('ü'));
		assert_eq!(Flag::new("", OptKind::Any).short(), None);
	}

	#[test]
	fn t_matches() {
		let flag = Flag::switch("verbose");
		assert!(flag.matches("verbose"));
		assert!(flag.matches("v"));
		assert!(! flag.matches("V"));
		assert!(! flag.matches("verb"));
		assert!(! flag.matches("vv"));

		let flag = Flag::switch("verbose").with_short('V');
		assert!(flag.matches("V"));
		assert!(! flag.matches("v"));
	}

	#[test]
	fn t_builder() {
		let flag = Flag::new("port", OptKind::Int).with_default(80);
		assert_eq!(flag.kind(), OptKind::Int);
		assert_eq!(flag.default(), Some(&OptValue::Int(80)));
		assert!(matches!(flag.callback, Callback::None));

		let flag = flag.with_callback(|_| {});
		assert!(matches!(flag.callback, Callback::Value(_)));

		let flag = flag.with_exit(|_| String::new());
		assert!(matches!(flag.callback, Callback::Exit(_)));

		assert_eq!(
			format!("{:?}", Flag::switch("v")),
			"Flag { name: \"v\", kind: Bool, default: None, short: Some('v'), callback: \"none\" }",
		);
	}

	#[test]
	fn t_single_char() {
		assert_eq!(single_char("p"), Some('p'));
		assert_eq!(single_char("ü"), Some('ü'));
		assert_eq!(single_char(""), None);
		assert_eq!(single_char("pp"), None);
	}
}
