/*!
# OptParser: Parser.
*/

use crate::{
	convert,
	flag::{
		single_char,
		Callback,
	},
	Flag,
	Normalized,
	OptError,
	OptKind,
	OptValue,
	Token,
};
use indexmap::IndexMap;
use std::fmt;
use tracing::{
	debug,
	trace,
};



/// # Resolved Options.
///
/// Flag names and their values, in registration order.
pub type Opts = IndexMap<String, OptValue>;

/// # Unknown-Flag Strategy.
type UnknownFn = Box<dyn FnMut(&[String]) -> Result<(), OptError>>;



/// # Flag Parser.
///
/// `OptParser` holds a registry of [`Flag`]s and the most recently loaded
/// (normalized) arguments, and resolves the one against the other.
///
/// Flags are registered up front with [`OptParser::on`] (or its aliases).
/// Each time [`OptParser::parse`] is called, the raw arguments are normalized
/// afresh, unknown flags are reported, and every registered flag is resolved,
/// converted, and handed to its callback.
///
/// ## Matching
///
/// A flag is found by its long name first, then by its short alias. Only the
/// first occurrence of a given flag ever matches.
///
/// Names passed to the query methods that were never registered get the same
/// treatment with an inferred alias: a one-character name matches the first
/// flag starting with that character, and a longer name matches the first
/// one-character flag equal to its first character. This is a loose match
/// and can pick the wrong thing; register your flags if that matters.
///
/// Note that a longer name never matches a different longer flag, even if
/// they start with the same character. Looking up an unregistered `ping`
/// will find `-p`, but not `--port`.
///
/// ## Values
///
/// Values are whatever bare word immediately follows the flag. Boolean flags
/// never take values; their presence alone makes them `true`, and any bare
/// word following them is treated as a trailing argument.
///
/// ## Examples
///
/// ```
/// use optparser::{Flag, OptKind, OptParser, OptValue};
///
/// let mut parser = OptParser::new();
/// parser.on(Flag::new("port", OptKind::Int).with_default(80)).unwrap()
///     .on(Flag::switch("verbose")).unwrap();
///
/// let opts = parser.parse(["--port", "8000", "-v", "notes.txt"], false).unwrap();
/// assert_eq!(opts.get("port"), Some(&OptValue::Int(8000)));
/// assert_eq!(opts.get("verbose"), Some(&OptValue::Bool(true)));
/// assert_eq!(parser.tail(), ["notes.txt"]);
///
/// // Nothing is forgotten between calls except the arguments.
/// let opts = parser.parse(["-p"], false).unwrap();
/// assert_eq!(opts.get("port"), Some(&OptValue::Int(80)));
/// assert_eq!(opts.get("verbose"), Some(&OptValue::Bool(false)));
/// ```
#[derive(Default)]
pub struct OptParser {
	/// # Registered Flags.
	registry: IndexMap<String, Flag>,

	/// # Loaded Arguments.
	normalized: Normalized,

	/// # Unknown-Flag Strategy.
	///
	/// When `None`, unknown flags are an error.
	unknown: Option<UnknownFn>,
}

impl fmt::Debug for OptParser {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OptParser")
			.field("registry", &self.registry.values().collect::<Vec<_>>())
			.field("normalized", &self.normalized)
			.field("unknown", &self.unknown.as_ref().map_or("default", |_| "custom"))
			.finish()
	}
}

/// ## Instantiation and Registration.
impl OptParser {
	#[must_use]
	/// # New.
	///
	/// Return an empty parser with no flags and no arguments.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Arguments.
	///
	/// Return a parser with `args` preloaded, for use with the query methods
	/// or [`OptParser::dispatch`].
	///
	/// Note that the arguments are normalized _now_, so boolean flags
	/// registered afterward will not be recognized as such until the
	/// arguments are loaded again.
	///
	/// ## Examples
	///
	/// ```
	/// use optparser::{OptKind, OptParser, OptValue};
	///
	/// let parser = OptParser::with_args(["--port", "8000"]);
	/// assert_eq!(
	///     parser.opt_value("p", OptKind::Int, None),
	///     Some(OptValue::Int(8000)),
	/// );
	/// ```
	pub fn with_args<I, S>(args: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut out = Self::default();
		out.load(args);
		out
	}

	/// # With Flag.
	///
	/// Builder-style version of [`OptParser::on`].
	///
	/// ## Errors
	///
	/// This will return an error if the flag's name or short alias is already
	/// taken.
	pub fn with(mut self, flag: Flag) -> Result<Self, OptError> {
		self.on(flag)?;
		Ok(self)
	}

	/// # With Flags.
	///
	/// Register several flags at once.
	///
	/// ## Errors
	///
	/// This will return an error if any flag's name or short alias is already
	/// taken.
	pub fn with_flags<I: IntoIterator<Item=Flag>>(self, flags: I) -> Result<Self, OptError> {
		flags.into_iter().try_fold(self, Self::with)
	}

	#[must_use]
	/// # With Unknown-Flag Strategy.
	///
	/// Builder-style version of [`OptParser::on_unknown`].
	pub fn with_unknown<F>(mut self, cb: F) -> Self
	where F: FnMut(&[String]) -> Result<(), OptError> + 'static {
		self.on_unknown(cb);
		self
	}

	/// # Register Flag.
	///
	/// Flags with empty names are silently ignored.
	///
	/// ## Examples
	///
	/// ```
	/// use optparser::{Flag, OptKind, OptParser};
	///
	/// let mut parser = OptParser::new();
	/// parser.on(Flag::switch("pretty")).unwrap();
	///
	/// // This would also want -p…
	/// assert!(parser.on(Flag::new("port", OptKind::Int)).is_err());
	///
	/// // …unless told otherwise.
	/// assert!(parser.on(Flag::new("port", OptKind::Int).with_short('P')).is_ok());
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the name was previously registered, or
	/// if its short alias — explicit or inferred — belongs to another flag.
	pub fn on(&mut self, flag: Flag) -> Result<&mut Self, OptError> {
		let Some(short) = flag.short() else {
			debug!("Ignoring flag with empty name.");
			return Ok(self);
		};

		if self.registry.contains_key(flag.name()) {
			return Err(OptError::DuplicateFlag(flag.name().to_owned()));
		}

		if let Some(other) = self.registry.values().find(|f| f.short() == Some(short)) {
			return Err(OptError::DuplicateShort {
				short,
				flag: flag.name().to_owned(),
				other: other.name().to_owned(),
			});
		}

		debug!(flag = flag.name(), %short, kind = %flag.kind(), "Registered flag.");
		self.registry.insert(flag.name().to_owned(), flag);
		Ok(self)
	}

	#[inline]
	/// # Register Flag.
	///
	/// This is an alias for [`OptParser::on`].
	///
	/// ## Errors
	///
	/// Same as [`OptParser::on`].
	pub fn add(&mut self, flag: Flag) -> Result<&mut Self, OptError> { self.on(flag) }

	/// # Register Exit Flag.
	///
	/// Register `flag` with a callback that, if the flag is given, renders
	/// some output — a version string, say — and stops the parse with an
	/// [`OptError::Exit`] carrying it. Printing and exiting is left to the
	/// caller.
	///
	/// ## Examples
	///
	/// ```
	/// use optparser::{Flag, OptError, OptParser};
	///
	/// let mut parser = OptParser::new();
	/// parser.on_exit(Flag::switch("version"), |_| "1.0.0".to_owned()).unwrap();
	///
	/// let err = parser.parse(["-v"], false).unwrap_err();
	/// assert_eq!(err, OptError::Exit("1.0.0".to_owned()));
	/// assert_eq!(err.exit_code(), 0);
	/// ```
	///
	/// ## Errors
	///
	/// Same as [`OptParser::on`].
	pub fn on_exit<F>(&mut self, flag: Flag, cb: F) -> Result<&mut Self, OptError>
	where F: FnMut(Option<&OptValue>) -> String + 'static {
		self.on(flag.with_exit(cb))
	}

	/// # Set Unknown-Flag Strategy.
	///
	/// Replace the default handling of unknown flags — an
	/// [`OptError::UnknownOption`] — with `cb`, which receives the offending
	/// names. Returning an error aborts the parse.
	pub fn on_unknown<F>(&mut self, cb: F) -> &mut Self
	where F: FnMut(&[String]) -> Result<(), OptError> + 'static {
		self.unknown.replace(Box::new(cb));
		self
	}
}

/// ## Parsing.
impl OptParser {
	/// # Load Arguments.
	///
	/// Normalize `args` against the registered flags, replacing whatever was
	/// loaded before. No callbacks are invoked.
	pub fn load<I, S>(&mut self, args: I) -> &mut Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let normalized = Normalized::new(args, |name| self.is_switch(name));
		self.normalized = normalized;
		self
	}

	/// # Parse.
	///
	/// Load `args` and [dispatch](OptParser::dispatch) them.
	///
	/// ## Errors
	///
	/// See [`OptParser::dispatch`].
	pub fn parse<I, S>(&mut self, args: I, ignore_unknown: bool)
	-> Result<Opts, OptError>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		self.load(args);
		self.dispatch(ignore_unknown)
	}

	/// # Dispatch.
	///
	/// Resolve every registered flag against the loaded arguments, invoking
	/// their callbacks (in registration order) along the way, and return the
	/// results.
	///
	/// Flags without a value are left out, except for boolean flags, which
	/// are always present.
	///
	/// Unless `ignore_unknown` is set, any unknown flags are first passed to
	/// the unknown-flag strategy.
	///
	/// ## Errors
	///
	/// This will return an error if the unknown-flag strategy does — by
	/// default, whenever there are any — or if an exit flag was given.
	pub fn dispatch(&mut self, ignore_unknown: bool) -> Result<Opts, OptError> {
		if ! ignore_unknown {
			let unknown = self.unknown_opts();
			if ! unknown.is_empty() {
				debug!(flags = ?unknown, "Unknown flag(s).");
				match self.unknown.as_mut() {
					Some(cb) => cb(&unknown)?,
					None => return Err(OptError::UnknownOption(unknown)),
				}
			}
		}

		// Resolve everything before letting the callbacks loose.
		let resolved: Vec<(Option<OptValue>, bool)> = self.registry.iter()
			.map(|(name, flag)| (self.resolve(flag), self.position(name).is_some()))
			.collect();

		let mut out = Opts::with_capacity(resolved.len());
		for ((name, flag), (value, given)) in self.registry.iter_mut().zip(resolved) {
			trace!(flag = name.as_str(), value = ?value, given, "Resolved flag.");
			match &mut flag.callback {
				Callback::None => {},
				Callback::Value(cb) => { cb(value.as_ref()); },
				Callback::Exit(cb) =>
					if given { return Err(OptError::Exit(cb(value.as_ref()))); },
			}

			if let Some(value) = value { out.insert(name.clone(), value); }
		}

		Ok(out)
	}

	#[must_use]
	/// # Options.
	///
	/// Return the same mapping as [`OptParser::dispatch`] would, but without
	/// invoking any callbacks or checking for unknown flags.
	pub fn opts(&self) -> Opts {
		self.registry.iter()
			.filter_map(|(name, flag)| self.resolve(flag).map(|v| (name.clone(), v)))
			.collect()
	}
}

/// ## Queries.
impl OptParser {
	#[must_use]
	/// # Normalized Arguments.
	pub const fn normalized(&self) -> &Normalized { &self.normalized }

	#[must_use]
	/// # Tail.
	///
	/// Return the positional arguments not claimed by any flag.
	pub fn tail(&self) -> &[String] { self.normalized.tail() }

	#[must_use]
	/// # Registered Flag.
	pub fn flag(&self, name: &str) -> Option<&Flag> { self.registry.get(name) }

	#[must_use]
	/// # Valid Flag?
	///
	/// True if `name` is the name or short alias of a registered flag.
	pub fn valid_flag(&self, name: &str) -> bool {
		self.registry.contains_key(name) ||
		self.registry.values().any(|f| f.matches(name))
	}

	#[must_use]
	/// # Flag Given?
	///
	/// True if `name` was among the loaded arguments. If either side is a
	/// single character, only first characters are compared.
	///
	/// ## Examples
	///
	/// ```
	/// use optparser::OptParser;
	///
	/// let parser = OptParser::with_args(["--help", "-v"]);
	/// assert!(parser.opt_given("help"));
	/// assert!(parser.opt_given("h"));
	/// assert!(parser.opt_given("version"));
	/// assert!(! parser.opt_given("hilfe"));
	/// ```
	pub fn opt_given(&self, name: &str) -> bool {
		let one = single_char(name).is_some();
		self.normalized.flags().any(|arg|
			if one || single_char(arg).is_some() { same_first_char(arg, name) }
			else { arg == name }
		)
	}

	#[must_use]
	/// # Unknown Flags.
	///
	/// Return the loaded flag names that do not belong to any registered
	/// flag, in order.
	pub fn unknown_opts(&self) -> Vec<String> {
		self.normalized.flags()
			.filter(|f| ! self.valid_flag(f))
			.map(str::to_owned)
			.collect()
	}

	#[must_use]
	/// # Option Value.
	///
	/// Look up `name` in the loaded arguments and return its value as `kind`.
	///
	/// If the flag is missing, `default` is returned. The same goes if it
	/// has no value, except for boolean kinds, which are `true` whenever the
	/// flag is present. (A missing boolean without a default is `false`.)
	///
	/// `name` need not be registered; see the [matching](OptParser#matching)
	/// notes for how unregistered names are looked up.
	///
	/// ## Examples
	///
	/// ```
	/// use optparser::{OptKind, OptParser, OptValue};
	///
	/// let parser = OptParser::with_args(["--ip", "0.0.0.0", "-v"]);
	/// assert_eq!(
	///     parser.opt_value("ip", OptKind::String, None),
	///     Some(OptValue::Str("0.0.0.0".to_owned())),
	/// );
	/// assert_eq!(
	///     parser.opt_value("v", OptKind::String, Some("1.0.0".into())),
	///     Some(OptValue::Str("1.0.0".to_owned())),
	/// );
	/// assert_eq!(parser.opt_value("v", OptKind::Bool, None), Some(OptValue::Bool(true)));
	/// ```
	pub fn opt_value(&self, name: &str, kind: OptKind, default: Option<OptValue>)
	-> Option<OptValue> {
		self.value_at(self.position(name), kind, default)
	}
}

/// ## Internal Helpers.
impl OptParser {
	/// # Is Switch?
	///
	/// True if `name` is the name or alias of a registered boolean flag.
	fn is_switch(&self, name: &str) -> bool {
		self.registry.values().any(|f| f.kind().is_bool() && f.matches(name))
	}

	/// # Position.
	///
	/// Find the index of the flag token for `name`.
	fn position(&self, name: &str) -> Option<usize> {
		self.normalized.position(|f| f == name).or_else(||
			// Registered flags have a definite alias.
			if let Some(flag) = self.registry.get(name) {
				let short = flag.short()?;
				self.normalized.position(|f| single_char(f) == Some(short))
			}
			// Otherwise we have to guess.
			else if single_char(name).is_some() {
				self.normalized.position(|f| same_first_char(f, name))
			}
			else {
				let first = name.chars().next()?;
				self.normalized.position(|f| single_char(f) == Some(first))
			}
		)
	}

	/// # Resolve Registered Flag.
	fn resolve(&self, flag: &Flag) -> Option<OptValue> {
		self.value_at(self.position(flag.name()), flag.kind(), flag.default().cloned())
	}

	/// # Value At.
	///
	/// Pull the value for the flag at `pos`, if any.
	fn value_at(&self, pos: Option<usize>, kind: OptKind, default: Option<OptValue>)
	-> Option<OptValue> {
		let Some(pos) = pos else {
			return
				if kind.is_bool() { default.or(Some(OptValue::Bool(false))) }
				else { default };
		};

		match self.normalized.after(pos) {
			Some(Token::Switch) => Some(OptValue::Bool(true)),
			Some(Token::Value(v)) => Some(convert(v, kind)),
			Some(Token::Flag(_)) | None =>
				if kind.is_bool() { Some(OptValue::Bool(true)) }
				else { default },
		}
	}
}



/// # Same First Character?
fn same_first_char(a: &str, b: &str) -> bool {
	matches!((a.chars().next(), b.chars().next()), (Some(a), Some(b)) if a == b)
}
