/*!
# OptParser

This crate provides a small, typed command-line flag parser called
[`OptParser`], offering a middle ground between rolling your own loop over
[`std::env::args`] and full-service crates like [clap](https://crates.io/crates/clap).

Flags are registered up front — each with a name, a [kind](OptKind), an
optional default, an optional short alias, and an optional callback — and
arguments are then parsed against them in a single pass:

* `--name value` and `-n value` both work; the short alias defaults to the first character of the name;
* Boolean flags are switches: `-v` alone makes them `true`;
* Values are coerced leniently into strings, integers, floats, or booleans;
* Anything not claimed by a flag ends up in the [tail](OptParser::tail);
* Unknown flags are an error unless ignored or handled by a custom strategy.

If that sounds too simple, just use [clap](https://crates.io/crates/clap)
instead. Haha.



## Example

```
use optparser::{Flag, OptError, OptKind, OptParser, OptValue};

let mut parser = OptParser::new()
    .with_flags([
        Flag::new("threads", OptKind::Int).with_default(1),
        Flag::switch("verbose"),
        Flag::switch("version").with_short('V').with_exit(|_| "1.2.3".to_owned()),
    ])
    .unwrap(); // An error will only occur if names or aliases collide.

match parser.parse(["-t", "4", "--verbose", "./foo"], false) {
    Ok(opts) => {
        assert_eq!(opts["threads"], OptValue::Int(4));
        assert_eq!(opts["verbose"], OptValue::Bool(true));
        assert_eq!(parser.tail(), ["./foo"]);
    },
    // Print the version and quit, or complain and quit.
    Err(e) => {
        println!("{e}");
        std::process::exit(e.exit_code());
    },
}
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod convert;
mod error;
mod flag;
mod kind;
mod normalize;
mod parser;
mod value;

pub use convert::{
	convert,
	convert_tagged,
};
pub use error::OptError;
pub use flag::Flag;
pub use kind::OptKind;
pub use normalize::{
	Normalized,
	Token,
};
pub use parser::{
	OptParser,
	Opts,
};
pub use value::OptValue;



#[must_use]
/// # CLI Arguments.
///
/// Return the arguments the program was called with, skipping the first
/// (command path) entry. Anything that isn't valid UTF-8 is converted lossily
/// rather than causing a panic.
///
/// ## Examples
///
/// ```no_run
/// use optparser::{Flag, OptParser};
///
/// let mut parser = OptParser::new().with(Flag::switch("help")).unwrap();
/// let opts = parser.parse(optparser::args(), false);
/// ```
pub fn args() -> Vec<String> {
	std::env::args_os()
		.skip(1)
		.map(|a| a.to_string_lossy().into_owned())
		.collect()
}
