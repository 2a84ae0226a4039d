/*!
# OptParser: Debug

This example parses whatever arguments it is given against a handful of
flags and displays the results. The parser's own trace output is printed to
STDERR.
*/

use optparser::{
	Flag,
	OptKind,
	OptParser,
};



fn main() {
	tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.with_writer(std::io::stderr)
		.init();

	let parser = OptParser::new()
		.with_flags([
			Flag::switch("help").with_exit(|_| "Usage: debug [FLAGS] [ARGS]…".to_owned()),
			Flag::new("port", OptKind::Int).with_default(8000),
			Flag::new("ip", OptKind::String),
			Flag::new("ratio", OptKind::Float).with_short('r'),
			Flag::switch("verbose"),
		]);

	let mut parser = match parser {
		Ok(p) => p,
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(e.exit_code());
		},
	};

	match parser.parse(optparser::args(), true) {
		Ok(opts) => {
			println!("\x1b[2mOPTS:\x1b[0m");
			for (k, v) in &opts { println!("  {k}: {v:?}"); }

			println!("\x1b[2mTAIL:\x1b[0m");
			for t in parser.tail() { println!("  {t}"); }

			let unknown = parser.unknown_opts();
			if ! unknown.is_empty() {
				println!("\x1b[2mUNKNOWN:\x1b[0m");
				for u in unknown { println!("  {u}"); }
			}
		},
		Err(e) => {
			println!("{e}");
			std::process::exit(e.exit_code());
		},
	}
}
