//! Option schema
//!
//! Families describe their options into an [`ArgumentMap`]; the caller
//! (usually a command-line layer) sets raw textual values on the same map;
//! parameter objects then read them back through the typed getters, which
//! parse the text and check every [`Range`] attached to the option.
//!
//! ```rust
//! use fec_factory::arguments::{ArgumentInfo, ArgumentKey, ArgumentMap, ArgumentType, Range};
//!
//! let mut args = ArgumentMap::new();
//! args.add(
//!     ArgumentKey::new("enc", "fra").with_short("F"),
//!     ArgumentInfo::new(ArgumentType::Integer, "inter frame level.")
//!         .with_ranges([Range::Positive, Range::NonZero])
//!         .with_default(1),
//! );
//! args.set("F", "4");
//! assert_eq!(args.to_usize("enc-fra").unwrap(), Some(4));
//! ```

mod key;
mod map;
mod range;

pub use key::ArgumentKey;
pub use map::{ArgumentInfo, ArgumentMap};
pub use range::{ArgumentType, Range, Value};
