//! # tally-cli: Command-Line Driver for the Tally Stack
//!
//! Provides the `tally` binary, a thin harness over the library crates.
//!
//! ## Subcommands
//!
//! - `tally run <scenario>`: Open an election, register voters, cast votes,
//!   and print standings and the winner as JSON.
//! - `tally regions <tree>`: Sum the votes of a region tree.
//! - `tally increment <tally> <candidate>`: Add one vote to a tally file's
//!   contents and print the result.
//! - `tally validate <voters>`: Check voter records against validation rules.
//!
//! Input files may be YAML or JSON:
//!
//! ```bash
//! tally run scenarios/city-council.yaml --order votes-asc
//! tally regions regions/province.json
//! tally increment standings.json C2
//! tally validate voters.yaml --min-age 21 --require id --require age
//! ```

pub mod document;
pub mod increment;
pub mod regions;
pub mod run;
pub mod validate;

pub use document::load_document;
