//! S-expression layer underneath GDL.
//!
//! Game descriptions are KIF-style s-expressions. `SymbolFactory` turns text
//! into `Symbol` trees of atoms and lists, interned through the shared pool;
//! the `gdl` module then gives those trees their logical meaning.

pub mod factory;
pub mod grammar;

pub use factory::SymbolFactory;
pub use grammar::{Atom, List, Symbol};
