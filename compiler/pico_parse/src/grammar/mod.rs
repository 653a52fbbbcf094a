//! Grammar productions, one file per level:
//!
//! - `item.rs`: program and function definitions
//! - `stmt.rs`: blocks and statements
//! - `expr/`: the precedence chain down to primaries

mod expr;
mod item;
mod stmt;
