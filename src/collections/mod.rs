//! Hand-built containers backing the catalog
//!
//! Three structures, each with an explicit algorithmic contract:
//!
//! - `LinkedList`: insertion-ordered results container
//! - `AvlTree`: height-balanced set-valued secondary index
//! - `HashTable`: resizable open-addressing primary store
//!
//! # Invariants Enforced
//!
//! - AVL balance factor stays within [-1, 1] after every insertion
//! - Table load factor never exceeds 0.65; capacity only grows
//! - Title sets collapse duplicates and preserve first-seen order

mod avl;
mod list;
mod table;

pub use avl::AvlTree;
pub use list::LinkedList;
pub use table::HashTable;
