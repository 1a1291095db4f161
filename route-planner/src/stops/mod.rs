//! Stop indices: interchange stops and name lookup.
//!
//! Users name stops by their display name, which is neither unique nor
//! consistently cased. These indices resolve names to stops and find the
//! stops where routes meet.

mod connections;
mod error;
mod names;

pub use connections::{Connection, find_connecting_stops, sorted_by_stop_name};
pub use error::{AmbiguousStop, LookupError};
pub use names::{StopLookup, StopMatch};
