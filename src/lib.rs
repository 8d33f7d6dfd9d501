//! Tour pricing resolution and transfer capacity planning engine.
//!
//! The pure computational core behind the proposal screens of a tour-operator
//! inventory tool: resolving the price of a sightseeing activity under
//! competing rate structures (standard / option / package, with a
//! Seat-In-Coach override), costing optional transfers, and planning vehicle
//! combinations that seat a given passenger count.
//!
//! Every operation is a synchronous total function over the records passed
//! in; there is no error type in the public contract. Malformed or partially
//! populated inventory data degrades to documented fallback rates instead of
//! failing, because these functions back a live price display driven by
//! half-filled forms.

pub mod models;
pub mod numeric;
pub mod services;
