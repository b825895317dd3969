//! One module per `centra` subcommand.

pub mod load;
pub mod random;
