//! Client application bootstrapping.
//!
//! Applications embedding the client can use this module to set up the
//! ambient services the client relies on, like logging.
pub mod logging;
