//! Unit tests for configuration accessors and enum parsing.

mod unit;
