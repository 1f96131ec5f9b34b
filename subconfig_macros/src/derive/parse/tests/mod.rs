//! Unit tests for derive input parsing.

mod type_utils;
