//! Unit tests for common components.
