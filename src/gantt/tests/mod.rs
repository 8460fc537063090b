//! Unit tests for the timeline context.
