//! Workspace root package. Carries the rusty-hook pre-commit configuration.
