//! Property-based tests for ctxkit

mod token_roundtrip;
