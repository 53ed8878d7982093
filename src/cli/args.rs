//! Positional argument unpacking with fixed arity.

use crate::error::ApiError;

/// Unpack exactly `N` positional arguments or fail with [`ApiError::Arity`].
///
/// `usage` names the expected arguments, e.g. `"old name and new name"`.
pub fn unpack<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> Result<[&'a str; N], ApiError> {
    if args.len() != N {
        return Err(ApiError::Arity { expected: N, usage });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}
