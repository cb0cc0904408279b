//! Block schedule for historical price sampling.

use crate::error::SdkError;

/// Blocks to sample when looking back `lookback` blocks from `tip` every
/// `step` blocks.
///
/// Starts at `tip - lookback` (genesis if the lookback reaches past it) and
/// stops before `tip`, giving `ceil(lookback / step)` ascending heights. Every
/// height is clamped to `tip`.
pub fn sample_blocks(tip: u64, lookback: u64, step: u64) -> Result<Vec<u64>, SdkError> {
    if step == 0 {
        return Err(SdkError::Validation("sampling step must be positive".to_string()));
    }

    let min_block = tip.saturating_sub(lookback);
    Ok((min_block..tip)
        .step_by(usize::try_from(step).unwrap_or(usize::MAX))
        .map(|block| block.min(tip))
        .collect())
}
