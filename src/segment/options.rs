use serde::{Deserialize, Serialize};

/// Parameters of the plate crop and of its local re-binarization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Margin added on every side of the group envelope before cropping.
    pub padding_px: i32,
    /// Side of the square neighbourhood weighted by the adaptive threshold.
    /// Even values are rounded up to the next odd size; the minimum is 3.
    pub adaptive_block_size: u32,
    /// Constant subtracted from the local Gaussian mean.
    pub adaptive_offset: i16,
    /// Width of the white strip placed between glyphs in [`super::glyph_strip`].
    pub separator_px: u32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            padding_px: 15,
            adaptive_block_size: 31,
            adaptive_offset: 10,
            separator_px: 12,
        }
    }
}

impl SegmentOptions {
    /// Effective (odd) neighbourhood side.
    pub fn adaptive_block(&self) -> u32 {
        self.adaptive_block_size.max(3) | 1
    }

    /// Gaussian sigma matching a `block x block` neighbourhood.
    pub fn adaptive_sigma(&self) -> f32 {
        0.3 * ((self.adaptive_block() - 1) as f32 * 0.5 - 1.0) + 0.8
    }

    /// Normalized 1-D Gaussian with one tap per pixel of the block.
    pub fn adaptive_kernel(&self) -> Vec<f32> {
        let block = self.adaptive_block();
        let sigma = self.adaptive_sigma();
        let center = (block / 2) as f32;
        let taps: Vec<f32> = (0..block)
            .map(|i| {
                let d = i as f32 - center;
                (-(d * d) / (2.0 * sigma * sigma)).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        taps.into_iter().map(|t| t / sum).collect()
    }
}
