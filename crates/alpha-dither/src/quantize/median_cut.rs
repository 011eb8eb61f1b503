//! Median-cut color quantization.
//!
//! The color space is recursively partitioned into boxes: the box with the
//! widest channel range is split at the population-weighted median of that
//! channel until the color budget is reached or no box can be split.

use super::Quantize;
use crate::color::Rgba;

/// Deterministic median-cut quantizer.
///
/// Only visible pixels (alpha != 0) contribute to the histogram; fully
/// transparent pixels map to a reserved slot and would only waste colors.
/// Every returned color is opaque, since indexed formats have no partial
/// alpha. When the image has no more distinct colors than the budget, the
/// colors are returned exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianCut;

impl Quantize for MedianCut {
    fn quantize(&self, pixels: &[Rgba], max_colors: usize) -> Vec<Rgba> {
        if max_colors == 0 {
            return Vec::new();
        }

        let colors = histogram(pixels);
        if colors.len() <= max_colors {
            return colors
                .iter()
                .map(|c| Rgba::opaque(c.rgb[0], c.rgb[1], c.rgb[2]))
                .collect();
        }

        let mut boxes = vec![ColorBox::from_colors(colors)];
        while boxes.len() < max_colors {
            let Some(idx) = widest_splittable(&boxes) else {
                break;
            };
            let (left, right) = boxes.remove(idx).split();
            boxes.insert(idx, right);
            boxes.insert(idx, left);
        }

        boxes.iter().map(ColorBox::average).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct ColorCount {
    rgb: [u8; 3],
    count: u32,
}

/// Count distinct visible RGB values, ordered by packed RGB key.
fn histogram(pixels: &[Rgba]) -> Vec<ColorCount> {
    let mut keys: Vec<u32> = pixels
        .iter()
        .filter(|px| !px.is_transparent())
        .map(|px| (px.r as u32) << 16 | (px.g as u32) << 8 | px.b as u32)
        .collect();
    keys.sort_unstable();

    let mut colors: Vec<ColorCount> = Vec::new();
    for key in keys {
        let rgb = [(key >> 16) as u8, (key >> 8) as u8, key as u8];
        match colors.last_mut() {
            Some(last) if last.rgb == rgb => last.count = last.count.saturating_add(1),
            _ => colors.push(ColorCount { rgb, count: 1 }),
        }
    }
    colors
}

/// Index of the box with the widest channel range that still holds more
/// than one color. Ties go to the earliest box.
fn widest_splittable(boxes: &[ColorBox]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (i, b) in boxes.iter().enumerate() {
        if b.colors.len() < 2 {
            continue;
        }
        let (_, range) = b.widest_channel();
        match best {
            Some((_, best_range)) if best_range >= range => {}
            _ => best = Some((i, range)),
        }
    }
    best.map(|(i, _)| i)
}

#[derive(Debug)]
struct ColorBox {
    colors: Vec<ColorCount>,
    min: [u8; 3],
    max: [u8; 3],
}

impl ColorBox {
    fn from_colors(colors: Vec<ColorCount>) -> Self {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for c in &colors {
            for ch in 0..3 {
                min[ch] = min[ch].min(c.rgb[ch]);
                max[ch] = max[ch].max(c.rgb[ch]);
            }
        }
        Self { colors, min, max }
    }

    /// (channel, range) of the widest channel; ties prefer R, then G.
    fn widest_channel(&self) -> (usize, u8) {
        let mut channel = 0;
        let mut range = self.max[0].saturating_sub(self.min[0]);
        for ch in 1..3 {
            let r = self.max[ch].saturating_sub(self.min[ch]);
            if r > range {
                channel = ch;
                range = r;
            }
        }
        (channel, range)
    }

    /// Split at the population median of the widest channel. Both halves
    /// are non-empty as long as the box holds at least two colors.
    fn split(self) -> (ColorBox, ColorBox) {
        let (channel, _) = self.widest_channel();
        let mut colors = self.colors;
        // Stable sort keeps the packed-key order among equal channel values
        colors.sort_by_key(|c| c.rgb[channel]);

        let total: u64 = colors.iter().map(|c| c.count as u64).sum();
        let mut acc = 0u64;
        let mut split_idx = 0;
        for (i, c) in colors.iter().enumerate() {
            acc += c.count as u64;
            if acc * 2 >= total {
                split_idx = i;
                break;
            }
        }
        split_idx = split_idx.min(colors.len().saturating_sub(2));

        let right = colors.split_off(split_idx + 1);
        (ColorBox::from_colors(colors), ColorBox::from_colors(right))
    }

    /// Population-weighted mean color, rounded to nearest.
    fn average(&self) -> Rgba {
        let mut sums = [0u64; 3];
        let mut total = 0u64;
        for c in &self.colors {
            let n = c.count as u64;
            for ch in 0..3 {
                sums[ch] += c.rgb[ch] as u64 * n;
            }
            total += n;
        }
        if total == 0 {
            return Rgba::opaque(0, 0, 0);
        }
        let mean = |s: u64| ((s + total / 2) / total) as u8;
        Rgba::opaque(mean(sums[0]), mean(sums[1]), mean(sums[2]))
    }
}
