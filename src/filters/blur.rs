//! Iterative box blur.
//!
//! A single pass replaces each pixel with the integer-truncated average of
//! itself and its in-bounds neighbors: interior pixels average 9 values,
//! edge pixels 6, corner pixels 4. The window shrinks at borders rather than
//! replicating samples, so every in-bounds pixel is counted exactly once.
//!
//! Passes chain: iteration N reads the output of iteration N−1; two single
//! passes compose to exactly one two-iteration call.
//!
//! Complexity: O(W·H) per pass; rows are processed in parallel.
use crate::raster::{Pixel, Raster};
use log::debug;
use rayon::prelude::*;

/// Blur `input` with `iterations` sequential box-filter passes.
///
/// For `iterations <= 0` the input is returned unchanged — moved back to the
/// caller, not copied. Each channel is averaged independently; channels never
/// mix.
pub fn box_blur(input: Raster, iterations: i32) -> Raster {
    if iterations <= 0 {
        return input;
    }
    let mut current = input;
    for pass in 0..iterations {
        current = blur_pass(&current);
        debug!(
            "box_blur pass {}/{} ({}x{})",
            pass + 1,
            iterations,
            current.w,
            current.h
        );
    }
    current
}

/// One full averaging pass producing a fresh grid.
fn blur_pass(src: &Raster) -> Raster {
    let w = src.w;
    let h = src.h;
    let mut out = Raster::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    out.data.par_chunks_mut(w).enumerate().for_each(|(y, out_row)| {
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        for (x, dst) in out_row.iter_mut().enumerate() {
            let x0 = x.saturating_sub(1);
            let x1 = (x + 1).min(w - 1);

            let mut sum_r = 0i32;
            let mut sum_g = 0i32;
            let mut sum_b = 0i32;
            let mut count = 0i32;
            for yy in y0..=y1 {
                for px in &src.row(yy)[x0..=x1] {
                    sum_r += px.r as i32;
                    sum_g += px.g as i32;
                    sum_b += px.b as i32;
                    count += 1;
                }
            }

            // i32 division truncates toward zero, as required.
            *dst = Pixel {
                r: (sum_r / count) as u8,
                g: (sum_g / count) as u8,
                b: (sum_b / count) as u8,
            };
        }
    });
    out
}
