use raster_filters::Raster;

/// Builds a raster whose three channels all carry `values[x][y]`.
///
/// The outer slice indexes x (columns of the grid), the inner slice y, the
/// value convention used by the acceptance fixtures.
pub fn channel_replicated(values: &[&[i32]]) -> Raster {
    let w = values.len();
    let h = if w == 0 { 0 } else { values[0].len() };
    let mut out = Raster::new(w, h);
    for (x, column) in values.iter().enumerate() {
        assert_eq!(column.len(), h, "ragged fixture grid at column {x}");
        for (y, &v) in column.iter().enumerate() {
            out.set_pixel(x, y, v, v, v);
        }
    }
    out
}

/// Asserts that all three channels of `raster` equal `values[x][y]`.
pub fn assert_channels_match(raster: &Raster, values: &[&[i32]]) {
    assert_eq!(raster.w, values.len(), "width mismatch");
    for (x, column) in values.iter().enumerate() {
        assert_eq!(raster.h, column.len(), "height mismatch at column {x}");
        for (y, &v) in column.iter().enumerate() {
            let px = raster.get(x, y);
            assert_eq!(
                (px.r as i32, px.g as i32, px.b as i32),
                (v, v, v),
                "pixel ({x},{y})"
            );
        }
    }
}

/// Generates a diagonal intensity ramp, useful for property checks.
pub fn diagonal_ramp(width: usize, height: usize) -> Raster {
    let mut out = Raster::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 7 + y * 13) % 256) as i32;
            out.set_pixel(x, y, v, (v * 3) % 256, (255 - v).max(0));
        }
    }
    out
}
