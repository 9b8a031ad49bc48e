/// Round half away from zero and saturate into `i32`.
pub(crate) fn round_i32(v: f64) -> i32 {
    v.round() as i32
}

/// Truncate toward zero and saturate into `i32`.
pub(crate) fn trunc_i32(v: f64) -> i32 {
    v.trunc() as i32
}

/// Coverage in `[0, 1]` of one 8-bit alpha sample.
pub(crate) fn coverage_u8(a: u8) -> f32 {
    f32::from(a) / 255.0
}

/// Composite `ink` at `coverage` over a premultiplied float pixel.
///
/// Ink channels are not clamped; values outside `[0, 1]` survive compositing.
pub(crate) fn over_premul(dst: &mut [f32], ink: [f32; 3], coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    let keep = 1.0 - coverage;
    dst[0] = ink[0] * coverage + dst[0] * keep;
    dst[1] = ink[1] * coverage + dst[1] * keep;
    dst[2] = ink[2] * coverage + dst[2] * keep;
    dst[3] = coverage + dst[3] * keep;
}

/// Premultiplied float RGBA to straight alpha.
pub(crate) fn unpremul_f32(px: [f32; 4]) -> [f32; 4] {
    let a = px[3];
    if a <= 0.0 {
        return [0.0; 4];
    }
    [px[0] / a, px[1] / a, px[2] / a, a]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
