pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Linear blend of `a` toward `b` by coverage `t` (0 = a, 255 = b).
pub(crate) fn lerp_u8(a: u8, b: u8, t: u8) -> u8 {
    let t = u16::from(t);
    let out = mul_div255_u16(u16::from(a), 255 - t) + mul_div255_u16(u16::from(b), t);
    out.min(255) as u8
}

/// Integer square root of `n` when `n` is a perfect square.
pub fn exact_sqrt(n: usize) -> Option<usize> {
    let mut root = (n as f64).sqrt() as usize;
    // Float rounding can land one off for very large inputs.
    while root.saturating_mul(root) > n {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= n {
        root += 1;
    }
    (root * root == n).then_some(root)
}
