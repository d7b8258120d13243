//! Word arithmetic over an arbitrary width of 1..=64 bits.
//!
//! Every result is reduced to the low `width` bits, so callers may treat the
//! values as exact unsigned integers modulo `2^width`.

/// `2^width - 1`.
pub fn word_mask(width: u32) -> u64 {
    debug_assert!((1..=64).contains(&width));
    u64::MAX >> (64 - width)
}

pub fn rotate_left(x: u64, r: u32, width: u32) -> u64 {
    let mask = word_mask(width);
    let x = x & mask;
    let r = r % width;
    if r == 0 {
        return x;
    }
    ((x << r) | (x >> (width - r))) & mask
}

pub fn rotate_right(x: u64, r: u32, width: u32) -> u64 {
    let mask = word_mask(width);
    let x = x & mask;
    let r = r % width;
    if r == 0 {
        return x;
    }
    ((x >> r) | (x << (width - r))) & mask
}

pub fn add_mod(a: u64, b: u64, width: u32) -> u64 {
    a.wrapping_add(b) & word_mask(width)
}

/// `((a - b) + 2^width) mod 2^width`.
pub fn sub_mod(a: u64, b: u64, width: u32) -> u64 {
    a.wrapping_sub(b) & word_mask(width)
}

/// Splits `block` into `(upper, lower)` words of `width` bits each.
pub fn split_block(block: u128, width: u32) -> (u64, u64) {
    let mask = word_mask(width) as u128;
    let upper = (block >> width) & mask;
    let lower = block & mask;
    (upper as u64, lower as u64)
}

pub fn join_block(upper: u64, lower: u64, width: u32) -> u128 {
    let mask = word_mask(width);
    (((upper & mask) as u128) << width) | (lower & mask) as u128
}
