// SPDX-License-Identifier: GPL-3.0-or-later

use super::Rectangle;

fn test_bounds(buflen: usize, stride: usize, r: &Rectangle) {
    debug_assert!(r.x >= 0 && r.y >= 0);
    debug_assert!(r.w > 0 && r.h > 0);
    debug_assert!(r.x as usize + r.w as usize <= stride);
    debug_assert!((r.y + r.h) as usize * stride <= buflen);
}

/// Iterate over the rows of a rectangle inside a flat buffer of the given stride
pub fn rect_rows<'a, T>(
    buf: &'a [T],
    stride: usize,
    r: &Rectangle,
) -> impl Iterator<Item = &'a [T]> + 'a {
    test_bounds(buf.len(), stride, r);
    let x0 = r.x as usize;
    let x1 = x0 + r.w as usize;
    buf.chunks_exact(stride)
        .skip(r.y as usize)
        .take(r.h as usize)
        .map(move |row| &row[x0..x1])
}

/// Mutable version of [`rect_rows`]
pub fn rect_rows_mut<'a, T>(
    buf: &'a mut [T],
    stride: usize,
    r: &Rectangle,
) -> impl Iterator<Item = &'a mut [T]> + 'a {
    test_bounds(buf.len(), stride, r);
    let x0 = r.x as usize;
    let x1 = x0 + r.w as usize;
    buf.chunks_exact_mut(stride)
        .skip(r.y as usize)
        .take(r.h as usize)
        .map(move |row| &mut row[x0..x1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUFFER: [i32; 25] = [
        0, 1, 2, 3, 4, 10, 11, 12, 13, 14, 20, 21, 22, 23, 24, 30, 31, 32, 33, 34, 40, 41, 42, 43,
        44,
    ];

    #[test]
    fn test_full() {
        let rows: Vec<&[i32]> = rect_rows(&BUFFER, 5, &Rectangle::new(0, 0, 5, 5)).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], &BUFFER[0..5]);
        assert_eq!(rows[4], &BUFFER[20..25]);
    }

    #[test]
    fn test_partial_middle() {
        let rows: Vec<&[i32]> = rect_rows(&BUFFER, 5, &Rectangle::new(1, 1, 3, 2)).collect();
        assert_eq!(rows, vec![&[11, 12, 13][..], &[21, 22, 23][..]]);
    }

    #[test]
    fn test_mutation_partial() {
        let mut buf = [0, 1, 2, 3, 10, 11, 12, 12, 20, 21, 22, 13, 30, 31, 32, 33];
        for pixel in rect_rows_mut(&mut buf, 4, &Rectangle::new(1, 1, 2, 2)).flatten() {
            *pixel += 50;
        }
        let expected = [0, 1, 2, 3, 10, 61, 62, 12, 20, 71, 72, 13, 30, 31, 32, 33];
        assert_eq!(buf, expected);
    }
}
