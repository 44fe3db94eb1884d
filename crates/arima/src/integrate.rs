//! Integration (repeated cumulative summation) and its inverse.
//!
//! Both directions use a virtual leading zero, so the output always has the
//! same length as the input and `difference(integrate(x, d), d) == x`.

/// Applies `d` rounds of cumulative summation.
///
/// Round `r` computes `z[j] = z[j-1] + base[j]` with `z[-1] = 0`; its output
/// is the base of round `r + 1`. `d = 0` returns the input unchanged.
pub fn integrate(series: &[f64], d: usize) -> Vec<f64> {
    let mut out = series.to_vec();
    integrate_in_place(&mut out, d);
    out
}

/// In-place variant of [`integrate`].
pub fn integrate_in_place(series: &mut [f64], d: usize) {
    for _ in 0..d {
        let mut acc = 0.0;
        for v in series.iter_mut() {
            acc += *v;
            *v = acc;
        }
    }
}

/// Applies `d` rounds of first differencing, inverting [`integrate`].
///
/// Each round computes `y[j] = z[j] - z[j-1]` with `z[-1] = 0`.
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    let mut out = series.to_vec();
    for _ in 0..d {
        let mut prev = 0.0;
        for v in out.iter_mut() {
            let cur = *v;
            *v = cur - prev;
            prev = cur;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_order_is_identity() {
        let x = [1.5, -2.0, 0.25];
        assert_eq!(integrate(&x, 0), x.to_vec());
        assert_eq!(difference(&x, 0), x.to_vec());
    }

    #[test]
    fn single_round_is_cumsum() {
        assert_eq!(integrate(&[1.0, 2.0, 3.0, 4.0], 1), vec![1.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn two_rounds() {
        // cumsum([1,1,1,1]) = [1,2,3,4]; cumsum again = [1,3,6,10]
        assert_eq!(integrate(&[1.0; 4], 2), vec![1.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn difference_inverts_integrate() {
        let x = [0.3, -1.2, 2.5, 0.0, 4.1, -0.7];
        for d in 0..4 {
            let back = difference(&integrate(&x, d), d);
            for (a, b) in back.iter().zip(x.iter()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn empty_input() {
        assert!(integrate(&[], 3).is_empty());
        assert!(difference(&[], 3).is_empty());
    }

    #[test]
    fn in_place_matches_allocating() {
        let x = [2.0, -1.0, 0.5];
        let mut buf = x;
        integrate_in_place(&mut buf, 2);
        assert_eq!(buf.to_vec(), integrate(&x, 2));
    }
}
