//! The deterministic 2-of-3 E/M classifier.
//!
//! CMS rules a visit into a level when at least two of its three complexity
//! axes reach that level, so the determination depends only on the
//! second-highest rank among the three.

use crate::level::EmLevel;

/// Determine the E/M level from the three axis ranks.
///
/// Each rank must be 1-4 (the resolution layer guarantees this). The
/// function is pure and total: every input triple maps to exactly one
/// level, and 99211 is unreachable since the minimum rank is 1.
pub fn determine(history: u8, exam: u8, mdm: u8) -> EmLevel {
    let second = second_highest(history, exam, mdm);

    if second >= 4 {
        EmLevel::Level5
    } else if second >= 3 {
        EmLevel::Level4
    } else if second >= 2 {
        EmLevel::Level3
    } else {
        EmLevel::Level2
    }
}

fn second_highest(a: u8, b: u8, c: u8) -> u8 {
    let mut ranks = [a, b, c];
    ranks.sort_unstable_by(|x, y| y.cmp(x));
    ranks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle_second_highest(h: u8, e: u8, m: u8) -> u8 {
        let mut v = vec![h, e, m];
        v.sort_unstable();
        v[1]
    }

    #[test]
    fn boundary_triples() {
        assert_eq!(determine(4, 4, 4), EmLevel::Level5);
        assert_eq!(determine(3, 3, 3), EmLevel::Level4);
        // second-highest of {2, 1, 2} is 2
        assert_eq!(determine(2, 1, 2), EmLevel::Level3);
        assert_eq!(determine(1, 1, 1), EmLevel::Level2);
        // second-highest of {1, 3, 4} is 3
        assert_eq!(determine(1, 3, 4), EmLevel::Level4);
    }

    #[test]
    fn depends_only_on_second_highest_rank() {
        for h in 1..=4u8 {
            for e in 1..=4u8 {
                for m in 1..=4u8 {
                    let expected = match oracle_second_highest(h, e, m) {
                        4 => EmLevel::Level5,
                        3 => EmLevel::Level4,
                        2 => EmLevel::Level3,
                        _ => EmLevel::Level2,
                    };
                    assert_eq!(determine(h, e, m), expected, "triple ({h}, {e}, {m})");
                }
            }
        }
    }

    #[test]
    fn order_independent() {
        for h in 1..=4u8 {
            for e in 1..=4u8 {
                for m in 1..=4u8 {
                    let level = determine(h, e, m);
                    assert_eq!(determine(e, h, m), level);
                    assert_eq!(determine(m, e, h), level);
                    assert_eq!(determine(e, m, h), level);
                }
            }
        }
    }

    #[test]
    fn monotone_in_each_axis() {
        for h in 1..=4u8 {
            for e in 1..=4u8 {
                for m in 1..=4u8 {
                    let base = determine(h, e, m);
                    if h < 4 {
                        assert!(determine(h + 1, e, m) >= base);
                    }
                    if e < 4 {
                        assert!(determine(h, e + 1, m) >= base);
                    }
                    if m < 4 {
                        assert!(determine(h, e, m + 1) >= base);
                    }
                }
            }
        }
    }

    #[test]
    fn never_produces_level_one() {
        for h in 1..=4u8 {
            for e in 1..=4u8 {
                for m in 1..=4u8 {
                    assert_ne!(determine(h, e, m), EmLevel::Level1);
                }
            }
        }
    }
}
