use crate::image_pipeline::edge::types::{EdgeCandidates, EdgeMask, EdgeThresholds};

const SUPPRESSED: u8 = 0;
const WEAK: u8 = 1;

/// Double-threshold classification with 8-connected edge tracking.
///
/// Candidates at or above `high` are edges. Candidates in `[low, high)` are
/// edges only when a chain of such pixels links them to a strong one.
pub fn hysteresis(candidates: &EdgeCandidates, thresholds: EdgeThresholds) -> EdgeMask {
    let width = candidates.width;
    let height = candidates.height;
    let mut state = vec![SUPPRESSED; width * height];
    let mut stack = Vec::new();

    for (i, &m) in candidates.magnitude.iter().enumerate() {
        if m == 0 || m < thresholds.low() {
            continue;
        }
        if m >= thresholds.high() {
            state[i] = EdgeMask::EDGE;
            stack.push(i);
        } else {
            state[i] = WEAK;
        }
    }

    while let Some(i) = stack.pop() {
        let (x, y) = (i % width, i / width);
        for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                let j = ny * width + nx;
                if state[j] == WEAK {
                    state[j] = EdgeMask::EDGE;
                    stack.push(j);
                }
            }
        }
    }

    for s in state.iter_mut() {
        if *s == WEAK {
            *s = EdgeMask::NONE;
        }
    }

    EdgeMask::new(width, height, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(width: usize, magnitude: Vec<u32>) -> EdgeCandidates {
        EdgeCandidates {
            width,
            height: magnitude.len() / width,
            magnitude,
        }
    }

    #[test]
    fn test_weak_chain_attached_to_strong_survives() {
        #[rustfmt::skip]
        let c = candidates(5, vec![
            0,   0,   0,   0, 0,
            0, 250,   0,   0, 0,
            0,   0, 100,   0, 0,
            0,   0,   0, 120, 0,
            0,   0,   0,   0, 0,
        ]);

        let mask = hysteresis(&c, EdgeThresholds::default());
        assert!(mask.is_edge(1, 1));
        assert!(mask.is_edge(2, 2));
        assert!(mask.is_edge(3, 3));
        assert_eq!(mask.edge_count(), 3);
    }

    #[test]
    fn test_isolated_weak_is_dropped() {
        #[rustfmt::skip]
        let c = candidates(6, vec![
            0,   0, 0,   0,   0, 0,
            0, 200, 0, 150, 150, 0,
            0,   0, 0,   0,   0, 0,
        ]);

        let mask = hysteresis(&c, EdgeThresholds::default());
        assert!(mask.is_edge(1, 1));
        assert!(!mask.is_edge(3, 1));
        assert!(!mask.is_edge(4, 1));
        assert_eq!(mask.get(3, 1), EdgeMask::NONE);
    }

    #[test]
    fn test_below_low_breaks_chain() {
        #[rustfmt::skip]
        let c = candidates(5, vec![
            0,   0,  0,   0, 0,
            0, 300, 79, 100, 0,
            0,   0,  0,   0, 0,
        ]);

        let mask = hysteresis(&c, EdgeThresholds::default());
        assert_eq!(&mask.as_bytes()[5..10], &[0u8, 255, 0, 0, 0]);
    }

    #[test]
    fn test_threshold_bounds_are_inclusive() {
        let c = candidates(3, vec![0, 0, 0, 200, 80, 0, 0, 0, 0]);
        let mask = hysteresis(&c, EdgeThresholds::default());
        assert!(mask.is_edge(0, 1));
        assert!(mask.is_edge(1, 1));
    }

    #[test]
    fn test_empty_candidates() {
        let c = candidates(4, vec![0; 16]);
        let mask = hysteresis(&c, EdgeThresholds::new(0, 0));
        assert_eq!(mask.edge_count(), 0);
        assert!(mask.as_bytes().iter().all(|&v| v == EdgeMask::NONE));
    }
}
