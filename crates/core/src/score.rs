use rand::Rng;

/// Source of the pseudo-random score drawn inside a tier's band.
pub trait ScoreSource: Send + Sync {
    /// Uniform integer in the closed range `[low, high]`.
    fn draw_int(&self, low: u8, high: u8) -> u8;
}

/// Draws from the calling thread's RNG, so concurrent callers never share state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngScores;

impl ScoreSource for ThreadRngScores {
    fn draw_int(&self, low: u8, high: u8) -> u8 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_closed_range() {
        let src = ThreadRngScores;
        for _ in 0..500 {
            let v = src.draw_int(85, 100);
            assert!((85..=100).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_low() {
        assert_eq!(ThreadRngScores.draw_int(40, 40), 40);
        assert_eq!(ThreadRngScores.draw_int(50, 10), 50);
    }
}
