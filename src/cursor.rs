/// Fractional hour driving interpolation.
///
/// `advance` and `set` normalize modulo 24, so the auto-scroll step from
/// hour 23 restarts at 0. Values in (23, 24) stay representable and simply
/// produce no frame, matching the slider's dead zone past hour 23.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeCursor {
    t: f64,
}

impl TimeCursor {
    pub fn new(t: f64) -> Self {
        Self { t: wrap(t) }
    }

    pub fn value(&self) -> f64 {
        self.t
    }

    pub fn set(&mut self, t: f64) {
        self.t = wrap(t);
    }

    pub fn advance(&mut self, hours: f64) -> f64 {
        self.t = wrap(self.t + hours);
        self.t
    }
}

fn wrap(t: f64) -> f64 {
    t.rem_euclid(24.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_the_end_of_day() {
        let mut cursor = TimeCursor::new(23.0);
        assert_eq!(cursor.advance(1.0), 0.0);
        assert_eq!(cursor.advance(1.0), 1.0);
    }

    #[test]
    fn fractional_steps_accumulate() {
        let mut cursor = TimeCursor::new(5.0);
        assert_eq!(cursor.advance(0.25), 5.25);
        assert_eq!(cursor.advance(0.25), 5.5);
    }

    #[test]
    fn set_normalizes_into_the_day() {
        let mut cursor = TimeCursor::new(0.0);
        cursor.set(-1.0);
        assert_eq!(cursor.value(), 23.0);
        cursor.set(24.5);
        assert_eq!(cursor.value(), 0.5);
    }
}
