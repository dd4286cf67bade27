//! Debounce for the continuous camera scan stream.
//!
//! A QR code held in front of the camera decodes on every frame. Only the
//! first decode is submitted; anything within the scan delay after an
//! accepted scan is dropped, whatever its value.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanGate {
    delay_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl ScanGate {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns the trimmed value when the scan should be submitted.
    pub fn accept(&mut self, raw: &str, now_ms: u64) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.delay_ms {
                return None;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        Some(value.to_string())
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_scan_is_accepted() {
        let mut gate = ScanGate::new(2000);
        assert_eq!(gate.accept("42", 10_000), Some("42".to_string()));
    }

    #[test]
    fn test_scans_within_delay_are_dropped() {
        let mut gate = ScanGate::new(2000);
        assert!(gate.accept("42", 10_000).is_some());
        assert_eq!(gate.accept("42", 10_500), None);
        assert_eq!(gate.accept("43", 11_999), None);
        assert_eq!(gate.accept("43", 12_000), Some("43".to_string()));
    }

    #[test]
    fn test_blank_scans_do_not_arm_the_gate() {
        let mut gate = ScanGate::new(2000);
        assert_eq!(gate.accept("  ", 1_000), None);
        assert_eq!(gate.accept("7", 1_001), Some("7".to_string()));
    }

    #[test]
    fn test_reset() {
        let mut gate = ScanGate::new(2000);
        gate.accept("1", 5_000);
        gate.reset();
        assert!(gate.accept("1", 5_001).is_some());
    }
}
