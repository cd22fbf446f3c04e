//! Size accounting for a compress or decompress run.
//!
//! The codec only reports the two byte counts; what to do about an
//! unfavorable ratio (the header can make small files grow) is the
//! caller's decision.

/// Input and output sizes of one codec operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Bytes read from the source
    pub input_bytes: u64,

    /// Bytes written to the sink
    pub output_bytes: u64,
}

impl CompressionStats {
    pub fn new(input_bytes: u64, output_bytes: u64) -> Self {
        Self {
            input_bytes,
            output_bytes,
        }
    }

    /// Output size as a fraction of input size (output / input).
    ///
    /// Returns 0.0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Fraction of the input size saved; negative when the output grew.
    pub fn space_saved(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            1.0 - self.ratio()
        }
    }

    /// True when the output ended up larger than the input.
    pub fn inflated(&self) -> bool {
        self.output_bytes > self.input_bytes
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self, label: &str) {
        println!("=== {} ===", label);
        println!("Input:  {} bytes", self.input_bytes);
        println!("Output: {} bytes", self.output_bytes);
        println!("Ratio: {:.1}%", self.ratio() * 100.0);
        println!("Space saved: {:.1}%", self.space_saved() * 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let stats = CompressionStats::new(1000, 750);
        assert_eq!(stats.ratio(), 0.75);
        assert!((stats.space_saved() - 0.25).abs() < 1e-9);
        assert!(!stats.inflated());
    }

    #[test]
    fn test_inflated() {
        let stats = CompressionStats::new(10, 25);
        assert!(stats.inflated());
        assert!(stats.space_saved() < 0.0);
    }

    #[test]
    fn test_zero_input() {
        let stats = CompressionStats::new(0, 0);
        assert_eq!(stats.ratio(), 0.0);
        assert_eq!(stats.space_saved(), 0.0);
    }
}
