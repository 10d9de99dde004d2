/// Information gains closer than this are treated as a tie.
pub const GAIN_TOLERANCE: f64 = 1e-12;
/// Number of decimals the accuracy is printed with.
pub const ACCURACY_PRECISION: usize = 5;
