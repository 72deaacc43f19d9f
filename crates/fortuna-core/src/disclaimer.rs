//! User-facing non-prediction notices.

/// Short notice printed under every set of generated numbers or metrics.
pub const DISCLAIMER: &str = "These numbers come from a uniform pseudo-random generator. \
They have no predictive advantage over any other selection, and the displayed \
metrics are decorative random values.";

/// Longer explanation of where the numbers come from.
pub fn rng_explanation() -> &'static str {
    "Numbers are drawn uniformly without replacement from the lottery's range \
using a standard pseudo-random generator. Some tools dress this up as \
\"quantum\" or \"AI-assisted\" selection; it is neither, and it does not need \
to be: a lottery draw is a uniform random event, and no generator, model or \
feature set can pick winning numbers better than chance.\n\n\
The evaluate-model command exists to demonstrate this. It trains a \
frequency-based predictor on past draws and compares it with random picks. \
Expect no statistically significant difference."
}
