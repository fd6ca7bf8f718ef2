//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing, so that a generated input can verify the output produced from it.

use proptest::{prop_assert_eq, test_runner::TestCaseResult};

/// Represents an input generated for testing purposes.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

/// Each input of the slice verifies the output at the same index.
impl<'i, 'o, T, U> Input<&'o [T]> for &'i [U]
where
    &'i U: Input<&'o T>,
{
    fn assert(self, output: &'o [T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len(), "input and output lengths differ");

        self.iter()
            .zip(output)
            .try_for_each(|(input, output)| input.assert(output))
    }
}
