//! Per-test argument types. Each validates its fields at construction;
//! run-time constraints that depend on the sequence length (Serial,
//! Approximate Entropy, Linear Complexity's `n/M >= 200`) are re-checked by
//! the kernel itself when it runs.

use crate::error::TestError;

fn invalid(msg: impl Into<String>) -> TestError {
    TestError::InvalidParameter(msg.into())
}

/// Block length for the Frequency Within a Block test. `Auto` picks `M` at
/// run time such that `M >= 20`, `M > n/100`, and `floor(n/M) < 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBlockArgs {
    Auto,
    Fixed(usize),
}

impl Default for FrequencyBlockArgs {
    fn default() -> Self {
        FrequencyBlockArgs::Auto
    }
}

impl FrequencyBlockArgs {
    pub fn new(block_length: usize) -> Result<Self, TestError> {
        if block_length == 0 {
            return Err(invalid("frequency block length must be >= 1"));
        }
        Ok(FrequencyBlockArgs::Fixed(block_length))
    }

    pub(crate) fn resolve(&self, n: usize) -> usize {
        match self {
            FrequencyBlockArgs::Fixed(m) => *m,
            FrequencyBlockArgs::Auto => {
                let mut m = 20usize.max(n / 100 + 1);
                while n / m >= 100 {
                    m += 1;
                }
                m.max(1)
            }
        }
    }
}

/// Template length `m` and block count `N` for Non-Overlapping Template
/// Matching. `2 <= m <= 21`, `1 <= N < 100`. Defaults: `m=9`, `N=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonOverlappingTemplateArgs {
    pub(crate) m: usize,
    pub(crate) n_blocks: usize,
}

impl Default for NonOverlappingTemplateArgs {
    fn default() -> Self {
        NonOverlappingTemplateArgs { m: 9, n_blocks: 8 }
    }
}

impl NonOverlappingTemplateArgs {
    pub fn new(template_len: usize, block_count: usize) -> Result<Self, TestError> {
        if !(2..=21).contains(&template_len) {
            return Err(invalid("non-overlapping template length must be in 2..=21"));
        }
        if !(1..100).contains(&block_count) {
            return Err(invalid("non-overlapping template block count must be in 1..100"));
        }
        Ok(NonOverlappingTemplateArgs {
            m: template_len,
            n_blocks: block_count,
        })
    }

    pub fn template_len(&self) -> usize {
        self.m
    }

    pub fn block_count(&self) -> usize {
        self.n_blocks
    }
}

/// Template length `m`, block length `M` and degrees of freedom `K` for
/// Overlapping Template Matching, plus the legacy-NIST behavior flag.
/// Defaults: `m=9`, `M=1032`, `K=6`, corrected (non-legacy) π values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlappingTemplateArgs {
    pub(crate) m: usize,
    pub(crate) block_len: usize,
    pub(crate) k: usize,
    pub(crate) legacy_nist: bool,
}

impl Default for OverlappingTemplateArgs {
    fn default() -> Self {
        OverlappingTemplateArgs {
            m: 9,
            block_len: 1032,
            k: 6,
            legacy_nist: false,
        }
    }
}

impl OverlappingTemplateArgs {
    pub fn new(template_len: usize, block_len: usize, freedom: usize) -> Result<Self, TestError> {
        if !(2..=21).contains(&template_len) {
            return Err(invalid("overlapping template length must be in 2..=21"));
        }
        if block_len == 0 {
            return Err(invalid("overlapping template block length must be >= 1"));
        }
        if freedom == 0 {
            return Err(invalid("overlapping template degrees of freedom must be >= 1"));
        }
        Ok(OverlappingTemplateArgs {
            m: template_len,
            block_len,
            k: freedom,
            legacy_nist: false,
        })
    }

    /// Forces the NIST reference implementation's fixed, known-inaccurate
    /// pi values. Only `template_len in {9, 10}` is accepted; `K` is forced
    /// to 5.
    pub fn new_legacy_nist(template_len: usize) -> Result<Self, TestError> {
        if template_len != 9 && template_len != 10 {
            return Err(invalid("legacy NIST overlapping template length must be 9 or 10"));
        }
        Ok(OverlappingTemplateArgs {
            m: template_len,
            block_len: 1032,
            k: 5,
            legacy_nist: true,
        })
    }
}

/// Block length for Linear Complexity. `Fixed` requires `500 <= M <= 5000`;
/// `Auto` picks a value at run time satisfying `n/M >= 200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearComplexityArgs {
    Auto,
    Fixed(usize),
}

impl Default for LinearComplexityArgs {
    fn default() -> Self {
        LinearComplexityArgs::Auto
    }
}

impl LinearComplexityArgs {
    pub fn new(block_length: usize) -> Result<Self, TestError> {
        if !(500..=5000).contains(&block_length) {
            return Err(invalid("linear complexity block length must be in 500..=5000"));
        }
        Ok(LinearComplexityArgs::Fixed(block_length))
    }

    pub(crate) fn resolve(&self, n: usize) -> usize {
        match self {
            LinearComplexityArgs::Fixed(m) => *m,
            LinearComplexityArgs::Auto => (n / 200).clamp(500, 5000),
        }
    }
}

/// Block length for the Serial test. `M >= 2`; the run-time constraint
/// `M < floor(log2(n)) - 2` is checked by the kernel. Default `16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialArgs {
    pub(crate) m: usize,
}

impl Default for SerialArgs {
    fn default() -> Self {
        SerialArgs { m: 16 }
    }
}

impl SerialArgs {
    pub fn new(block_length: usize) -> Result<Self, TestError> {
        if block_length < 2 {
            return Err(invalid("serial block length must be >= 2"));
        }
        Ok(SerialArgs { m: block_length })
    }

    pub fn block_length(&self) -> usize {
        self.m
    }
}

/// Block length for Approximate Entropy. `M >= 2`; the run-time constraint
/// `M < floor(log2(n)) - 5` is checked by the kernel. Default `10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateEntropyArgs {
    pub(crate) m: usize,
}

impl Default for ApproximateEntropyArgs {
    fn default() -> Self {
        ApproximateEntropyArgs { m: 10 }
    }
}

impl ApproximateEntropyArgs {
    pub fn new(block_length: usize) -> Result<Self, TestError> {
        if block_length < 2 {
            return Err(invalid("approximate entropy block length must be >= 2"));
        }
        Ok(ApproximateEntropyArgs { m: block_length })
    }

    pub fn block_length(&self) -> usize {
        self.m
    }
}

/// The per-test argument bundle passed to `run_all_tests`/`run_tests`.
/// Unset fields fall back to each test's default.
#[derive(Debug, Clone, Default)]
pub struct TestArgBundle {
    pub frequency_block: Option<FrequencyBlockArgs>,
    pub non_overlapping_template: Option<NonOverlappingTemplateArgs>,
    pub overlapping_template: Option<OverlappingTemplateArgs>,
    pub linear_complexity: Option<LinearComplexityArgs>,
    pub serial: Option<SerialArgs>,
    pub approximate_entropy: Option<ApproximateEntropyArgs>,
}

impl TestArgBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frequency_block(mut self, args: FrequencyBlockArgs) -> Self {
        self.frequency_block = Some(args);
        self
    }

    pub fn with_non_overlapping_template(mut self, args: NonOverlappingTemplateArgs) -> Self {
        self.non_overlapping_template = Some(args);
        self
    }

    pub fn with_overlapping_template(mut self, args: OverlappingTemplateArgs) -> Self {
        self.overlapping_template = Some(args);
        self
    }

    pub fn with_linear_complexity(mut self, args: LinearComplexityArgs) -> Self {
        self.linear_complexity = Some(args);
        self
    }

    pub fn with_serial(mut self, args: SerialArgs) -> Self {
        self.serial = Some(args);
        self
    }

    pub fn with_approximate_entropy(mut self, args: ApproximateEntropyArgs) -> Self {
        self.approximate_entropy = Some(args);
        self
    }

    pub(crate) fn frequency_block(&self) -> FrequencyBlockArgs {
        self.frequency_block.unwrap_or_default()
    }

    pub(crate) fn non_overlapping_template(&self) -> NonOverlappingTemplateArgs {
        self.non_overlapping_template.unwrap_or_default()
    }

    pub(crate) fn overlapping_template(&self) -> OverlappingTemplateArgs {
        self.overlapping_template.unwrap_or_default()
    }

    pub(crate) fn linear_complexity(&self) -> LinearComplexityArgs {
        self.linear_complexity.unwrap_or_default()
    }

    pub(crate) fn serial(&self) -> SerialArgs {
        self.serial.unwrap_or_default()
    }

    pub(crate) fn approximate_entropy(&self) -> ApproximateEntropyArgs {
        self.approximate_entropy.unwrap_or_default()
    }
}
