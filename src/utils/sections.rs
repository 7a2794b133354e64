// ============================================================================
// Sectioned Batch Processing
// Split large parameter lists into bounded sections
// ============================================================================
//
// Lookups keyed by a long parameter list (e.g. `WHERE id IN (...)`) slow
// down or hit driver limits past a few thousand values. These helpers run
// the lookup once per section of at most `SECTION_SIZE` parameters and
// concatenate the results in input order.
//
// ```ignore
// use common_tools::utils::process_in_sections;
//
// let rows = process_in_sections(&ids, |chunk| repo.find_by_ids(chunk))?;
// ```

use std::fmt;

/// Default number of parameters per section
pub const SECTION_SIZE: usize = 1000;

/// Errors raised while processing sections.
#[derive(Debug)]
pub enum SectionError<E> {
    /// A section size of zero was requested
    InvalidSectionSize,
    /// The section function failed
    Failed {
        /// Zero-based index of the failing section
        section: usize,
        source: E,
    },
    /// A parallel worker panicked; `None` if the section is unknown
    WorkerPanicked { section: Option<usize> },
}

impl<E: fmt::Display> fmt::Display for SectionError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::InvalidSectionSize => {
                write!(f, "invalid argument: section size must be greater than zero")
            },
            SectionError::Failed { section, source } => {
                write!(f, "section {} failed: {}", section, source)
            },
            SectionError::WorkerPanicked {
                section: Some(section),
            } => write!(f, "worker for section {} panicked", section),
            SectionError::WorkerPanicked { section: None } => write!(f, "worker panicked"),
        }
    }
}

impl<E> std::error::Error for SectionError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SectionError::Failed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Process `params` in sections of [`SECTION_SIZE`].
pub fn process_in_sections<T, R, E, F>(params: &[T], f: F) -> Result<Vec<R>, SectionError<E>>
where
    F: FnMut(&[T]) -> Result<Vec<R>, E>,
{
    process_in_sections_with_size(params, SECTION_SIZE, f)
}

/// Process `params` in sections of at most `size` items, sequentially.
///
/// Empty input makes no calls. The first failing section aborts the run.
///
/// # Errors
/// - `InvalidSectionSize` if `size == 0`
/// - `Failed` with the section index and the function's error
pub fn process_in_sections_with_size<T, R, E, F>(
    params: &[T],
    size: usize,
    mut f: F,
) -> Result<Vec<R>, SectionError<E>>
where
    F: FnMut(&[T]) -> Result<Vec<R>, E>,
{
    if size == 0 {
        return Err(SectionError::InvalidSectionSize);
    }

    tracing::debug!(
        items = params.len(),
        sections = params.len().div_ceil(size),
        section_size = size,
        "processing in sections"
    );

    let mut results = Vec::new();
    for (section, chunk) in params.chunks(size).enumerate() {
        let part = f(chunk).map_err(|source| SectionError::Failed { section, source })?;
        results.extend(part);
    }
    Ok(results)
}

/// Process sections concurrently, one scoped worker thread per section.
///
/// Results are concatenated in section order regardless of completion order.
/// When several sections fail, the lowest section index is reported.
pub fn process_in_sections_parallel<T, R, E, F>(
    params: &[T],
    size: usize,
    f: F,
) -> Result<Vec<R>, SectionError<E>>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&[T]) -> Result<Vec<R>, E> + Sync,
{
    if size == 0 {
        return Err(SectionError::InvalidSectionSize);
    }

    let sections = params.len().div_ceil(size);
    tracing::debug!(
        items = params.len(),
        sections,
        section_size = size,
        "processing sections in parallel"
    );

    let f = &f;
    let joined = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = params
            .chunks(size)
            .map(|chunk| s.spawn(move |_| f(chunk)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    })
    .map_err(|_| SectionError::WorkerPanicked { section: None })?;

    let mut results = Vec::new();
    for (section, outcome) in joined.into_iter().enumerate() {
        let part = outcome
            .map_err(|_| SectionError::WorkerPanicked {
                section: Some(section),
            })?
            .map_err(|source| SectionError::Failed { section, source })?;
        results.extend(part);
    }
    Ok(results)
}
