// ============================================================================
// Utilities Module
// Helpers that sit next to the numeric core
// ============================================================================

#[cfg(feature = "logging")]
mod logging;
mod sections;

pub use sections::{
    process_in_sections, process_in_sections_parallel, process_in_sections_with_size,
    SectionError, SECTION_SIZE,
};

#[cfg(feature = "logging")]
pub use logging::init_logging;
