// ==========================================
// Fleetify Import Core - Import Layer
// ==========================================
// Role: normalize spreadsheet batches before persistence
// Input: header list + row matrix from an external reader
// ==========================================

// module declarations
pub mod account_mapper;
pub mod data_cleaner;
pub mod error;
pub mod header_canonicalizer;
pub mod header_dictionary;
pub mod hierarchy_inferencer;
pub mod hierarchy_sorter;
pub mod import_pipeline;
pub mod import_trait;
pub mod type_inferencer;
pub mod value_parser;

// stage implementations
pub use account_mapper::{AccountMapper, MappedAccounts};
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use header_canonicalizer::{
    ColumnMapping, HeaderCanonicalizer as HeaderCanonicalizerImpl, HeaderPlan,
};
pub use hierarchy_inferencer::HierarchyInferencer as HierarchyInferencerImpl;
pub use hierarchy_sorter::HierarchySorter as HierarchySorterImpl;
pub use import_pipeline::ImportPipeline;
pub use type_inferencer::TypeInferencer as TypeInferencerImpl;

// stage traits
pub use import_trait::{
    DataCleaner, HeaderCanonicalizer, HierarchyInferencer, HierarchySorter, TypeInferencer,
};
