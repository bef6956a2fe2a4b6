pub mod reporting;
pub mod sankey;
