pub mod catalog;
pub mod confidence;
pub mod error;
pub mod keywords;
pub mod matcher;
pub mod mcp_api;
pub mod model;
pub mod scoring;
pub mod similarity;
