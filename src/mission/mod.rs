//! Mission document model
//!
//! Parses mission XML into a navigable tree, preserving everything the
//! source had (comments, layout whitespace, attribute order) so edited
//! documents serialize back with minimal churn.

mod document;
mod reader;
mod writer;

pub use document::{MissionDocument, XmlElement, XmlNode};
pub use reader::{parse_mission, read_mission};
pub use writer::serialize_mission;
