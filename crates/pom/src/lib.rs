pub mod document;
pub mod error;
pub mod locator;
pub mod mutator;
pub mod resolver;
pub mod service;
pub mod version;

pub use document::{PomDocument, XmlElement, XmlNode, POM_NAMESPACE};
pub use error::PomError;
pub use locator::locate_java_version;
pub use mutator::apply_java_version;
pub use resolver::resolve_property;
pub use service::PomService;
pub use version::normalize_java_version;
