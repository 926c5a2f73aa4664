mod inspect;
mod walk;

pub use inspect::{InspectArgs, handle_inspect};
pub use walk::{WalkArgs, handle_walk};
