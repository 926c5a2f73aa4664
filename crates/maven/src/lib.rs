mod runner;

pub use runner::{MavenRunner, java_home_for};
