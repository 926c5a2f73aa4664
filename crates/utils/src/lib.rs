mod checkout;
mod commits;
mod display_report;
mod find_git_repo;

pub use checkout::checkout_commit;
pub use commits::branch_commits;
pub use display_report::display_report;
pub use find_git_repo::find_git_repo;
