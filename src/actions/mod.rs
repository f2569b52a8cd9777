pub mod check_path_exists;
pub(crate) mod delete_file;
