pub use self::insert_in_file::insert_after;
pub use self::read_file::read_file;
pub use self::search_in_file::{AnchorIds, find_build_file, find_file_reference};
pub use self::write_file::write_file;

mod insert_in_file;
mod read_file;
mod search_in_file;
mod write_file;
