/// Filesystem adapters: executable lookup and output directory handling
mod directory_manager;
mod path_locator;

pub use directory_manager::FileSystemDirectoryManager;
pub use path_locator::PathExecutableLocator;
