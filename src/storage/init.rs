//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::SpendPaths;
use crate::error::SpendError;
use crate::models::Category;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Seeds the default category list when no category file exists yet. An
/// existing list is never overwritten.
pub fn initialize_storage(paths: &SpendPaths) -> Result<(), SpendError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        let data = CategoryData {
            categories: Category::defaults(),
        };
        write_json_atomic(paths.categories_file(), &data)?;
        tracing::info!(count = data.categories.len(), "seeded default categories");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file_io::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_seeds_default_categories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let data: CategoryData = read_json(paths.categories_file()).unwrap();
        assert_eq!(data.categories, Category::defaults());
    }

    #[test]
    fn test_existing_categories_kept() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let custom = CategoryData {
            categories: vec![Category::new("Travel")],
        };
        write_json_atomic(paths.categories_file(), &custom).unwrap();

        initialize_storage(&paths).unwrap();

        let data: CategoryData = read_json(paths.categories_file()).unwrap();
        assert_eq!(data.categories, vec![Category::new("Travel")]);
    }
}
