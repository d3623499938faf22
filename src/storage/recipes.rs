//! Recipe file storage: save, read, list, delete.

use std::{fs, io, path::PathBuf};

use super::{Result, Storage, StorageError};

impl Storage {
    /// Writes recipe content under the recipes directory, overwriting
    /// any existing file. Returns the path written.
    pub fn save_recipe(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.recipe_path(filename);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Reads a saved recipe's full markdown body.
    pub fn read_recipe(&self, filename: &str) -> Result<String> {
        match fs::read_to_string(self.recipe_path(filename)) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::RecipeNotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Lists saved recipe filenames (`*.md`), sorted.
    pub fn list_recipes(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = match fs::read_dir(self.recipe_path("")) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".md") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Deletes a saved recipe file.
    pub fn delete_recipe(&self, filename: &str) -> Result<()> {
        match fs::remove_file(self.recipe_path(filename)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::RecipeNotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_storage;
    use super::*;

    #[test]
    fn save_and_read_recipe() {
        let (_dir, storage) = test_storage();

        storage.save_recipe("Soup.md", "## Soup\n").unwrap();
        assert_eq!(storage.read_recipe("Soup.md").unwrap(), "## Soup\n");
    }

    #[test]
    fn save_overwrites_existing_recipe() {
        let (_dir, storage) = test_storage();

        storage.save_recipe("Soup.md", "v1").unwrap();
        storage.save_recipe("Soup.md", "v2").unwrap();
        assert_eq!(storage.read_recipe("Soup.md").unwrap(), "v2");
    }

    #[test]
    fn read_missing_recipe_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.read_recipe("Nope.md").unwrap_err();

        assert!(matches!(err, StorageError::RecipeNotFound(_)));
    }

    #[test]
    fn list_recipes_is_sorted_and_md_only() {
        let (_dir, storage) = test_storage();

        storage.save_recipe("Stew.md", "").unwrap();
        storage.save_recipe("Bread.md", "").unwrap();
        storage.save_recipe("notes.txt", "").unwrap();

        assert_eq!(storage.list_recipes().unwrap(), vec!["Bread.md", "Stew.md"]);
    }

    #[test]
    fn delete_removes_the_file() {
        let (_dir, storage) = test_storage();

        storage.save_recipe("Soup.md", "x").unwrap();
        storage.delete_recipe("Soup.md").unwrap();

        assert!(matches!(
            storage.delete_recipe("Soup.md").unwrap_err(),
            StorageError::RecipeNotFound(_)
        ));
    }
}
