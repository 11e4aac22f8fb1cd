mod manifest_filesystem;
#[cfg(test)]
mod memory_manifest_store;

pub use manifest_filesystem::FilesystemManifestStore;
#[cfg(test)]
pub use memory_manifest_store::MemoryManifestStore;
