/// An in-memory zip archive ready to be saved under `name`.
#[derive(Debug, Clone)]
pub struct ArchiveBlob {
    pub name: String,
    pub bytes: Vec<u8>,
}
