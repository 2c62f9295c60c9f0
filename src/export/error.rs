use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors produced while loading scenes and exporting linked instances.
#[derive(Debug, Error)]
pub enum ExportError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization failure while writing export output.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Scene snapshot could not be parsed.
	#[error("invalid scene snapshot: {source}")]
	Snapshot {
		/// Underlying JSON parse error.
		source: serde_json::Error,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed snapshot exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Object enumeration yielded an index the source could not serve.
	#[error("scene object index {index} out of range")]
	ObjectOutOfRange {
		/// Offending enumeration index.
		index: usize,
	},
	/// Collection instance has no instanced collection set.
	#[error("object {object} instances a collection but none is set")]
	MissingInstanceCollection {
		/// Object name.
		object: String,
	},
	/// Instanced collection name does not resolve to a collection.
	#[error("object {object} instances unknown collection {collection}")]
	CollectionNotFound {
		/// Object name.
		object: String,
		/// Requested collection name.
		collection: String,
	},
	/// Instanced collection is local and has no owning library.
	#[error("collection {collection} instanced by {object} is not linked from a library")]
	CollectionNotLinked {
		/// Object name.
		object: String,
		/// Collection name.
		collection: String,
	},
	/// Collection's owning library does not resolve.
	#[error("collection {collection} references unknown library {library}")]
	LibraryNotFound {
		/// Collection name.
		collection: String,
		/// Requested library name.
		library: String,
	},
	/// Unknown export layout name.
	#[error("invalid export layout: {value}")]
	InvalidLayout {
		/// User-provided layout name.
		value: String,
	},
}

impl ExportError {
	/// Whether this error came from resolving an asset or library reference.
	pub fn is_reference_error(&self) -> bool {
		matches!(
			self,
			Self::MissingInstanceCollection { .. } | Self::CollectionNotFound { .. } | Self::CollectionNotLinked { .. } | Self::LibraryNotFound { .. }
		)
	}
}
