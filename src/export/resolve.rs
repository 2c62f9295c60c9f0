use crate::export::{ExportError, Result, SceneObject, SceneSource};

/// Extension substring removed from library file names.
pub const BLEND_EXTENSION: &str = ".blend";

/// Asset linkage of one collection instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLink {
	/// Instanced collection name.
	pub asset_name: String,
	/// Resolved file name of the collection's owning library.
	pub library_file_name: String,
}

impl AssetLink {
	/// Library file name with the `.blend` extension removed.
	pub fn filename(&self) -> String {
		strip_blend_extension(&self.library_file_name)
	}
}

/// Remove the first `.blend` occurrence from `name`.
///
/// This is a plain substring replace, not a suffix check: `my.blendfile` becomes
/// `myfile`, and `props.blend.blend` keeps its second extension.
pub fn strip_blend_extension(name: &str) -> String {
	name.replacen(BLEND_EXTENSION, "", 1)
}

/// Resolve `object`'s instanced collection through its owning library.
pub fn resolve_asset_link<S: SceneSource + ?Sized>(scene: &S, object: &SceneObject) -> Result<AssetLink> {
	let asset_name = object
		.instance_collection
		.as_deref()
		.ok_or_else(|| ExportError::MissingInstanceCollection { object: object.name.clone() })?;

	let collection = scene.collection(asset_name).ok_or_else(|| ExportError::CollectionNotFound {
		object: object.name.clone(),
		collection: asset_name.to_owned(),
	})?;

	let library_name = collection.library.as_deref().ok_or_else(|| ExportError::CollectionNotLinked {
		object: object.name.clone(),
		collection: collection.name.clone(),
	})?;

	let library = scene.library(library_name).ok_or_else(|| ExportError::LibraryNotFound {
		collection: collection.name.clone(),
		library: library_name.to_owned(),
	})?;

	Ok(AssetLink {
		asset_name: asset_name.to_owned(),
		library_file_name: library.resolved_file_name().to_owned(),
	})
}
